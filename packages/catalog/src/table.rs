//! Rectangular string table with CSV and HTML codecs.

use std::fmt::Write;
use std::mem::take;

use crate::error::TableError;

/// A header row plus data rows, every row as wide as the header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table, padding short rows with empty cells.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                if row.len() < width {
                    row.resize(width, String::new());
                }
                row
            })
            .collect();
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Parse comma-separated text whose first record is the header.
    ///
    /// Quotes follow the usual `""` escape and may span lines. Blank lines are
    /// skipped. Rows with fewer fields than the header are padded; rows with
    /// more are an error.
    pub fn from_csv(text: &str) -> Result<Self, TableError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let mut records = parse_records(text)?.into_iter();

        let headers = records.next().ok_or(TableError::Empty)?;
        let width = headers.len();

        let mut rows = Vec::new();
        for (i, row) in records.enumerate() {
            if row.len() > width {
                return Err(TableError::RaggedRow {
                    row: i + 1,
                    expected: width,
                    found: row.len(),
                });
            }
            rows.push(row);
        }

        Ok(Self::new(headers, rows))
    }

    /// Serialize as CSV with `\n` line endings, quoting only where needed.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        write_row(&mut out, &self.headers);
        for row in &self.rows {
            write_row(&mut out, row);
        }
        out
    }

    /// Render an HTML `<table>` fragment.
    ///
    /// `classes` are appended to the `dataframe` class. Cell text is escaped.
    pub fn to_html(&self, classes: &str) -> String {
        let mut html = String::new();
        let class_attr = if classes.is_empty() {
            "dataframe".to_string()
        } else {
            format!("dataframe {classes}")
        };

        let _ = writeln!(html, r#"<table border="1" class="{}">"#, escape_html(&class_attr));
        html.push_str("  <thead>\n    <tr style=\"text-align: right;\">\n");
        for header in &self.headers {
            let _ = writeln!(html, "      <th>{}</th>", escape_html(header));
        }
        html.push_str("    </tr>\n  </thead>\n  <tbody>\n");
        for row in &self.rows {
            html.push_str("    <tr>\n");
            for cell in row {
                let _ = writeln!(html, "      <td>{}</td>", escape_html(cell));
            }
            html.push_str("    </tr>\n");
        }
        html.push_str("  </tbody>\n</table>");
        html
    }
}

/* ---------------- Parsing ---------------- */

fn parse_records(text: &str) -> Result<Vec<Vec<String>>, TableError> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut quote_line = 1;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            // quotes only open a field; mid-field they are literal text
            '"' if field.is_empty() => {
                in_quotes = true;
                quote_line = line;
            }
            ',' if !in_quotes => record.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                line += 1;
                record.push(take(&mut field));
                push_record(&mut records, take(&mut record));
            }
            c => {
                if c == '\n' {
                    line += 1;
                }
                field.push(c);
            }
        }
    }

    if in_quotes {
        return Err(TableError::UnterminatedQuote { line: quote_line });
    }

    record.push(field);
    push_record(&mut records, record);
    Ok(records)
}

fn push_record(records: &mut Vec<Vec<String>>, record: Vec<String>) {
    // a lone empty field is a blank line
    if !(record.len() == 1 && record[0].is_empty()) {
        records.push(record);
    }
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

fn write_row(out: &mut String, row: &[String]) {
    for (i, cell) in row.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if needs_quotes(cell) {
            out.push('"');
            out.push_str(&cell.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(cell);
        }
    }
    out.push('\n');
}

/// Escape text for use in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
