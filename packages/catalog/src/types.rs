//! Catalog record and snapshot types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::TableError;
use crate::normalize::{format_price, normalize_price};
use crate::table::Table;

/// Placeholder used when a product card has no title link.
pub const NO_TITLE: &str = "No title";
/// Placeholder used when a product card has no price element.
pub const NO_PRICE: &str = "No price";
/// Placeholder used when a product card has no availability element.
pub const NO_AVAILABILITY: &str = "No availability";

/// Column names of a catalog table, in export order.
pub const COLUMNS: [&str; 3] = ["title", "price", "availability"];

/// One product card as it appears in the markup, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBookRecord {
    pub title: String,
    /// Price text including currency symbol, e.g. `£51.77`
    pub price: String,
    pub availability: String,
}

/// A normalized book record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookRecord {
    pub title: String,
    pub price: f64,
    pub availability: String,
}

/// Number of records sharing one availability label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailabilityCount {
    pub label: String,
    pub count: usize,
    /// Fraction of all records, in `0.0..=1.0`
    pub share: f64,
}

impl AvailabilityCount {
    /// Percentage label in `%1.1f%%` form.
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.share * 100.0)
    }
}

/// Lightweight description of a snapshot, for health output and logs.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSummary {
    pub records: usize,
    pub generation: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<DateTime<Utc>>,
}

/// Immutable, ordered set of records produced by one fetch.
///
/// Snapshots are never edited in place; a new fetch produces a new snapshot
/// with a higher generation.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    records: Vec<BookRecord>,
    generation: u64,
    fetched_at: Option<DateTime<Utc>>,
}

impl CatalogSnapshot {
    /// The snapshot held before the first fetch.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(records: Vec<BookRecord>, generation: u64, fetched_at: DateTime<Utc>) -> Self {
        Self {
            records,
            generation,
            fetched_at: Some(fetched_at),
        }
    }

    pub fn records(&self) -> &[BookRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            records: self.records.len(),
            generation: self.generation,
            fetched_at: self.fetched_at,
        }
    }

    /// Highest price in the snapshot, `0.0` when empty.
    pub fn max_price(&self) -> f64 {
        self.records
            .iter()
            .map(|r| r.price)
            .fold(0.0_f64, f64::max)
    }

    /// Records grouped by availability label, most frequent first.
    ///
    /// Labels with equal counts keep the order in which they first appear.
    pub fn availability_counts(&self) -> Vec<AvailabilityCount> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for record in &self.records {
            match counts.iter_mut().find(|(label, _)| *label == record.availability) {
                Some((_, count)) => *count += 1,
                None => counts.push((record.availability.clone(), 1)),
            }
        }

        // sort_by is stable, so ties stay in first-seen order
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        let total = self.records.len().max(1) as f64;
        counts
            .into_iter()
            .map(|(label, count)| AvailabilityCount {
                label,
                count,
                share: count as f64 / total,
            })
            .collect()
    }

    /// Tabular form with `title,price,availability` columns.
    pub fn to_table(&self) -> Table {
        let headers = COLUMNS.iter().map(|c| c.to_string()).collect();
        let rows = self
            .records
            .iter()
            .map(|r| {
                vec![
                    r.title.clone(),
                    format_price(r.price),
                    r.availability.clone(),
                ]
            })
            .collect();
        Table::new(headers, rows)
    }
}

/// Rebuild records from a table carrying `title`, `price` and `availability` columns.
///
/// Column order does not matter; extra columns are ignored.
pub fn records_from_table(table: &Table) -> Result<Vec<BookRecord>, TableError> {
    let column = |name: &str| {
        table
            .column_index(name)
            .ok_or_else(|| TableError::MissingColumn(name.to_string()))
    };
    let title = column("title")?;
    let price = column("price")?;
    let availability = column("availability")?;

    table
        .rows()
        .iter()
        .map(|row| -> Result<BookRecord, TableError> {
            let cell = move |i: usize| row.get(i).map(String::as_str).unwrap_or_default();
            Ok(BookRecord {
                title: cell(title).to_string(),
                price: normalize_price(cell(price))?,
                availability: cell(availability).to_string(),
            })
        })
        .collect()
}
