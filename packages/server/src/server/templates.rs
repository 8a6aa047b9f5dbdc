//! Embedded HTML templates.
//!
//! Page templates are body fragments wrapped in `base.html`. Placeholders are
//! written `{{ name }}`; values are inserted as-is, so callers escape any
//! untrusted text before passing it in.

use axum::response::Html;
use catalog::table::escape_html;
use rust_embed::RustEmbed;

use crate::server::error::AppError;

#[derive(RustEmbed)]
#[folder = "templates/"]
pub struct Templates;

fn load(name: &str) -> Result<String, AppError> {
    let file = Templates::get(&format!("{name}.html"))
        .ok_or_else(|| AppError::TemplateNotFound(name.to_string()))?;
    Ok(String::from_utf8_lossy(&file.data).into_owned())
}

/// Replace `{{ key }}` placeholders in one pass; unknown keys are left intact.
pub fn substitute(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find("}}") {
            Some(end) => {
                let key = after[..end].trim();
                match vars.iter().find(|(k, _)| *k == key) {
                    Some((_, value)) => out.push_str(value),
                    None => out.push_str(&rest[start..start + 2 + end + 2]),
                }
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

/// Render `name` inside the shared layout.
pub fn render_page(name: &str, title: &str, vars: &[(&str, &str)]) -> Result<Html<String>, AppError> {
    let content = substitute(&load(name)?, vars);
    let title = escape_html(title);
    let page = substitute(
        &load("base")?,
        &[("title", title.as_str()), ("page", name), ("content", content.as_str())],
    );
    Ok(Html(page))
}

/// Render a template that is a complete document on its own.
pub fn render_standalone(name: &str) -> Result<Html<String>, AppError> {
    load(name).map(Html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_known_keys_once() {
        let out = substitute(
            "<h1>{{ title }}</h1>{{content}}",
            &[("title", "Books"), ("content", "{{ title }}")],
        );
        assert_eq!(out, "<h1>Books</h1>{{ title }}");
    }

    #[test]
    fn unknown_and_unclosed_placeholders_are_kept() {
        assert_eq!(substitute("a {{ missing }} b", &[]), "a {{ missing }} b");
        assert_eq!(substitute("a {{ open", &[("open", "x")]), "a {{ open");
    }

    #[test]
    fn every_page_template_is_embedded() {
        for name in [
            "base",
            "loading",
            "index",
            "about",
            "codroidhub",
            "github",
            "blogs",
            "services",
            "web_scraping",
            "macromolecular",
            "macromolecular_dashboard",
            "scrape_index",
            "bar_chart",
            "pie_chart",
            "gilson",
            "gaming_mouse",
            "gaming_laptop",
        ] {
            assert!(Templates::get(&format!("{name}.html")).is_some(), "{name}");
        }
    }

    #[test]
    fn page_is_wrapped_in_layout() {
        let Html(page) = render_page("about", "About <me>", &[]).unwrap();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>About &lt;me&gt; | Bookshelf</title>"));
        assert!(page.contains(r#"class="page-about""#));
    }

    #[test]
    fn missing_template_is_an_error() {
        assert!(matches!(
            render_standalone("nope"),
            Err(AppError::TemplateNotFound(name)) if name == "nope"
        ));
    }
}
