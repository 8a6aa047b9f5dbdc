//! Product card extraction.
//!
//! Cards are `article.product_pod` elements. Each yields one
//! [`RawBookRecord`]; missing fields fall back to fixed placeholders.

use scraper::{ElementRef, Html, Selector};

use crate::error::{ScrapeError, ScrapeResult};
use crate::types::{RawBookRecord, NO_AVAILABILITY, NO_PRICE, NO_TITLE};

struct CardSelectors {
    card: Selector,
    title: Selector,
    price: Selector,
    availability: Selector,
}

impl CardSelectors {
    fn new() -> ScrapeResult<Self> {
        Ok(Self {
            card: parse_selector("article.product_pod")?,
            title: parse_selector("h3 a")?,
            price: parse_selector("p.price_color")?,
            availability: parse_selector("p.instock.availability")?,
        })
    }
}

fn parse_selector(selector: &str) -> ScrapeResult<Selector> {
    Selector::parse(selector).map_err(|e| ScrapeError::Selector(format!("{selector}: {e:?}")))
}

/// Extract every product card in document order.
pub fn extract_books(markup: &str) -> ScrapeResult<Vec<RawBookRecord>> {
    let selectors = CardSelectors::new()?;
    let document = Html::parse_document(markup);

    let records = document
        .select(&selectors.card)
        .map(|card| RawBookRecord {
            title: card
                .select(&selectors.title)
                .next()
                .and_then(|a| a.value().attr("title"))
                .map(str::to_string)
                .unwrap_or_else(|| NO_TITLE.to_string()),
            price: card
                .select(&selectors.price)
                .next()
                .map(stripped_text)
                .unwrap_or_else(|| NO_PRICE.to_string()),
            availability: card
                .select(&selectors.availability)
                .next()
                .map(stripped_text)
                .unwrap_or_else(|| NO_AVAILABILITY.to_string()),
        })
        .collect();

    Ok(records)
}

/// Concatenate descendant text nodes, each trimmed, empty ones skipped.
fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}
