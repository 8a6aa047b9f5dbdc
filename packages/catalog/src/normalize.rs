//! Price normalization.

use tracing::warn;

use crate::error::NormalizeError;
use crate::types::{BookRecord, RawBookRecord};

/// Convert price text to a number.
///
/// Every character that is not an ASCII digit or `.` is dropped before
/// parsing, so currency symbols, separators and signs never survive and the
/// result is non-negative.
pub fn normalize_price(raw: &str) -> Result<f64, NormalizeError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    cleaned
        .parse::<f64>()
        .map_err(|_| NormalizeError::InvalidPrice {
            raw: raw.to_string(),
        })
}

/// Normalize a batch of raw records.
///
/// Fails on the first unparsable price; no partial batch is returned.
pub fn normalize(raw: Vec<RawBookRecord>) -> Result<Vec<BookRecord>, NormalizeError> {
    raw.into_iter()
        .map(|record| -> Result<BookRecord, NormalizeError> {
            let price = normalize_price(&record.price).inspect_err(|e| {
                warn!(title = %record.title, error = %e, "price normalization failed");
            })?;
            Ok(BookRecord {
                title: record.title,
                price,
                availability: record.availability,
            })
        })
        .collect()
}

/// Render a price the way a float column is printed: `51.77`, `20.0`.
pub fn format_price(price: f64) -> String {
    if price.is_finite() && price.fract() == 0.0 && price.abs() < 1e16 {
        format!("{:.1}", price)
    } else {
        price.to_string()
    }
}
