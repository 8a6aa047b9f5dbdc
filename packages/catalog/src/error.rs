//! Typed errors for the catalog library.

use thiserror::Error;

/// Errors raised while fetching and extracting the catalog page.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Source URL could not be parsed
    #[error("invalid source URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Transport-level failure (DNS, connect, timeout)
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Response body could not be read as text
    #[error("failed to read body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A CSS selector failed to compile
    #[error("invalid selector: {0}")]
    Selector(String),

    /// A scraped price could not be normalized
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

/// Errors raised while turning price text into a number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    #[error("price {raw:?} does not contain a number")]
    InvalidPrice { raw: String },
}

/// Errors raised while reading or interpreting tabular data.
#[derive(Debug, Error)]
pub enum TableError {
    /// No header row at all
    #[error("no columns to parse from input")]
    Empty,

    #[error("unterminated quoted field starting on line {line}")]
    UnterminatedQuote { line: usize },

    /// A data row has more fields than the header
    #[error("row {row}: expected {expected} fields, saw {found}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("missing column {0:?}")]
    MissingColumn(String),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}

/// Result type alias for scrape operations.
pub type ScrapeResult<T> = std::result::Result<T, ScrapeError>;
