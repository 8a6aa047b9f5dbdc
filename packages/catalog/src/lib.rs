//! Book catalog scraping library
//!
//! Fetches a book-listing page, extracts one record per product card,
//! normalizes prices to numbers and moves the result in and out of a
//! generic [`Table`] (CSV and HTML).
//!
//! # Usage
//!
//! ```rust,ignore
//! use catalog::{scrape_catalog, HttpFetcher};
//!
//! let fetcher = HttpFetcher::new(std::time::Duration::from_secs(30))?;
//! let records = scrape_catalog(&fetcher, "http://books.toscrape.com/index.html").await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - The [`Fetcher`] seam
//! - [`fetchers`] - HTTP and mock fetchers
//! - [`extract`] - Product card extraction from markup
//! - [`normalize`] - Price text to number
//! - [`table`] - CSV read/write and HTML table rendering
//! - [`types`] - Record and snapshot types

pub mod error;
pub mod extract;
pub mod fetchers;
pub mod normalize;
pub mod pipeline;
pub mod table;
pub mod traits;
pub mod types;

pub use error::{NormalizeError, ScrapeError, ScrapeResult, TableError};
pub use extract::extract_books;
pub use fetchers::{HttpFetcher, MockFetcher};
pub use normalize::{format_price, normalize, normalize_price};
pub use pipeline::scrape_catalog;
pub use table::Table;
pub use traits::fetcher::Fetcher;
pub use types::{
    records_from_table, AvailabilityCount, BookRecord, CatalogSnapshot, CatalogSummary, RawBookRecord,
    NO_AVAILABILITY, NO_PRICE, NO_TITLE,
};
