pub mod activities;
pub mod charts;
pub mod models;

pub use activities::refresh_catalog;
pub use charts::{ChartError, ChartKind, ChartPublisher, PublishedChart};
pub use models::CatalogStore;
