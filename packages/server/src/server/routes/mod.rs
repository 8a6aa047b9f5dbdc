// HTTP routes
pub mod catalog;
pub mod charts;
pub mod health;
pub mod pages;
pub mod reference;

pub use self::catalog::*;
pub use charts::*;
pub use health::*;
pub use pages::*;
pub use reference::*;

/// CSS classes applied to every rendered data table.
pub const TABLE_CLASSES: &str = "table table-striped";
