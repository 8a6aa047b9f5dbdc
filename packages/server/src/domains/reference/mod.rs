pub mod activities;
pub mod models;

pub use activities::{load_reference, ReferenceError};
pub use models::ReferenceDataset;
