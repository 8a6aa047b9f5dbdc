pub mod dataset;

pub use dataset::ReferenceDataset;
