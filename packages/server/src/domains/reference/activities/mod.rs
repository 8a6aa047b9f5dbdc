pub mod load;

pub use load::{load_reference, ReferenceError};
