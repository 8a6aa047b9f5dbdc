// HTTP server setup (Axum + embedded templates)
pub mod app;
pub mod error;
pub mod routes;
pub mod static_files;
pub mod templates;

pub use app::*;
pub use error::AppError;
