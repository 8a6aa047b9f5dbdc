//! Scrape and export the book catalog.

use axum::{
    extract::Extension,
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
};

use super::TABLE_CLASSES;
use crate::domains::catalog::refresh_catalog;
use crate::server::app::AppState;
use crate::server::error::AppError;
use crate::server::templates::render_page;

/// Where the data-dependent routes send the browser when nothing is loaded yet.
pub const SCRAPE_ROUTE: &str = "/scrape";

/// Fetch the source page, publish a new snapshot and show it as a table.
pub async fn scrape_handler(
    Extension(state): Extension<AppState>,
) -> Result<Html<String>, AppError> {
    let snapshot = refresh_catalog(&state.deps).await?;
    let books = snapshot.to_table().to_html(TABLE_CLASSES);
    let count = snapshot.len().to_string();

    render_page(
        "scrape_index",
        "Scraped Books",
        &[("books", books.as_str()), ("count", count.as_str())],
    )
}

pub async fn export_csv_handler(Extension(state): Extension<AppState>) -> Response {
    let snapshot = state.deps.catalog.snapshot().await;
    if snapshot.is_empty() {
        return Redirect::to(SCRAPE_ROUTE).into_response();
    }

    csv_download(snapshot.to_table().to_csv(), "books_data.csv")
}

/// A CSV body the browser saves as `file_name`.
pub fn csv_download(body: String, file_name: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={file_name}"),
            ),
        ],
        body,
    )
        .into_response()
}
