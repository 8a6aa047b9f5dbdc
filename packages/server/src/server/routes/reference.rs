//! Reference dataset pages and downloads.

use axum::{extract::Extension, response::Html, response::Response};

use super::catalog::csv_download;
use super::TABLE_CLASSES;
use crate::domains::reference::{load_reference, ReferenceDataset};
use crate::server::app::AppState;
use crate::server::error::AppError;
use crate::server::templates::render_page;

pub async fn reference_page_handler(
    Extension(state): Extension<AppState>,
    dataset: ReferenceDataset,
) -> Result<Html<String>, AppError> {
    let table = load_reference(&state.deps.reference_dir, dataset).await?;
    let tables = table.to_html(TABLE_CLASSES);

    render_page(
        dataset.template(),
        dataset.title(),
        &[("tables", tables.as_str()), ("export_url", dataset.export_route())],
    )
}

pub async fn reference_export_handler(
    Extension(state): Extension<AppState>,
    dataset: ReferenceDataset,
) -> Result<Response, AppError> {
    let table = load_reference(&state.deps.reference_dir, dataset).await?;
    Ok(csv_download(table.to_csv(), dataset.download_name()))
}
