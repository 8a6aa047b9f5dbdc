//! Chart pages for the current catalog snapshot.

use std::fmt::Write as _;

use axum::{
    extract::Extension,
    response::{IntoResponse, Redirect, Response},
};
use catalog::table::escape_html;
use catalog::{format_price, CatalogSnapshot};
use image::Rgb;

use super::catalog::SCRAPE_ROUTE;
use crate::domains::catalog::charts::render::PIE_PALETTE;
use crate::domains::catalog::ChartKind;
use crate::server::app::AppState;
use crate::server::error::AppError;
use crate::server::templates::render_page;

pub async fn bar_chart_handler(
    Extension(state): Extension<AppState>,
) -> Result<Response, AppError> {
    chart_page(&state, ChartKind::Bar).await
}

pub async fn pie_chart_handler(
    Extension(state): Extension<AppState>,
) -> Result<Response, AppError> {
    chart_page(&state, ChartKind::Pie).await
}

async fn chart_page(state: &AppState, kind: ChartKind) -> Result<Response, AppError> {
    let snapshot = state.deps.catalog.snapshot().await;
    if snapshot.is_empty() {
        return Ok(Redirect::to(SCRAPE_ROUTE).into_response());
    }

    let chart = state.deps.charts.publish(kind, snapshot.clone()).await?;
    let (title, details) = match kind {
        ChartKind::Bar => ("Book Prices", bar_labels(&snapshot)),
        ChartKind::Pie => ("Availability Distribution", pie_legend(&snapshot)),
    };

    let page = render_page(
        kind.template(),
        title,
        &[("chart_url", chart.url.as_str()), ("details", details.as_str())],
    )?;
    Ok(page.into_response())
}

/// One entry per bar, left to right.
pub fn bar_labels(snapshot: &CatalogSnapshot) -> String {
    let mut html = String::from("<ol class=\"chart-labels\">\n");
    for record in snapshot.records() {
        let _ = writeln!(
            html,
            "<li><span class=\"label\">{}</span> <span class=\"value\">£{}</span></li>",
            escape_html(&record.title),
            format_price(record.price),
        );
    }
    html.push_str("</ol>");
    html
}

/// Legend in wedge order, colour swatches matching the image.
pub fn pie_legend(snapshot: &CatalogSnapshot) -> String {
    let mut html = String::from("<ul class=\"chart-legend\">\n");
    for (i, entry) in snapshot.availability_counts().iter().enumerate() {
        let _ = writeln!(
            html,
            "<li><span class=\"swatch\" style=\"background: {}\"></span>{} \
             <span class=\"value\">{}</span> ({})</li>",
            hex(PIE_PALETTE[i % PIE_PALETTE.len()]),
            escape_html(&entry.label),
            entry.percent_label(),
            entry.count,
        );
    }
    html.push_str("</ul>");
    html
}

fn hex(color: Rgb<u8>) -> String {
    let [r, g, b] = color.0;
    format!("#{r:02x}{g:02x}{b:02x}")
}
