//! HTTP error mapping.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use catalog::table::escape_html;
use catalog::ScrapeError;
use thiserror::Error;
use tracing::{error, warn};

use crate::domains::catalog::ChartError;
use crate::domains::reference::ReferenceError;

/// Failures a route can surface to the browser
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to scrape catalog: {0}")]
    Scrape(#[from] ScrapeError),

    #[error(transparent)]
    Reference(#[from] ReferenceError),

    #[error(transparent)]
    Chart(#[from] ChartError),

    #[error("template {0} not found")]
    TemplateNotFound(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Scrape(
                ScrapeError::InvalidUrl { .. } | ScrapeError::Selector(_) | ScrapeError::Client(_),
            ) => StatusCode::INTERNAL_SERVER_ERROR,
            // upstream unreachable, error status or unusable data
            AppError::Scrape(_) => StatusCode::BAD_GATEWAY,
            AppError::Reference(ReferenceError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::Reference(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Chart(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::TemplateNotFound(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "request failed");
        }

        let reason = status.canonical_reason().unwrap_or("Error");
        let body = format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{code} {reason}</title>\
             <link rel=\"stylesheet\" href=\"/static/css/style.css\"></head>\n\
             <body class=\"error-page\"><main><h1>{code} {reason}</h1><p>{message}</p>\
             <p><a href=\"/home\">Back to home</a></p></main></body>\n</html>\n",
            code = status.as_u16(),
            reason = reason,
            message = escape_html(&self.to_string()),
        );

        (status, Html(body)).into_response()
    }
}
