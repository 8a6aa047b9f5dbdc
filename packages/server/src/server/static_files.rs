use std::path::{Component, Path as FsPath};

use axum::{
    extract::{Extension, Path},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;
use tracing::debug;

use crate::server::app::AppState;

// Stylesheet and scripts shipped inside the binary
#[derive(RustEmbed)]
#[folder = "assets/"]
pub struct Assets;

/// Serve `/static/*path`: embedded assets first, then the static directory
/// where charts are published.
pub async fn serve_static(
    Extension(state): Extension<AppState>,
    Path(path): Path<String>,
) -> Response {
    if !is_public_path(&path) {
        debug!(path = %path, "rejected static path");
        return not_found();
    }

    if let Some(content) = Assets::get(&path) {
        let mime = mime_guess::from_path(&path).first_or_octet_stream();
        return ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response();
    }

    let file = state.deps.charts.static_dir().join(&path);
    match tokio::fs::read(&file).await {
        Ok(bytes) => {
            let mime = mime_guess::from_path(&file).first_or_octet_stream();
            (
                [
                    (header::CONTENT_TYPE, mime.to_string()),
                    (header::CACHE_CONTROL, "no-cache".to_string()),
                ],
                bytes,
            )
                .into_response()
        }
        Err(_) => not_found(),
    }
}

/// Relative paths of plain, non-hidden segments only. Hidden names cover
/// the charts' in-flight staging files.
fn is_public_path(path: &str) -> bool {
    !path.is_empty()
        && FsPath::new(path).components().all(|component| match component {
            Component::Normal(segment) => !segment.to_string_lossy().starts_with('.'),
            _ => false,
        })
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "404 Not Found").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_relative_paths() {
        assert!(is_public_path("css/style.css"));
        assert!(is_public_path("bar_chart.png"));
    }

    #[test]
    fn rejects_traversal_absolute_and_hidden_paths() {
        assert!(!is_public_path("../Cargo.toml"));
        assert!(!is_public_path("css/../../secret"));
        assert!(!is_public_path("/etc/passwd"));
        assert!(!is_public_path(".bar_chart.png.tmp"));
        assert!(!is_public_path(""));
    }

    #[test]
    fn embeds_site_assets() {
        for asset in ["css/style.css", "js/loading.js", "js/script.js"] {
            assert!(Assets::get(asset).is_some(), "{asset}");
        }
    }
}
