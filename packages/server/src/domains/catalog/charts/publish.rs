//! Chart publication.
//!
//! Each request renders into its own temporary file inside the static
//! directory and then renames it over the public name. A rename within one
//! directory is atomic, so readers of `bar_chart.png` see either the old or
//! the new image, never a partial one.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use catalog::CatalogSnapshot;
use image::{ImageFormat, RgbImage};
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::render::{render_bar_chart, render_pie_chart};
use super::ChartKind;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to encode chart: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to write chart {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("chart rendering task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// A chart file that is now visible under the static root.
#[derive(Debug, Clone)]
pub struct PublishedChart {
    pub kind: ChartKind,
    pub path: PathBuf,
    /// URL of the image, versioned by snapshot generation
    pub url: String,
}

/// Renders charts and publishes them into the static directory.
#[derive(Debug, Clone)]
pub struct ChartPublisher {
    static_dir: PathBuf,
}

impl ChartPublisher {
    pub fn new(static_dir: impl Into<PathBuf>) -> Self {
        Self {
            static_dir: static_dir.into(),
        }
    }

    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    /// Render `kind` for `snapshot` and publish it under its fixed name.
    pub async fn publish(
        &self,
        kind: ChartKind,
        snapshot: Arc<CatalogSnapshot>,
    ) -> Result<PublishedChart, ChartError> {
        let generation = snapshot.generation();
        let png = tokio::task::spawn_blocking(move || {
            let image = match kind {
                ChartKind::Bar => render_bar_chart(&snapshot),
                ChartKind::Pie => render_pie_chart(&snapshot),
            };
            encode_png(&image)
        })
        .await??;

        let path = self.static_dir.join(kind.file_name());
        let staging = self
            .static_dir
            .join(format!(".{}.{}.tmp", kind.file_name(), Uuid::new_v4()));

        tokio::fs::create_dir_all(&self.static_dir)
            .await
            .map_err(|source| ChartError::Io {
                path: self.static_dir.clone(),
                source,
            })?;

        stage_and_rename(&staging, &path, &png).await?;

        info!(chart = kind.file_name(), generation, "chart published");
        Ok(PublishedChart {
            kind,
            url: format!("/static/{}?v={}", kind.file_name(), generation),
            path,
        })
    }
}

/// Write `bytes` to `staging`, then move it over `path`. The staging file
/// never outlives a failure.
async fn stage_and_rename(staging: &Path, path: &Path, bytes: &[u8]) -> Result<(), ChartError> {
    if let Err(source) = tokio::fs::write(staging, bytes).await {
        warn!(path = %staging.display(), error = %source, "chart staging failed");
        let _ = tokio::fs::remove_file(staging).await;
        return Err(ChartError::Io {
            path: staging.to_path_buf(),
            source,
        });
    }
    debug!(path = %staging.display(), bytes = bytes.len(), "chart staged");

    if let Err(source) = tokio::fs::rename(staging, path).await {
        warn!(path = %path.display(), error = %source, "chart publish failed");
        let _ = tokio::fs::remove_file(staging).await;
        return Err(ChartError::Io {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

fn encode_png(image: &RgbImage) -> Result<Vec<u8>, ChartError> {
    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}
