//! Load a reference dataset from disk.
//!
//! Files are read fresh on every call; nothing is cached between requests.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use catalog::{Table, TableError};
use thiserror::Error;
use tracing::{debug, warn};

use crate::domains::reference::models::ReferenceDataset;

#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("reference file {path} not found")]
    NotFound { path: PathBuf },

    #[error("failed to read reference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("reference file {path} is malformed: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: TableError,
    },
}

/// Read and parse `dataset` from `dir`.
pub async fn load_reference(dir: &Path, dataset: ReferenceDataset) -> Result<Table, ReferenceError> {
    let path = dir.join(dataset.file_name());

    let text = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| match source.kind() {
            ErrorKind::NotFound => ReferenceError::NotFound { path: path.clone() },
            _ => ReferenceError::Io {
                path: path.clone(),
                source,
            },
        })?;

    let table = Table::from_csv(&text).map_err(|source| {
        warn!(path = %path.display(), error = %source, "reference file malformed");
        ReferenceError::Malformed {
            path: path.clone(),
            source,
        }
    })?;

    debug!(path = %path.display(), rows = table.len(), "reference file loaded");
    Ok(table)
}
