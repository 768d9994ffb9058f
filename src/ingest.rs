//! Plain-text file ingestion.
//!
//! Reads files picked, dropped or passed on the command line into
//! [`Document`]s. Each file succeeds or fails on its own; a bad file never
//! aborts the rest of the batch.

use crate::document::Document;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;
use tracing::{debug, info, warn};

/// A file from an ingestion batch that could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestFailure {
    pub path: PathBuf,
    pub error: String,
}

impl std::fmt::Display for IngestFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.error)
    }
}

/// Only `.txt` files (any case) are accepted.
pub fn is_plain_text(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase()),
        Some(ext) if ext == "txt"
    )
}

/// Drop anything that is not a plain-text file, logging what was skipped.
pub fn filter_plain_text(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    paths
        .into_iter()
        .filter(|path| {
            let keep = is_plain_text(path);
            if !keep {
                debug!(path = %path.display(), "Ignoring non-text file");
            }
            keep
        })
        .collect()
}

/// Read one file into a document. Invalid UTF-8 is replaced rather than
/// rejected.
pub fn load_document(path: &Path) -> Result<Document> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let metadata =
        fs::metadata(path).with_context(|| format!("Failed to stat {}", path.display()))?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("{} has no file name", path.display()))?;
    let last_modified = metadata
        .modified()
        .ok()
        .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or(0);

    Ok(Document {
        name,
        content: String::from_utf8_lossy(&bytes).into_owned(),
        last_modified,
        size: metadata.len(),
    })
}

/// Read a batch, keeping one result per input path in input order.
pub fn load_documents(paths: &[PathBuf]) -> Vec<Result<Document, IngestFailure>> {
    let results: Vec<_> = paths
        .iter()
        .map(|path| {
            load_document(path).map_err(|err| {
                warn!(path = %path.display(), "Failed to ingest file: {err:#}");
                IngestFailure {
                    path: path.clone(),
                    error: format!("{err:#}"),
                }
            })
        })
        .collect();
    info!(
        requested = paths.len(),
        loaded = results.iter().filter(|r| r.is_ok()).count(),
        "Finished reading ingestion batch"
    );
    results
}
