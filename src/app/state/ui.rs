use crate::document::DocumentId;
use crate::ingest::IngestFailure;
use std::path::PathBuf;

/// Transient state of the library view. Nothing here is persisted.
#[derive(Default)]
pub struct LibraryState {
    pub(in crate::app) drag_over: bool,
    /// Paths from the current drop burst. The windowing layer reports one
    /// event per file, so they are collected and ingested as one batch.
    pub(in crate::app) dropped: Vec<PathBuf>,
    pub(in crate::app) pending_remove: Option<DocumentId>,
    pub(in crate::app) failures: Vec<IngestFailure>,
    pub(in crate::app) open_path_input: String,
    /// Ingest batches still in flight.
    pub(in crate::app) loading: usize,
}

impl LibraryState {
    pub(in crate::app) fn is_loading(&self) -> bool {
        self.loading > 0
    }
}
