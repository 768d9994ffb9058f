use crate::document::{Document, DocumentId};
use crate::ingest::IngestFailure;
use crate::theme::Theme;
use iced::keyboard::{Key, Modifiers};
use iced::window;
use std::path::PathBuf;
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    PickFiles,
    FilesPicked(Vec<PathBuf>),
    OpenPathInputChanged(String),
    OpenPathRequested,
    FileHovered,
    FilesHoveredLeft,
    FileDropped(PathBuf),
    FilesLoaded {
        documents: Vec<Document>,
        failures: Vec<IngestFailure>,
    },
    DismissFailures,
    SortAlphabetical,
    OpenBook(DocumentId),
    RequestRemove(DocumentId),
    ConfirmRemove,
    CancelRemove,
    BackToLibrary,
    FontSizeChanged(u32),
    ThemeSelected(Theme),
    ToggleTheme,
    Scrolled {
        offset_y: f32,
        content_height: f32,
        viewport_height: f32,
    },
    Tick(Instant),
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    CloseRequested(window::Id),
    SafeQuit,
}
