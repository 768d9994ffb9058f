//! The reader's whole persistent state behind one owner.
//!
//! `Bookshelf` holds the key-value store together with the library, the
//! global preferences and the open reader session (if any). The GUI calls
//! these operations and never touches the store directly, so every write path
//! is exercised by the tests below without a window.

use crate::config::AppConfig;
use crate::document::{Document, DocumentId};
use crate::library::Library;
use crate::preferences::{Preferences, load_font_size};
use crate::session::ReaderSession;
use crate::storage::{KeyValueStore, LAST_BOOK_KEY, remove_logged, set_logged};
use crate::theme::Theme;
use std::time::{Duration, Instant};
use tracing::info;

pub struct Bookshelf {
    store: Box<dyn KeyValueStore>,
    library: Library,
    preferences: Preferences,
    reader: Option<ReaderSession>,
    settle: Duration,
    words_per_minute: usize,
    chars_per_page: usize,
}

impl Bookshelf {
    /// Load the library and preferences, then reopen the last book if it is
    /// still in the library.
    pub fn open(store: Box<dyn KeyValueStore>, config: &AppConfig) -> Self {
        let library = Library::load(store.as_ref());
        let preferences = Preferences::load(store.as_ref());
        let mut shelf = Self {
            store,
            library,
            preferences,
            reader: None,
            settle: config.scroll_settle(),
            words_per_minute: config.words_per_minute,
            chars_per_page: config.chars_per_page,
        };

        if let Some(last) = shelf.store.get(LAST_BOOK_KEY) {
            match shelf.library.find_by_name(&last).map(Document::id) {
                Some(id) => {
                    info!(name = %last, "Restoring last opened book");
                    shelf.open_document(&id);
                }
                None => info!(name = %last, "Last opened book is no longer in the library"),
            }
        }
        shelf
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    pub fn reader(&self) -> Option<&ReaderSession> {
        self.reader.as_ref()
    }

    /// Identity of the open document; `None` means the library view.
    pub fn selection(&self) -> Option<DocumentId> {
        self.reader.as_ref().map(ReaderSession::id)
    }

    #[cfg(test)]
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn chars_per_page(&self) -> usize {
        self.chars_per_page
    }

    pub fn add_documents(&mut self, documents: Vec<Document>) -> usize {
        self.library.add_documents(documents, self.store.as_mut())
    }

    /// Remove a document. Closing the reader first when it shows that
    /// document keeps its pending offset from being written back.
    pub fn remove_document(&mut self, id: &DocumentId) -> Option<Document> {
        if self.selection().as_ref() == Some(id) {
            if let Some(reader) = self.reader.as_mut() {
                reader.discard_pending();
            }
            self.reader = None;
            remove_logged(self.store.as_mut(), LAST_BOOK_KEY);
        }
        self.library.remove_document(id, self.store.as_mut())
    }

    pub fn sort_alphabetical(&mut self) {
        self.library.sort_alphabetical(self.store.as_mut());
    }

    /// Open a document in the reader. Returns the scroll offset to restore, or
    /// `None` if the identity is not in the library.
    pub fn open_document(&mut self, id: &DocumentId) -> Option<u32> {
        let document = self.library.get(id)?.clone();
        self.flush();

        self.preferences.font_size = load_font_size(self.store.as_ref());
        set_logged(self.store.as_mut(), LAST_BOOK_KEY, &document.name);
        let session = ReaderSession::open(
            document,
            self.store.as_ref(),
            self.settle,
            self.words_per_minute,
        );
        let restored = session.restored_offset();
        info!(%id, restored, "Opened book");
        self.reader = Some(session);
        Some(restored)
    }

    /// Back to the library view.
    pub fn close_reader(&mut self) {
        self.flush();
        if let Some(reader) = self.reader.take() {
            info!(id = %reader.id(), "Closed book");
        }
        remove_logged(self.store.as_mut(), LAST_BOOK_KEY);
    }

    pub fn record_scroll(
        &mut self,
        scroll_top: f32,
        content_height: f32,
        viewport_height: f32,
        now: Instant,
    ) {
        if let Some(reader) = self.reader.as_mut() {
            reader.record_scroll(scroll_top, content_height, viewport_height, now);
        }
    }

    pub fn has_pending_write(&self) -> bool {
        self.reader
            .as_ref()
            .is_some_and(ReaderSession::has_pending_write)
    }

    /// Write the scroll offset if it has settled.
    pub fn flush_due(&mut self, now: Instant) -> bool {
        match self.reader.as_mut() {
            Some(reader) => reader.flush_due(now, self.store.as_mut()),
            None => false,
        }
    }

    /// Write any pending scroll offset now.
    pub fn flush(&mut self) {
        if let Some(reader) = self.reader.as_mut() {
            reader.flush(self.store.as_mut());
        }
    }

    pub fn set_font_size(&mut self, size: u32) {
        self.preferences.set_font_size(size, self.store.as_mut());
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.preferences.set_theme(theme, self.store.as_mut());
    }

    pub fn cycle_theme(&mut self) -> Theme {
        self.preferences.cycle_theme(self.store.as_mut())
    }
}
