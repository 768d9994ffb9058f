//! State for the document currently open in the reader.
//!
//! The session owns a copy of the document text, precomputed reading
//! statistics and the scroll offset. Offsets are persisted under the
//! document's name once scrolling has settled.

use crate::debounce::Debounced;
use crate::document::{Document, DocumentId};
use crate::storage::{KeyValueStore, scroll_key, set_logged};
use crate::text_utils::{reading_minutes, scroll_progress, word_count};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

pub const LOADING_PLACEHOLDER: &str = "Loading...";

#[derive(Debug)]
pub struct ReaderSession {
    document: Document,
    word_count: usize,
    reading_minutes: usize,
    scroll_offset: u32,
    restored_offset: u32,
    progress: f32,
    /// Set until the scroll widget first reports the restored offset.
    restore_pending: bool,
    pending_write: Debounced<u32>,
}

impl ReaderSession {
    pub fn open(
        document: Document,
        store: &dyn KeyValueStore,
        settle: Duration,
        words_per_minute: usize,
    ) -> Self {
        let restored_offset = load_scroll_offset(store, &document.name);
        let words = word_count(&document.content);
        debug!(
            name = %document.name,
            words,
            restored_offset,
            "Opened reader session"
        );
        Self {
            word_count: words,
            reading_minutes: reading_minutes(words, words_per_minute),
            scroll_offset: restored_offset,
            restored_offset,
            progress: 0.0,
            restore_pending: restored_offset > 0,
            pending_write: Debounced::new(settle),
            document,
        }
    }

    pub fn id(&self) -> DocumentId {
        self.document.id()
    }

    pub fn title(&self) -> &str {
        self.document.title()
    }

    /// Text to render; a placeholder while no text is available.
    pub fn body(&self) -> &str {
        if self.document.content.is_empty() {
            LOADING_PLACEHOLDER
        } else {
            &self.document.content
        }
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn reading_minutes(&self) -> usize {
        self.reading_minutes
    }

    #[cfg(test)]
    pub fn scroll_offset(&self) -> u32 {
        self.scroll_offset
    }

    /// Offset read from the store when the session opened.
    pub fn restored_offset(&self) -> u32 {
        self.restored_offset
    }

    /// Scroll progress in percent.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn has_pending_write(&self) -> bool {
        self.pending_write.is_pending()
    }

    /// Track a scroll event: the offset and progress are updated now and the
    /// write is (re)scheduled for the end of the settling window. The first
    /// report of a restored offset only fills in the progress, since that
    /// offset is already stored.
    pub fn record_scroll(
        &mut self,
        scroll_top: f32,
        content_height: f32,
        viewport_height: f32,
        now: Instant,
    ) {
        let offset = if scroll_top.is_finite() {
            scroll_top.max(0.0).round() as u32
        } else {
            0
        };
        self.scroll_offset = offset;
        self.progress = scroll_progress(scroll_top, content_height, viewport_height);
        if std::mem::take(&mut self.restore_pending) && offset == self.restored_offset {
            debug!(name = %self.document.name, offset, "Restored offset reached");
            return;
        }
        self.pending_write.schedule(offset, now);
    }

    /// Persist the offset if the settling window has passed. Returns whether a
    /// write happened.
    pub fn flush_due(&mut self, now: Instant, store: &mut dyn KeyValueStore) -> bool {
        match self.pending_write.take_due(now) {
            Some(offset) => {
                self.write_offset(offset, store);
                true
            }
            None => false,
        }
    }

    /// Persist any pending offset immediately.
    pub fn flush(&mut self, store: &mut dyn KeyValueStore) {
        if let Some(offset) = self.pending_write.flush() {
            self.write_offset(offset, store);
        }
    }

    /// Drop a pending write without persisting it, used when the document's
    /// reading state is being deleted.
    pub fn discard_pending(&mut self) {
        self.pending_write.cancel();
    }

    fn write_offset(&self, offset: u32, store: &mut dyn KeyValueStore) {
        debug!(name = %self.document.name, offset, "Saving scroll position");
        set_logged(store, &scroll_key(&self.document.name), &offset.to_string());
    }
}

/// Saved offset for `name`, or 0 when absent or unparseable.
pub fn load_scroll_offset(store: &dyn KeyValueStore, name: &str) -> u32 {
    let Some(raw) = store.get(&scroll_key(name)) else {
        return 0;
    };
    match raw.trim().parse::<u32>() {
        Ok(offset) => offset,
        Err(err) => {
            warn!(name, value = %raw, "Invalid saved scroll position: {err}");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    const SETTLE: Duration = Duration::from_millis(500);

    fn open(store: &dyn KeyValueStore, content: &str) -> ReaderSession {
        ReaderSession::open(Document::new("Book1.txt", content, 7), store, SETTLE, 200)
    }

    #[test]
    fn computes_statistics_on_open() {
        let text = vec!["word"; 1000].join("  \n");
        let session = open(&MemoryStore::new(), &text);
        assert_eq!(session.word_count(), 1000);
        assert_eq!(session.reading_minutes(), 5);
        assert_eq!(session.title(), "Book1");
    }

    #[test]
    fn empty_text_shows_placeholder() {
        let session = open(&MemoryStore::new(), "");
        assert_eq!(session.body(), LOADING_PLACEHOLDER);
        assert_eq!(session.word_count(), 0);
    }

    #[test]
    fn scroll_is_written_after_settling() {
        let mut store = MemoryStore::new();
        let mut session = open(&store, "some text");
        let start = Instant::now();

        session.record_scroll(120.4, 3000.0, 1000.0, start);
        session.record_scroll(500.0, 3000.0, 1000.0, start + Duration::from_millis(200));
        assert_eq!(session.scroll_offset(), 500);
        assert_eq!(session.progress(), 25.0);

        assert!(!session.flush_due(start + Duration::from_millis(600), &mut store));
        assert_eq!(store.get(&scroll_key("Book1.txt")), None);

        assert!(session.flush_due(start + Duration::from_millis(700), &mut store));
        assert_eq!(store.get(&scroll_key("Book1.txt")).as_deref(), Some("500"));
        assert!(!session.has_pending_write());
    }

    #[test]
    fn teardown_flush_persists_pending_offset() {
        let mut store = MemoryStore::new();
        let mut session = open(&store, "some text");
        session.record_scroll(64.0, 900.0, 300.0, Instant::now());
        session.flush(&mut store);
        assert_eq!(store.get(&scroll_key("Book1.txt")).as_deref(), Some("64"));
    }

    #[test]
    fn reopening_restores_saved_offset() {
        let mut store = MemoryStore::new();
        let mut session = open(&store, "some text");
        session.record_scroll(1337.0, 5000.0, 800.0, Instant::now());
        session.flush(&mut store);

        let reopened = open(&store, "some text");
        assert_eq!(reopened.restored_offset(), 1337);
        assert_eq!(reopened.scroll_offset(), 1337);
    }

    #[test]
    fn progress_is_filled_in_when_restored_offset_is_reported() {
        let mut store = MemoryStore::new();
        store.set(&scroll_key("Book1.txt"), "600").unwrap();
        let mut session = open(&store, "some text");
        assert_eq!(session.progress(), 0.0);

        session.record_scroll(600.0, 2600.0, 1000.0, Instant::now());
        assert_eq!(session.progress(), 37.5);
        assert!(!session.has_pending_write());

        session.record_scroll(600.0, 2600.0, 1000.0, Instant::now());
        assert!(session.has_pending_write());
    }

    #[test]
    fn moving_before_restore_lands_is_saved() {
        let mut store = MemoryStore::new();
        store.set(&scroll_key("Book1.txt"), "600").unwrap();
        let mut session = open(&store, "some text");

        session.record_scroll(100.0, 2600.0, 1000.0, Instant::now());
        session.flush(&mut store);
        assert_eq!(store.get(&scroll_key("Book1.txt")).as_deref(), Some("100"));
    }

    #[test]
    fn negative_or_bad_offsets_are_sanitized() {
        let mut store = MemoryStore::new();
        store.set(&scroll_key("Book1.txt"), "-5").unwrap();
        assert_eq!(load_scroll_offset(&store, "Book1.txt"), 0);

        let mut session = open(&store, "text");
        session.record_scroll(-30.0, 100.0, 50.0, Instant::now());
        assert_eq!(session.scroll_offset(), 0);
        session.record_scroll(f32::NAN, 100.0, 50.0, Instant::now());
        assert_eq!(session.scroll_offset(), 0);
        assert_eq!(session.progress(), 0.0);
    }
}
