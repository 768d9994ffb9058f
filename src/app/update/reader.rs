use super::super::state::App;
use std::time::Instant;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_back_to_library(&mut self) {
        if self.shelf.reader().is_none() {
            return;
        }
        info!("Returning to library");
        self.shelf.close_reader();
    }

    pub(super) fn handle_scrolled(
        &mut self,
        offset_y: f32,
        content_height: f32,
        viewport_height: f32,
    ) {
        self.shelf
            .record_scroll(offset_y, content_height, viewport_height, Instant::now());
    }

    pub(super) fn handle_tick(&mut self, now: Instant) {
        if self.shelf.flush_due(now) {
            debug!("Settled scroll position written");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::*;
    use crate::config::AppConfig;
    use crate::document::Document;
    use crate::shelf::Bookshelf;
    use crate::storage::{KeyValueStore, LAST_BOOK_KEY, MemoryStore, scroll_key};
    use std::time::Duration;

    fn build_test_app(store: MemoryStore) -> App {
        let mut config = AppConfig::default();
        config.scroll_settle_ms = 500;
        let shelf = Bookshelf::open(Box::new(store), &config);
        let (app, _task) = App::bootstrap(shelf, config, Vec::new());
        app
    }

    fn open_sample(app: &mut App) {
        app.reduce(Message::FilesLoaded {
            documents: vec![Document::new("Book1.txt", "one two three", 3)],
            failures: Vec::new(),
        });
        app.reduce(Message::OpenBook(Document::new("Book1.txt", "", 3).id()));
    }

    fn scroll(app: &mut App, offset_y: f32) {
        app.reduce(Message::Scrolled {
            offset_y,
            content_height: 3000.0,
            viewport_height: 1000.0,
        });
    }

    #[test]
    fn ticks_write_only_after_settling() {
        let mut app = build_test_app(MemoryStore::new());
        open_sample(&mut app);
        scroll(&mut app, 100.0);
        scroll(&mut app, 300.0);
        assert!(app.shelf.has_pending_write());

        app.reduce(Message::Tick(Instant::now()));
        assert_eq!(app.shelf.store().get(&scroll_key("Book1.txt")), None);

        app.reduce(Message::Tick(Instant::now() + Duration::from_secs(1)));
        assert_eq!(
            app.shelf.store().get(&scroll_key("Book1.txt")).as_deref(),
            Some("300")
        );
        assert!(!app.shelf.has_pending_write());
    }

    #[test]
    fn progress_follows_scroll_events() {
        let mut app = build_test_app(MemoryStore::new());
        open_sample(&mut app);
        scroll(&mut app, 1000.0);
        assert_eq!(app.shelf.reader().map(|r| r.progress()), Some(50.0));
    }

    #[test]
    fn back_to_library_flushes_and_forgets_last_book() {
        let mut app = build_test_app(MemoryStore::new());
        open_sample(&mut app);
        scroll(&mut app, 42.0);
        app.reduce(Message::BackToLibrary);
        assert!(app.shelf.reader().is_none());
        assert_eq!(
            app.shelf.store().get(&scroll_key("Book1.txt")).as_deref(),
            Some("42")
        );
        assert_eq!(app.shelf.store().get(LAST_BOOK_KEY), None);
    }

    #[test]
    fn bootstrap_restores_last_book_and_offset() {
        let mut store = MemoryStore::new();
        let documents = vec![Document::new("Book1.txt", "one two three", 3)];
        store
            .set(
                crate::storage::FILES_KEY,
                &serde_json::to_string(&documents).unwrap(),
            )
            .unwrap();
        store.set(LAST_BOOK_KEY, "Book1.txt").unwrap();
        store.set(&scroll_key("Book1.txt"), "640").unwrap();

        let app = build_test_app(store);
        let reader = app.shelf.reader().expect("last book reopened");
        assert_eq!(reader.title(), "Book1");
        assert_eq!(reader.restored_offset(), 640);
        assert_eq!(app.title(), "Book1 - Offline Webnovel Reader");
    }

    #[test]
    fn close_request_flushes_pending_offset() {
        let mut app = build_test_app(MemoryStore::new());
        open_sample(&mut app);
        scroll(&mut app, 77.0);
        let effects = app.reduce(Message::CloseRequested(iced::window::Id::unique()));
        assert!(matches!(effects.as_slice(), [super::super::Effect::CloseWindow(_)]));
        assert_eq!(
            app.shelf.store().get(&scroll_key("Book1.txt")).as_deref(),
            Some("77")
        );
        // The book stays the last opened one so the next launch resumes it.
        assert_eq!(
            app.shelf.store().get(LAST_BOOK_KEY).as_deref(),
            Some("Book1.txt")
        );
    }
}
