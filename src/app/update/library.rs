use super::super::state::App;
use super::Effect;
use crate::document::{Document, DocumentId};
use crate::ingest::{IngestFailure, filter_plain_text, is_plain_text};
use std::path::PathBuf;
use tracing::{debug, info, warn};

impl App {
    pub(super) fn handle_files_selected(&mut self, paths: Vec<PathBuf>, effects: &mut Vec<Effect>) {
        let offered = paths.len();
        let accepted = filter_plain_text(paths);
        if accepted.len() < offered {
            debug!(
                offered,
                accepted = accepted.len(),
                "Ignoring files that are not plain text"
            );
        }
        if !accepted.is_empty() {
            effects.push(Effect::LoadFiles(accepted));
        }
    }

    pub(super) fn handle_file_dropped(&mut self, path: PathBuf) {
        self.library.drag_over = false;
        debug!(path = %path.display(), "File dropped");
        self.library.dropped.push(path);
    }

    /// Ingest the collected drop burst, in drop order, as one batch.
    pub(super) fn handle_drop_finished(&mut self, effects: &mut Vec<Effect>) {
        if self.library.dropped.is_empty() {
            return;
        }
        let dropped = std::mem::take(&mut self.library.dropped);
        self.handle_files_selected(dropped, effects);
    }

    pub(super) fn handle_open_path_requested(&mut self, effects: &mut Vec<Effect>) {
        let raw = self.library.open_path_input.trim();
        if raw.is_empty() {
            return;
        }
        let path = PathBuf::from(raw);
        self.library.open_path_input.clear();
        if is_plain_text(&path) {
            effects.push(Effect::LoadFiles(vec![path]));
        } else {
            warn!(path = %path.display(), "Rejected path without .txt extension");
            self.library.failures.push(IngestFailure {
                path,
                error: String::from("only .txt files can be added"),
            });
        }
    }

    pub(super) fn handle_files_loaded(
        &mut self,
        documents: Vec<Document>,
        failures: Vec<IngestFailure>,
    ) {
        self.library.loading = self.library.loading.saturating_sub(1);
        let loaded = documents.len();
        let added = self.shelf.add_documents(documents);
        info!(
            loaded,
            added,
            failed = failures.len(),
            total = self.shelf.library().len(),
            "Files ingested"
        );
        for failure in &failures {
            warn!("Failed to load {failure}");
        }
        self.library.failures.extend(failures);
    }

    pub(super) fn handle_sort_alphabetical(&mut self) {
        self.shelf.sort_alphabetical();
    }

    pub(super) fn handle_open_book(&mut self, id: &DocumentId, effects: &mut Vec<Effect>) {
        self.library.pending_remove = None;
        match self.shelf.open_document(id) {
            // The reader scrollable is shared between books, so the offset is
            // applied even when it is zero.
            Some(offset) => effects.push(Effect::RestoreScroll(offset)),
            None => warn!(%id, "Requested book is not in the library"),
        }
    }

    pub(super) fn handle_confirm_remove(&mut self) {
        let Some(id) = self.library.pending_remove.take() else {
            return;
        };
        match self.shelf.remove_document(&id) {
            Some(document) => info!(name = %document.name, "Removed book"),
            None => warn!(%id, "Book to remove was already gone"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::*;
    use crate::config::AppConfig;
    use crate::shelf::Bookshelf;
    use crate::storage::{LAST_BOOK_KEY, MemoryStore, scroll_key};
    use std::time::Instant;

    fn build_test_app() -> App {
        let config = AppConfig::default();
        let shelf = Bookshelf::open(Box::new(MemoryStore::new()), &config);
        let (app, _task) = App::bootstrap(shelf, config, Vec::new());
        app
    }

    fn load(app: &mut App, documents: Vec<Document>) {
        app.reduce(Message::FilesLoaded {
            documents,
            failures: Vec::new(),
        });
    }

    #[test]
    fn picked_files_are_filtered_before_loading() {
        let mut app = build_test_app();
        let effects = app.reduce(Message::FilesPicked(vec![
            PathBuf::from("a.txt"),
            PathBuf::from("cover.png"),
            PathBuf::from("B.TXT"),
        ]));
        assert!(matches!(
            effects.as_slice(),
            [Effect::LoadFiles(paths)] if paths.len() == 2
        ));

        let effects = app.reduce(Message::FilesPicked(vec![PathBuf::from("notes.md")]));
        assert!(effects.is_empty());
    }

    #[test]
    fn dropping_a_file_clears_hover_state() {
        let mut app = build_test_app();
        app.reduce(Message::FileHovered);
        assert!(app.library.drag_over);
        let effects = app.reduce(Message::FileDropped(PathBuf::from("story.txt")));
        assert!(!app.library.drag_over);
        assert!(effects.is_empty());
        assert!(app.needs_tick());

        let effects = app.reduce(Message::Tick(Instant::now()));
        assert!(matches!(effects.as_slice(), [Effect::LoadFiles(_)]));
        assert!(!app.needs_tick());
    }

    #[test]
    fn multi_file_drop_is_one_batch_in_drop_order() {
        let mut app = build_test_app();
        app.reduce(Message::FileHovered);
        let mut effects = Vec::new();
        for name in ["ch1.txt", "ch2.txt", "cover.jpg", "ch3.txt"] {
            effects.extend(app.reduce(Message::FileDropped(PathBuf::from(name))));
        }
        assert!(effects.is_empty());

        let effects = app.reduce(Message::Tick(Instant::now()));
        let batches: Vec<Vec<PathBuf>> = effects
            .into_iter()
            .filter_map(|effect| match effect {
                Effect::LoadFiles(paths) => Some(paths),
                _ => None,
            })
            .collect();
        assert_eq!(
            batches,
            [vec![
                PathBuf::from("ch1.txt"),
                PathBuf::from("ch2.txt"),
                PathBuf::from("ch3.txt"),
            ]]
        );
        assert!(app.reduce(Message::Tick(Instant::now())).is_empty());
    }

    #[test]
    fn hover_leaving_flushes_a_pending_drop() {
        let mut app = build_test_app();
        app.reduce(Message::FileDropped(PathBuf::from("a.txt")));
        let effects = app.reduce(Message::FilesHoveredLeft);
        assert!(matches!(effects.as_slice(), [Effect::LoadFiles(paths)] if paths.len() == 1));
    }

    #[test]
    fn typed_path_must_be_plain_text() {
        let mut app = build_test_app();
        app.reduce(Message::OpenPathInputChanged(String::from("  novel.epub ")));
        let effects = app.reduce(Message::OpenPathRequested);
        assert!(effects.is_empty());
        assert_eq!(app.library.failures.len(), 1);
        assert!(app.library.open_path_input.is_empty());

        app.reduce(Message::DismissFailures);
        assert!(app.library.failures.is_empty());

        app.reduce(Message::OpenPathInputChanged(String::from("novel.txt")));
        let effects = app.reduce(Message::OpenPathRequested);
        assert!(matches!(effects.as_slice(), [Effect::LoadFiles(_)]));
    }

    #[test]
    fn loaded_files_join_the_library_and_failures_are_kept() {
        let mut app = build_test_app();
        let _task = app.run_effect(Effect::LoadFiles(Vec::new()));
        assert!(app.library.is_loading());

        app.reduce(Message::FilesLoaded {
            documents: vec![Document::new("a.txt", "alpha", 1)],
            failures: vec![IngestFailure {
                path: PathBuf::from("missing.txt"),
                error: String::from("not found"),
            }],
        });
        assert!(!app.library.is_loading());
        assert_eq!(app.shelf.library().len(), 1);
        assert_eq!(app.library.failures.len(), 1);
    }

    #[test]
    fn opening_a_book_restores_its_offset() {
        let mut app = build_test_app();
        load(&mut app, vec![Document::new("a.txt", "alpha", 1)]);
        let id = Document::new("a.txt", "", 1).id();

        let effects = app.reduce(Message::OpenBook(id.clone()));
        assert!(matches!(effects.as_slice(), [Effect::RestoreScroll(0)]));

        app.reduce(Message::Scrolled {
            offset_y: 250.0,
            content_height: 2000.0,
            viewport_height: 500.0,
        });
        app.reduce(Message::BackToLibrary);
        assert_eq!(
            app.shelf.store().get(&scroll_key("a.txt")).as_deref(),
            Some("250")
        );

        let effects = app.reduce(Message::OpenBook(id));
        assert!(matches!(effects.as_slice(), [Effect::RestoreScroll(250)]));
    }

    #[test]
    fn removal_waits_for_confirmation() {
        let mut app = build_test_app();
        load(
            &mut app,
            vec![Document::new("a.txt", "alpha", 1), Document::new("b.txt", "beta", 2)],
        );
        let a = Document::new("a.txt", "", 1).id();

        app.reduce(Message::RequestRemove(a.clone()));
        app.reduce(Message::CancelRemove);
        assert_eq!(app.shelf.library().len(), 2);

        app.reduce(Message::RequestRemove(a.clone()));
        app.reduce(Message::ConfirmRemove);
        assert_eq!(app.shelf.library().len(), 1);
        assert!(app.shelf.library().get(&a).is_none());
        assert!(app.library.pending_remove.is_none());
    }

    #[test]
    fn removing_the_open_book_returns_to_library() {
        let mut app = build_test_app();
        load(&mut app, vec![Document::new("a.txt", "alpha", 1)]);
        let a = Document::new("a.txt", "", 1).id();
        app.reduce(Message::OpenBook(a.clone()));
        app.shelf.record_scroll(40.0, 800.0, 400.0, Instant::now());

        app.reduce(Message::RequestRemove(a));
        app.reduce(Message::ConfirmRemove);
        assert!(app.shelf.reader().is_none());
        assert_eq!(app.shelf.store().get(LAST_BOOK_KEY), None);
        assert_eq!(app.shelf.store().get(&scroll_key("a.txt")), None);
    }

    #[test]
    fn sort_button_sorts_and_enables_auto_sort() {
        let mut app = build_test_app();
        load(
            &mut app,
            vec![Document::new("b.txt", "beta", 1), Document::new("A.txt", "alpha", 1)],
        );
        app.reduce(Message::SortAlphabetical);
        assert!(app.shelf.library().auto_sort());

        load(&mut app, vec![Document::new("a2.txt", "x", 1)]);
        let names: Vec<&str> = app
            .shelf
            .library()
            .documents()
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, ["A.txt", "a2.txt", "b.txt"]);
    }
}
