//! The ordered collection of loaded documents.
//!
//! Every mutation writes the resulting list back to the store under
//! [`FILES_KEY`] before returning, or removes the key once the list is empty.

use crate::document::{Document, DocumentId};
use crate::storage::{
    AUTO_SORT_KEY, FILES_KEY, KeyValueStore, LAST_BOOK_KEY, remove_logged, scroll_key, set_logged,
};
use std::cmp::Ordering;
use tracing::{debug, info, warn};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

#[derive(Debug, Default)]
pub struct Library {
    documents: Vec<Document>,
    auto_sort: bool,
}

impl Library {
    /// Restore the saved library. Malformed JSON is logged and treated as an
    /// empty library.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let auto_sort = store.get(AUTO_SORT_KEY).as_deref() == Some("true");
        let mut documents = match store.get(FILES_KEY) {
            Some(raw) => match serde_json::from_str::<Vec<Document>>(&raw) {
                Ok(documents) => documents,
                Err(err) => {
                    warn!("Error loading saved files, starting with an empty library: {err}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        if auto_sort {
            sort_by_title(&mut documents);
        }
        info!(books = documents.len(), auto_sort, "Loaded library");
        Self {
            documents,
            auto_sort,
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn auto_sort(&self) -> bool {
        self.auto_sort
    }

    pub fn get(&self, id: &DocumentId) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.matches(id))
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.name == name)
    }

    /// Append a batch, skipping any document whose identity is already
    /// present. Returns how many were added.
    pub fn add_documents(
        &mut self,
        incoming: Vec<Document>,
        store: &mut dyn KeyValueStore,
    ) -> usize {
        let mut added = 0usize;
        for doc in incoming {
            let id = doc.id();
            if self.documents.iter().any(|existing| existing.matches(&id)) {
                debug!(%id, "Skipping document already in library");
                continue;
            }
            self.documents.push(doc);
            added += 1;
        }
        if self.auto_sort {
            sort_by_title(&mut self.documents);
        }
        info!(added, total = self.documents.len(), "Added documents to library");
        self.persist(store);
        added
    }

    /// Remove the entry matching `id` and the reading state stored under its
    /// name.
    pub fn remove_document(
        &mut self,
        id: &DocumentId,
        store: &mut dyn KeyValueStore,
    ) -> Option<Document> {
        let removed = self
            .documents
            .iter()
            .position(|doc| doc.matches(id))
            .map(|idx| self.documents.remove(idx));
        self.persist(store);

        remove_logged(store, &scroll_key(&id.name));
        if store.get(LAST_BOOK_KEY).as_deref() == Some(id.name.as_str()) {
            remove_logged(store, LAST_BOOK_KEY);
        }
        info!(%id, removed = removed.is_some(), "Removed document");
        removed
    }

    /// Sort by title and keep sorting after future additions.
    pub fn sort_alphabetical(&mut self, store: &mut dyn KeyValueStore) {
        sort_by_title(&mut self.documents);
        self.auto_sort = true;
        set_logged(store, AUTO_SORT_KEY, "true");
        self.persist(store);
        info!(books = self.documents.len(), "Sorted library A-Z");
    }

    fn persist(&self, store: &mut dyn KeyValueStore) {
        if self.documents.is_empty() {
            remove_logged(store, FILES_KEY);
            return;
        }
        match serde_json::to_string(&self.documents) {
            Ok(json) => set_logged(store, FILES_KEY, &json),
            Err(err) => warn!("Failed to encode library: {err}"),
        }
    }
}

/// Case- and accent-insensitive comparison key: NFD decomposition with
/// combining marks dropped, lowercased, then compared by code point. This
/// approximates a base-sensitivity locale collation; it does not apply
/// locale tailoring or multi-character folds (`ß` stays distinct from `ss`).
fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
        .collect()
}

fn compare_titles(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

/// Stable, so documents with equal keys keep their relative order.
fn sort_by_title(documents: &mut [Document]) {
    documents.sort_by(|a, b| compare_titles(&a.name, &b.name));
}
