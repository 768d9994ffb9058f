//! String-keyed persistence for the library, preferences and reading offsets.
//!
//! Everything the reader remembers goes through [`KeyValueStore`]. The app
//! uses [`FileStore`], a single JSON object on disk that is rewritten on every
//! mutation; tests substitute an in-memory `MemoryStore`.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const FILES_KEY: &str = "webnovel-files";
pub const LAST_BOOK_KEY: &str = "webnovel-last-book";
pub const THEME_KEY: &str = "webnovel-theme";
pub const AUTO_SORT_KEY: &str = "webnovel-auto-sort";
pub const FONT_SIZE_KEY: &str = "webnovel-font-size";
const SCROLL_KEY_PREFIX: &str = "webnovel-scroll-";

/// Key holding the persisted scroll offset for a document name.
pub fn scroll_key(name: &str) -> String {
    format!("{SCROLL_KEY_PREFIX}{name}")
}

/// Synchronous string key-value store.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// Write a value, logging instead of propagating failures so UI actions are
/// never aborted by a storage error.
pub fn set_logged(store: &mut dyn KeyValueStore, key: &str, value: &str) {
    if let Err(err) = store.set(key, value) {
        warn!(key, "Failed to persist value: {err:#}");
    }
}

/// Remove a value, logging failures.
pub fn remove_logged(store: &mut dyn KeyValueStore, key: &str) {
    if let Err(err) = store.remove(key) {
        warn!(key, "Failed to remove persisted value: {err:#}");
    }
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// JSON-object file store. The whole map is held in memory and written back
/// through a temp file on each mutation.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store; an
    /// unreadable or corrupt file is logged and also treated as empty.
    pub fn open(path: &Path) -> Self {
        let entries = match fs::read_to_string(path) {
            Ok(data) => match serde_json::from_str::<BTreeMap<String, String>>(&data) {
                Ok(entries) => {
                    debug!(path = %path.display(), entries = entries.len(), "Opened store");
                    entries
                }
                Err(err) => {
                    warn!(path = %path.display(), "Store file is corrupt, starting empty: {err}");
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No store file yet");
                BTreeMap::new()
            }
            Err(err) => {
                warn!(path = %path.display(), "Failed to read store file: {err}");
                BTreeMap::new()
            }
        };
        Self {
            path: path.to_path_buf(),
            entries,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_back(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let payload = serde_json::to_string(&self.entries).context("Failed to encode store")?;
        let tmp = self.path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp)
            .with_context(|| format!("Failed to create {}", tmp.display()))?;
        file.write_all(payload.as_bytes())
            .with_context(|| format!("Failed to write {}", tmp.display()))?;
        file.flush()?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.write_back()
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.write_back()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_keys_are_name_scoped() {
        assert_eq!(scroll_key("Book1.txt"), "webnovel-scroll-Book1.txt");
    }

    #[test]
    fn memory_store_contract() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("a"), None);
        store.set("a", "1").unwrap();
        store.set("a", "2").unwrap();
        assert_eq!(store.get("a").as_deref(), Some("2"));
        store.remove("a").unwrap();
        store.remove("a").unwrap();
        assert_eq!(store.get("a"), None);
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let mut store = FileStore::open(&path);
        store.set(THEME_KEY, "sepia").unwrap();
        store.set(FONT_SIZE_KEY, "24").unwrap();
        store.remove(FONT_SIZE_KEY).unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("sepia"));
        assert_eq!(reopened.get(FONT_SIZE_KEY), None);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn corrupt_file_store_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "{not json").unwrap();

        let mut store = FileStore::open(&path);
        assert_eq!(store.get(THEME_KEY), None);
        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(FileStore::open(&path).get(THEME_KEY).as_deref(), Some("dark"));
    }
}
