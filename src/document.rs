//! A loaded text file and its identity.

use crate::text_utils::{display_title, page_estimate};
use serde::{Deserialize, Serialize};

/// One text file in the library. Serialized as
/// `{name, content, lastModified, size}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub name: String,
    pub content: String,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub last_modified: i64,
    #[serde(default)]
    pub size: u64,
}

/// `(name, last_modified)`; two files sharing a name but not a timestamp are
/// distinct library entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentId {
    pub name: String,
    pub last_modified: i64,
}

impl Document {
    #[cfg(test)]
    pub fn new(name: impl Into<String>, content: impl Into<String>, last_modified: i64) -> Self {
        let content = content.into();
        Self {
            name: name.into(),
            size: content.len() as u64,
            content,
            last_modified,
        }
    }

    pub fn id(&self) -> DocumentId {
        DocumentId {
            name: self.name.clone(),
            last_modified: self.last_modified,
        }
    }

    pub fn matches(&self, id: &DocumentId) -> bool {
        self.name == id.name && self.last_modified == id.last_modified
    }

    pub fn title(&self) -> &str {
        display_title(&self.name)
    }

    pub fn page_estimate(&self, chars_per_page: usize) -> usize {
        page_estimate(&self.content, chars_per_page)
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.name, self.last_modified)
    }
}
