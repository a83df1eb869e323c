use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use snowy_storage::JsonFile;

use crate::Result;

/// Characters of the title shown on a bookmark bar button
pub const BOOKMARK_LABEL_MAX: usize = 15;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub title: String,
    pub url: String,
}

impl Bookmark {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// Bookmark bar button text
    pub fn label(&self) -> String {
        self.title.chars().take(BOOKMARK_LABEL_MAX).collect()
    }
}

/// Bookmarks in insertion order, persisted on every change.
///
/// Duplicates are allowed.
#[derive(Debug, Clone)]
pub struct BookmarkStore {
    file: JsonFile,
    bookmarks: Vec<Bookmark>,
}

impl BookmarkStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            file: JsonFile::new(path),
            bookmarks: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Replace the in-memory list with the file contents.
    ///
    /// A missing or malformed file loads as an empty list.
    pub fn load(&mut self) -> &[Bookmark] {
        self.bookmarks = self.file.read_or_default();
        tracing::info!(
            path = %self.file.path().display(),
            count = self.bookmarks.len(),
            "Loaded bookmarks"
        );
        &self.bookmarks
    }

    pub fn save(&self) -> Result<()> {
        self.file.write(&self.bookmarks)?;
        Ok(())
    }

    /// Append and persist. The list is left unchanged if the write fails.
    pub fn add(&mut self, title: String, url: String) -> Result<&[Bookmark]> {
        tracing::info!(title = %title, url = %url, "Adding bookmark");
        self.bookmarks.push(Bookmark { title, url });
        if let Err(e) = self.save() {
            self.bookmarks.pop();
            return Err(e);
        }
        Ok(&self.bookmarks)
    }

    /// Remove the bookmark at `index` and persist
    pub fn remove(&mut self, index: usize) -> Result<Option<Bookmark>> {
        if index >= self.bookmarks.len() {
            return Ok(None);
        }

        let removed = self.bookmarks.remove(index);
        if let Err(e) = self.save() {
            self.bookmarks.insert(index, removed);
            return Err(e);
        }
        tracing::info!(url = %removed.url, "Removed bookmark");
        Ok(Some(removed))
    }

    pub fn get(&self, index: usize) -> Option<&Bookmark> {
        self.bookmarks.get(index)
    }

    pub fn all(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }
}
