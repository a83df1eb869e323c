//! Session Store
//!
//! Durable home of the session snapshot.

use std::path::{Path, PathBuf};

use snowy_storage::JsonFile;

use crate::session::SessionSnapshot;
use crate::Result;

#[derive(Debug, Clone)]
pub struct SessionStore {
    file: JsonFile,
}

impl SessionStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            file: JsonFile::new(path),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Overwrite the snapshot with `urls`.
    pub fn save(&self, urls: &[String]) -> Result<()> {
        let snapshot = SessionSnapshot::new(urls.to_vec());
        self.file.write(&snapshot)?;

        tracing::info!(
            path = %self.file.path().display(),
            tab_count = snapshot.tab_count(),
            "Saved session"
        );

        Ok(())
    }

    /// Read the snapshot. Missing or malformed files restore nothing.
    pub fn restore(&self) -> Vec<String> {
        let snapshot: SessionSnapshot = self.file.read_or_default();

        tracing::info!(
            path = %self.file.path().display(),
            tab_count = snapshot.tab_count(),
            "Restored session"
        );

        snapshot.urls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_on_fresh_instance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let urls = vec!["https://a.test".to_string(), "https://b.test".to_string()];

        SessionStore::new(&path).save(&urls).unwrap();

        let restored = SessionStore::new(&path).restore();
        assert_eq!(restored.len(), 2);
        assert!(restored.contains(&"https://a.test".to_string()));
        assert!(restored.contains(&"https://b.test".to_string()));
    }

    #[test]
    fn test_missing_file_restores_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        assert!(store.restore().is_empty());
    }

    #[test]
    fn test_malformed_file_restores_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        std::fs::write(&path, "[\"https://a.test\",").unwrap();
        assert!(SessionStore::new(&path).restore().is_empty());

        std::fs::write(&path, r#"{"tabs": 2}"#).unwrap();
        assert!(SessionStore::new(&path).restore().is_empty());
    }

    #[test]
    fn test_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));

        store.save(&["https://old.test".to_string()]).unwrap();
        store.save(&["https://new.test".to_string()]).unwrap();

        assert_eq!(store.restore(), vec!["https://new.test"]);
    }
}
