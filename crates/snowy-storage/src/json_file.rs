//! JSON document file
//!
//! Missing file reads as `None`. Writes go to a sibling temp file first and
//! are renamed into place, so a crash mid-write never leaves half a document.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::Result;

#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read and decode the document. `Ok(None)` when the file does not exist.
    pub fn read<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StorageError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Json {
                path: self.path.clone(),
                source,
            })
    }

    /// Read the document, treating any failure as an absent file.
    pub fn read_or_default<T: DeserializeOwned + Default>(&self) -> T {
        match self.read() {
            Ok(Some(value)) => value,
            Ok(None) => T::default(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Ignoring unreadable file");
                T::default()
            }
        }
    }

    /// Replace the document on disk with `value`.
    pub fn write<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }

        let json = serde_json::to_string_pretty(value).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })?;

        let tmp = self.tmp_path();
        fs::write(&tmp, json).map_err(|source| self.io_error(source))?;
        fs::rename(&tmp, &self.path).map_err(|source| self.io_error(source))?;

        tracing::debug!(path = %self.path.display(), "Wrote file");
        Ok(())
    }

    pub fn remove(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(self.io_error(source)),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
