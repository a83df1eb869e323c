//! Extension Registry
//!
//! Every reload is a full replace: the profile's scripts are cleared and the
//! directory is read again from scratch.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use snowy_engine::{ScriptStore, UserScript};

use crate::error::ExtensionError;
use crate::Result;

pub const SCRIPT_EXTENSION: &str = "js";

#[derive(Debug, Clone, Serialize)]
pub struct InstalledExtension {
    /// File name, e.g. `dark-mode.js`
    pub name: String,
    pub path: PathBuf,
    /// Size of the injected source in bytes
    pub size: usize,
    pub installed_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ExtensionRegistry {
    dir: PathBuf,
    installed: Vec<InstalledExtension>,
}

impl ExtensionRegistry {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            dir: dir.into(),
            installed: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Replace the profile's scripts with the current directory contents.
    ///
    /// Unreadable files are skipped. Returns the number of installed scripts.
    pub fn reload<S: ScriptStore + ?Sized>(&mut self, store: &S) -> Result<usize> {
        fs::create_dir_all(&self.dir).map_err(|source| self.dir_error(source))?;

        let files = self.script_files()?;

        store.clear_scripts();
        self.installed.clear();

        for path in files {
            let Some(name) = path.file_name().and_then(|n| n.to_str()).map(str::to_string)
            else {
                continue;
            };

            let source = match fs::read_to_string(&path) {
                Ok(source) => source,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable extension");
                    continue;
                }
            };

            let size = source.len();
            store.insert_script(UserScript::document_ready(name.clone(), source));
            tracing::debug!(extension = %name, size, "Installed extension");

            self.installed.push(InstalledExtension {
                name,
                path,
                size,
                installed_at: Utc::now(),
            });
        }

        tracing::info!(
            dir = %self.dir.display(),
            count = self.installed.len(),
            "Extensions reloaded"
        );

        Ok(self.installed.len())
    }

    pub fn installed(&self) -> &[InstalledExtension] {
        &self.installed
    }

    /// Installed extension names, for display
    pub fn names(&self) -> Vec<String> {
        self.installed.iter().map(|e| e.name.clone()).collect()
    }

    /// Script files in the directory, sorted by file name.
    fn script_files(&self) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.dir).map_err(|source| self.dir_error(source))?;

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file()
                    && path.extension().and_then(|e| e.to_str()) == Some(SCRIPT_EXTENSION)
            })
            .collect();

        files.sort();
        Ok(files)
    }

    fn dir_error(&self, source: std::io::Error) -> ExtensionError {
        ExtensionError::Directory {
            path: self.dir.clone(),
            source,
        }
    }
}
