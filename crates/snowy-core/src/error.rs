//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] snowy_storage::StorageError),

    #[error("Tab error: {0}")]
    Tab(#[from] snowy_tabs::TabError),

    #[error("Session error: {0}")]
    Session(#[from] snowy_session::SessionError),

    #[error("Extension error: {0}")]
    Extension(#[from] snowy_extensions::ExtensionError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No tab at index {0}")]
    TabIndex(usize),

    #[error("No bookmark at index {0}")]
    BookmarkNotFound(usize),
}
