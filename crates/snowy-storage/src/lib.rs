//! Snowy Storage Layer
//!
//! Small JSON documents on disk, written wholesale and read wholesale.
//! Session snapshots and bookmarks both live in one of these.

mod error;
mod json_file;

pub use error::StorageError;
pub use json_file::JsonFile;

pub type Result<T> = std::result::Result<T, StorageError>;
