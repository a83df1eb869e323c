//! Extension error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtensionError {
    #[error("Cannot use extensions directory {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
