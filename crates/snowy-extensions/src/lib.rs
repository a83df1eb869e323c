//! Snowy Extensions
//!
//! An extension is a single `.js` file in the extensions directory. No
//! manifest, no permissions: its contents are injected verbatim into every
//! page once the document is ready, subframes included.

mod error;
mod registry;

pub use error::ExtensionError;
pub use registry::{ExtensionRegistry, InstalledExtension, SCRIPT_EXTENSION};

pub type Result<T> = std::result::Result<T, ExtensionError>;
