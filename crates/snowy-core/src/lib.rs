//! Snowy Core
//!
//! Central coordination layer for the Snowy browser shell. The [`Browser`]
//! owns the tab manager and the durable stores, and talks to the rendering
//! engine only through the traits in `snowy-engine`.

mod bookmarks;
mod browser;
mod clearing;
mod config;
mod error;
mod events;

pub use bookmarks::{Bookmark, BookmarkStore, BOOKMARK_LABEL_MAX};
pub use browser::Browser;
pub use clearing::{ConfirmPrompt, Confirmation};
pub use config::Config;
pub use error::CoreError;
pub use events::ShellEvent;

// Re-export core components
pub use snowy_engine::{
    headless, Icon, InjectionPoint, Inspector, PageContext, RenderingProfile, ScriptStore,
    ScriptWorld, TabId, UserScript,
};
pub use snowy_extensions::{ExtensionError, ExtensionRegistry, InstalledExtension};
pub use snowy_navigation::{InputResolution, InputResolver, NavigationError};
pub use snowy_session::{SessionError, SessionSnapshot, SessionStore};
pub use snowy_storage::{JsonFile, StorageError};
pub use snowy_tabs::{DevToolsVisibility, Tab, TabError, TabManager, TabState};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging from `RUST_LOG`, defaulting to `info`
pub fn init_logging() {
    init_logging_with("info");
}

/// Initialize logging, using `default_filter` when `RUST_LOG` is unset
pub fn init_logging_with(default_filter: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt().with_env_filter(filter).with_target(true).init();
}
