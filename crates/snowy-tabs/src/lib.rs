//! Snowy Tab Management
//!
//! The tab manager is the single owner of every open page. Tabs are addressed
//! by [`TabId`]; engine notifications come in through a channel and are only
//! applied to tabs that are still open.
//!
//! Invariants once the first tab exists:
//! - at least one tab is open
//! - exactly one tab is active
//! - a page has at most one inspector

mod devtools;
mod error;
mod manager;
mod state;
mod tab;

pub use devtools::{DevToolsController, DevToolsVisibility};
pub use error::TabError;
pub use manager::TabManager;
pub use snowy_engine::TabId;
pub use state::TabState;
pub use tab::{Tab, DISPLAY_TITLE_MAX, NEW_TAB_TITLE};

pub type Result<T> = std::result::Result<T, TabError>;
