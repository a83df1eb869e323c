//! Snowy Engine Boundary
//!
//! The shell never renders anything itself. Everything it needs from a
//! rendering engine is expressed here as traits:
//! - [`RenderingProfile`]: the process-wide profile shared by all pages
//!   (user agent, injected scripts, cookies, cache, visited links, storage)
//! - [`PageContext`]: one per tab, accepts navigation commands
//! - [`Inspector`]: a developer-tools session bound to one page
//!
//! Pages report back through a [`PageEventSink`] rather than callbacks.
//! The [`headless`] module is an in-memory engine implementing all of it.

mod error;
mod event;
pub mod headless;
mod id;
mod page;
mod profile;
mod script;

pub use error::EngineError;
pub use event::{page_event_channel, PageEvent, PageEventKind, PageEventReceiver, PageEventSink};
pub use id::TabId;
pub use page::{Icon, Inspector, PageContext};
pub use profile::{RenderingProfile, ScriptStore};
pub use script::{InjectionPoint, ScriptWorld, UserScript};

pub type Result<T> = std::result::Result<T, EngineError>;
