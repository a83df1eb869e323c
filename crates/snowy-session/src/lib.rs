//! Snowy Session Management
//!
//! - The snapshot is the list of URLs open at shutdown
//! - Written once on shutdown, read once on startup
//! - A missing or unreadable snapshot restores nothing

mod error;
mod session;
mod store;

pub use error::SessionError;
pub use session::SessionSnapshot;
pub use store::SessionStore;

pub type Result<T> = std::result::Result<T, SessionError>;
