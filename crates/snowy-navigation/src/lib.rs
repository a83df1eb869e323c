//! Snowy Navigation
//!
//! Address bar input resolution:
//! 1. Input with a scheme → navigate as typed
//! 2. Input that coerces to a URL (bare domain, localhost, IP) → navigate
//! 3. Anything else → search

mod error;
mod input;

pub use error::NavigationError;
pub use input::{InputResolution, InputResolver, DEFAULT_SEARCH_TEMPLATE};

pub type Result<T> = std::result::Result<T, NavigationError>;
