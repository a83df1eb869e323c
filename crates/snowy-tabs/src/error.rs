//! Tab error types

use snowy_engine::TabId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabError {
    #[error("Tab not found: {0}")]
    NotFound(TabId),

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("No active tab")]
    NoActiveTab,

    #[error("Engine error: {0}")]
    Engine(#[from] snowy_engine::EngineError),
}
