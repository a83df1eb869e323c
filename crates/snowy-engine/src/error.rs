//! Engine error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Page is already bound to an inspector")]
    AlreadyInspected,

    #[error("Page has been closed")]
    PageClosed,
}
