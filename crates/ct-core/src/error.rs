//! Framework error type.
//!
//! Sub-crates define their own error enums (`WorldError`, `MobilityError`,
//! …) and wrap `CoreError` as one variant where they surface it.

use thiserror::Error;

/// The base error type for `ct-core`.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `ct-core`.
pub type CoreResult<T> = Result<T, CoreError>;
