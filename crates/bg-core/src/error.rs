//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `BgError` as one variant
//! via `#[from]` where a core validation can fail underneath them.

use thiserror::Error;

/// The base error type for `bg-core` validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BgError {
    #[error("invalid facing {0}: expected 0..=3")]
    InvalidFacing(u32),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `bg-core`.
pub type BgResult<T> = Result<T, BgError>;
