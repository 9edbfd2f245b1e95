//! Cross-cutting error types for Masthead.
//!
//! Registry-specific errors (`IndexError`) live in `mast-index`, which wraps
//! `CoreError` for validation failures raised while constructing entities.

use thiserror::Error;

/// Errors that can be raised by any Masthead crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed construction-time validation (length, emptiness).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
