//! Registry error types for mast-index.

use mast_core::enums::EntityType;
use mast_core::errors::CoreError;
use thiserror::Error;

/// Errors from registry operations.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Entity construction failed validation; nothing was registered.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An ID does not name an entity registered in this store.
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: EntityType, id: String },

    /// The ID sequence ran out.
    #[error("ID space exhausted for prefix '{0}'")]
    IdsExhausted(&'static str),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IndexError {
    pub(crate) fn not_found(entity_type: EntityType, id: &str) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Whether this error is a construction-time validation failure.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Core(CoreError::Validation(_)))
    }
}
