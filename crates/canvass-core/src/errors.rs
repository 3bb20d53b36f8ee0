//! Cross-cutting error types for Canvass.
//!
//! Store failures are defined in `canvass-store`; this module only carries
//! errors that can originate from any crate.

use thiserror::Error;

/// Errors that can be raised by any Canvass crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (required fields, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
