//! Directory error types.

use thiserror::Error;
use uuid::Uuid;

/// Top-level error type for directory operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// No supplier record has the given id.
    #[error("supplier not found: {0}")]
    SupplierNotFound(Uuid),

    /// No supplier record has the given slug.
    #[error("no supplier with slug: {0}")]
    SlugNotFound(String),

    /// A derived slug is already taken by an existing record.
    #[error("slug already in use: {slug}")]
    SlugConflict {
        /// The colliding slug.
        slug: String,
    },

    /// A caller-supplied payload failed boundary validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// A storage-layer failure.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
