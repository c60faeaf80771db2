//! Repository contract for the supplier collection.

use async_trait::async_trait;
use directory_core::error::DirectoryError;
use uuid::Uuid;

use crate::model::{NewSupplier, Supplier, SupplierUpdate};
use crate::query::SupplierFilters;

/// Owning store for supplier records.
///
/// The in-memory implementation in [`crate::memory`] backs the demo
/// deployment; a document-store-backed implementation can replace it behind
/// this same contract. Every operation is a suspend point for that reason,
/// even though the in-memory variant never blocks.
#[async_trait]
pub trait SupplierRepository: Send + Sync {
    /// Returns the suppliers matching `filters`, in insertion order.
    async fn list(&self, filters: &SupplierFilters) -> Result<Vec<Supplier>, DirectoryError>;

    /// Looks up one supplier by its exact slug. `None` signals not-found;
    /// it is not an error, the caller decides how to render absence.
    async fn get_by_slug(&self, slug: &str) -> Result<Option<Supplier>, DirectoryError>;

    /// Stores a new record: assigns a fresh id, derives the slug from the
    /// name, defaults the partnership tenure, stamps both timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::SlugConflict`] if the derived slug is
    /// already taken; the collection is left unchanged.
    async fn create(&self, new: NewSupplier) -> Result<Supplier, DirectoryError>;

    /// Merges `changes` over the record with the given id and refreshes
    /// `updated_at`. `id`, `slug`, and `created_at` are never touched.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::SupplierNotFound`] if no record has `id`.
    async fn update(
        &self,
        id: Uuid,
        changes: SupplierUpdate,
    ) -> Result<Supplier, DirectoryError>;

    /// Permanently removes the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::SupplierNotFound`] if no record has `id`,
    /// including a repeated delete of the same id.
    async fn delete(&self, id: Uuid) -> Result<(), DirectoryError>;

    /// Stores a batch of new records with the same per-record derivation as
    /// [`Self::create`]. Atomic: slugs are checked against the store and
    /// within the batch before anything is inserted, so a conflict inserts
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::SlugConflict`] on the first colliding slug.
    async fn bulk_create(
        &self,
        batch: Vec<NewSupplier>,
    ) -> Result<Vec<Supplier>, DirectoryError>;
}
