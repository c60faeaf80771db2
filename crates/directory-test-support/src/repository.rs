//! Test repositories — mock `SupplierRepository` implementations.

use async_trait::async_trait;
use directory_core::error::DirectoryError;
use directory_suppliers::model::{NewSupplier, Supplier, SupplierUpdate};
use directory_suppliers::query::SupplierFilters;
use directory_suppliers::repository::SupplierRepository;
use uuid::Uuid;

/// A supplier repository whose every operation fails with an infrastructure
/// error. Useful for testing error-handling paths in the API layer.
#[derive(Debug)]
pub struct FailingSupplierRepository;

fn connection_refused() -> DirectoryError {
    DirectoryError::Infrastructure("connection refused".into())
}

#[async_trait]
impl SupplierRepository for FailingSupplierRepository {
    async fn list(&self, _filters: &SupplierFilters) -> Result<Vec<Supplier>, DirectoryError> {
        Err(connection_refused())
    }

    async fn get_by_slug(&self, _slug: &str) -> Result<Option<Supplier>, DirectoryError> {
        Err(connection_refused())
    }

    async fn create(&self, _new: NewSupplier) -> Result<Supplier, DirectoryError> {
        Err(connection_refused())
    }

    async fn update(
        &self,
        _id: Uuid,
        _changes: SupplierUpdate,
    ) -> Result<Supplier, DirectoryError> {
        Err(connection_refused())
    }

    async fn delete(&self, _id: Uuid) -> Result<(), DirectoryError> {
        Err(connection_refused())
    }

    async fn bulk_create(
        &self,
        _batch: Vec<NewSupplier>,
    ) -> Result<Vec<Supplier>, DirectoryError> {
        Err(connection_refused())
    }
}
