//! Shared application state.

use std::sync::Arc;

use directory_suppliers::repository::SupplierRepository;

/// Application state shared across all request handlers.
///
/// Holds the repository as a trait object so the in-memory demo store and a
/// future persistent store are interchangeable at startup.
#[derive(Clone)]
pub struct AppState {
    /// The supplier store.
    pub suppliers: Arc<dyn SupplierRepository>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(suppliers: Arc<dyn SupplierRepository>) -> Self {
        Self { suppliers }
    }
}
