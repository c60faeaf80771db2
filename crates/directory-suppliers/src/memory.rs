//! In-memory supplier repository.
//!
//! Backs the demo deployment: a mutex-guarded vector standing in for the
//! production document store. Constructed once at startup and handed to
//! callers as a shared handle, never a module-level singleton.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use directory_core::clock::Clock;
use directory_core::error::DirectoryError;
use tracing::debug;
use uuid::Uuid;

use crate::model::{DEFAULT_PARTNERSHIP_YEARS, NewSupplier, Supplier, SupplierUpdate};
use crate::query::{self, SupplierFilters};
use crate::repository::SupplierRepository;
use crate::{seed, slug};

/// Process-local supplier store.
pub struct InMemorySupplierRepository {
    clock: Arc<dyn Clock>,
    suppliers: Mutex<Vec<Supplier>>,
}

impl InMemorySupplierRepository {
    /// Creates an empty store using the given clock for timestamps.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            suppliers: Mutex::new(Vec::new()),
        }
    }

    /// Creates a store pre-seeded with the demo suppliers. The fixtures go
    /// through the same derivation as [`SupplierRepository::create`], so
    /// they carry real ids, slugs, and timestamps.
    #[must_use]
    pub fn with_demo_data(clock: Arc<dyn Clock>) -> Self {
        let now = clock.now();
        let records = seed::demo_suppliers()
            .into_iter()
            .map(|new| admit(new, now))
            .collect();
        Self {
            clock,
            suppliers: Mutex::new(records),
        }
    }

    fn store(&self) -> Result<MutexGuard<'_, Vec<Supplier>>, DirectoryError> {
        self.suppliers
            .lock()
            .map_err(|_| DirectoryError::Infrastructure("supplier store lock poisoned".into()))
    }
}

/// Turns a creation payload into a stored record: fresh random id, slug
/// derived from the name, defaulted partnership tenure, both timestamps
/// set to `now`.
fn admit(new: NewSupplier, now: DateTime<Utc>) -> Supplier {
    Supplier {
        id: Uuid::new_v4(),
        slug: slug::slugify(&new.name),
        name: new.name,
        email: new.email,
        phone: new.phone,
        website: new.website,
        description: new.description,
        city: new.city,
        categories: new.categories,
        products: new.products,
        logo_url: new.logo_url,
        catalogue_file_url: new.catalogue_file_url,
        partnership_years: new.partnership_years.or(Some(DEFAULT_PARTNERSHIP_YEARS)),
        founded: new.founded,
        total_exports: new.total_exports,
        last_year_exports: new.last_year_exports,
        created_at: now,
        updated_at: now,
    }
}

#[async_trait]
impl SupplierRepository for InMemorySupplierRepository {
    async fn list(&self, filters: &SupplierFilters) -> Result<Vec<Supplier>, DirectoryError> {
        let store = self.store()?;
        Ok(query::filter_suppliers(&store, filters))
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Supplier>, DirectoryError> {
        let store = self.store()?;
        Ok(store.iter().find(|s| s.slug == slug).cloned())
    }

    async fn create(&self, new: NewSupplier) -> Result<Supplier, DirectoryError> {
        let now = self.clock.now();
        let mut store = self.store()?;
        let record = admit(new, now);
        if store.iter().any(|s| s.slug == record.slug) {
            return Err(DirectoryError::SlugConflict { slug: record.slug });
        }
        debug!(supplier_id = %record.id, slug = %record.slug, "created supplier");
        store.push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: SupplierUpdate,
    ) -> Result<Supplier, DirectoryError> {
        let now = self.clock.now();
        let mut store = self.store()?;
        let record = store
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(DirectoryError::SupplierNotFound(id))?;
        record.apply(changes, now);
        debug!(supplier_id = %id, "updated supplier");
        Ok(record.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), DirectoryError> {
        let mut store = self.store()?;
        let before = store.len();
        store.retain(|s| s.id != id);
        if store.len() == before {
            return Err(DirectoryError::SupplierNotFound(id));
        }
        debug!(supplier_id = %id, "deleted supplier");
        Ok(())
    }

    async fn bulk_create(
        &self,
        batch: Vec<NewSupplier>,
    ) -> Result<Vec<Supplier>, DirectoryError> {
        let now = self.clock.now();
        let mut store = self.store()?;
        let records: Vec<Supplier> = batch.into_iter().map(|new| admit(new, now)).collect();

        // All-or-nothing: reject the whole batch before touching the store.
        let mut batch_slugs: HashSet<&str> = HashSet::with_capacity(records.len());
        for record in &records {
            let taken_in_store = store.iter().any(|s| s.slug == record.slug);
            if taken_in_store || !batch_slugs.insert(record.slug.as_str()) {
                return Err(DirectoryError::SlugConflict {
                    slug: record.slug.clone(),
                });
            }
        }

        debug!(count = records.len(), "bulk-created suppliers");
        store.extend(records.iter().cloned());
        Ok(records)
    }
}
