//! Routes for the supplier catalogue.
//!
//! Public listing and detail lookups plus the admin mutations. Handlers are
//! thin: boundary validation and filter assembly happen here, everything
//! else is delegated to the repository.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Json, Router, routing::get, routing::post};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use directory_core::error::DirectoryError;
use directory_suppliers::import::{self, SupplierImportRow};
use directory_suppliers::model::{NewSupplier, Supplier, SupplierUpdate};
use directory_suppliers::query::SupplierFilters;

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters for GET /.
#[derive(Debug, Deserialize)]
pub struct ListSuppliersQuery {
    /// Case-insensitive search text.
    pub search: Option<String>,
    /// Comma-separated category names.
    pub categories: Option<String>,
    /// Exact city match.
    pub city: Option<String>,
    /// 1-based page number.
    pub page: Option<usize>,
    /// Page size.
    pub limit: Option<usize>,
}

impl ListSuppliersQuery {
    fn into_filters(self) -> SupplierFilters {
        SupplierFilters {
            search: self.search,
            categories: self
                .categories
                .as_deref()
                .map(import::split_categories)
                .unwrap_or_default(),
            city: self.city,
            page: self.page,
            limit: self.limit,
        }
    }
}

/// GET /
#[instrument(skip(state))]
async fn list_suppliers(
    State(state): State<AppState>,
    Query(query): Query<ListSuppliersQuery>,
) -> Result<Json<Vec<Supplier>>, ApiError> {
    let filters = query.into_filters();
    let suppliers = state.suppliers.list(&filters).await?;
    Ok(Json(suppliers))
}

/// GET /{slug}
#[instrument(skip(state), fields(slug = %slug))]
async fn get_supplier(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Supplier>, ApiError> {
    match state.suppliers.get_by_slug(&slug).await? {
        Some(supplier) => Ok(Json(supplier)),
        None => Err(DirectoryError::SlugNotFound(slug).into()),
    }
}

/// POST /
#[instrument(skip(state, new))]
async fn create_supplier(
    State(state): State<AppState>,
    Json(new): Json<NewSupplier>,
) -> Result<(StatusCode, Json<Supplier>), ApiError> {
    require_name(&new.name)?;

    let supplier = state.suppliers.create(new).await?;
    info!(supplier_id = %supplier.id, slug = %supplier.slug, "supplier created");

    Ok((StatusCode::CREATED, Json(supplier)))
}

/// PUT /{id}
#[instrument(skip(state, changes), fields(supplier_id = %id))]
async fn update_supplier(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(changes): Json<SupplierUpdate>,
) -> Result<Json<Supplier>, ApiError> {
    let supplier = state.suppliers.update(id, changes).await?;
    info!(supplier_id = %id, "supplier updated");

    Ok(Json(supplier))
}

/// DELETE /{id}
#[instrument(skip(state), fields(supplier_id = %id))]
async fn delete_supplier(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.suppliers.delete(id).await?;
    info!(supplier_id = %id, "supplier deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /import
#[instrument(skip(state, rows), fields(row_count = rows.len()))]
async fn import_suppliers(
    State(state): State<AppState>,
    Json(rows): Json<Vec<SupplierImportRow>>,
) -> Result<(StatusCode, Json<Vec<Supplier>>), ApiError> {
    for row in &rows {
        require_name(&row.name)?;
    }

    let batch: Vec<NewSupplier> = rows.into_iter().map(NewSupplier::from).collect();
    let suppliers = state.suppliers.bulk_create(batch).await?;
    info!(count = suppliers.len(), "suppliers imported");

    Ok((StatusCode::CREATED, Json(suppliers)))
}

/// Boundary validation the admin form performs: names must be non-empty.
/// The repository itself does not re-check this.
fn require_name(name: &str) -> Result<(), ApiError> {
    if name.trim().is_empty() {
        return Err(DirectoryError::Validation("name must not be empty".into()).into());
    }
    Ok(())
}

/// Returns the router for the supplier catalogue.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_suppliers).post(create_supplier))
        .route("/import", post(import_suppliers))
        .route(
            "/{slug}",
            get(get_supplier)
                .put(update_supplier)
                .delete(delete_supplier),
        )
}
