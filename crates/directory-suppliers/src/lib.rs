//! Supplier catalogue bounded context.
//!
//! Everything about supplier records lives here: the entity model, slug
//! derivation, the pure query/filter engine, the repository contract, the
//! in-memory repository backing the demo deployment, and the row types for
//! the admin bulk import.

pub mod import;
pub mod memory;
pub mod model;
pub mod query;
pub mod repository;
pub mod seed;
pub mod slug;
