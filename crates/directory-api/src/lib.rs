//! Supplier directory — HTTP API.
//!
//! Exposes the supplier repository's operation set as a JSON API: public
//! listing and detail lookups, and the admin create/update/delete/import
//! operations.

pub mod error;
pub mod routes;
pub mod state;
