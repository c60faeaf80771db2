//! Row types for the admin bulk import.
//!
//! The import accepts tabular rows with a fixed set of recognized columns.
//! Turning file bytes into rows (CSV parsing, header mapping) happens
//! outside this crate; here a row becomes a creation payload.

use serde::Deserialize;

use crate::model::NewSupplier;

/// One row of a supplier import, as the admin upload supplies it.
#[derive(Debug, Clone, Deserialize)]
pub struct SupplierImportRow {
    /// Company display name.
    pub name: String,
    /// Contact email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Company website URL.
    #[serde(default)]
    pub website: Option<String>,
    /// Free-text company description.
    #[serde(default)]
    pub description: Option<String>,
    /// City the company operates from.
    #[serde(default)]
    pub city: Option<String>,
    /// Semicolon- or comma-delimited category cell.
    #[serde(default)]
    pub categories: Option<String>,
    /// Years of partnership.
    #[serde(default)]
    pub partnership_years: Option<u32>,
    /// Downloadable catalogue URL.
    #[serde(default)]
    pub catalogue_file_url: Option<String>,
}

/// Splits a delimited category cell into individual categories.
///
/// Accepts both semicolons and commas as delimiters, trims surrounding
/// whitespace, and drops empty entries. The admin edit form applies the
/// same rule to its comma-separated categories field.
#[must_use]
pub fn split_categories(raw: &str) -> Vec<String> {
    raw.split([';', ','])
        .map(str::trim)
        .filter(|category| !category.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

impl From<SupplierImportRow> for NewSupplier {
    fn from(row: SupplierImportRow) -> Self {
        Self {
            name: row.name,
            email: row.email,
            phone: row.phone,
            website: row.website,
            description: row.description,
            city: row.city,
            categories: row
                .categories
                .as_deref()
                .map(split_categories)
                .unwrap_or_default(),
            partnership_years: row.partnership_years,
            catalogue_file_url: row.catalogue_file_url,
            ..Self::default()
        }
    }
}
