//! Supplier entity model and its mutation payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Partnership tenure assumed for suppliers that do not state one.
pub const DEFAULT_PARTNERSHIP_YEARS: u32 = 10;

/// One directory entry representing a supplier company.
///
/// `id`, `slug`, and `created_at` are assigned by the repository at creation
/// time and never change afterwards. `updated_at` is refreshed on every
/// mutation, so `created_at <= updated_at` holds for every stored record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    /// Unique record identifier, assigned at creation.
    pub id: Uuid,
    /// Display name of the company.
    pub name: String,
    /// URL-safe identifier derived from `name`, used in detail-page routing.
    pub slug: String,
    /// Contact email address.
    pub email: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Company website URL, stored opaquely.
    pub website: Option<String>,
    /// Free-text company description.
    pub description: Option<String>,
    /// City the company operates from.
    pub city: Option<String>,
    /// Categories the company supplies, in display order.
    pub categories: Vec<String>,
    /// Headline products, in display order.
    pub products: Vec<String>,
    /// Company logo URL, stored opaquely.
    pub logo_url: Option<String>,
    /// Downloadable catalogue URL, stored opaquely.
    pub catalogue_file_url: Option<String>,
    /// Years of partnership with the directory operator.
    pub partnership_years: Option<u32>,
    /// Year the company was founded.
    pub founded: Option<i32>,
    /// Total shipments exported to date.
    pub total_exports: Option<i64>,
    /// Shipments exported in the last year.
    pub last_year_exports: Option<i64>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last mutated.
    pub updated_at: DateTime<Utc>,
}

/// Creation payload: every field a caller may supply for a new record.
///
/// `id`, `slug`, and the timestamps are deliberately absent; the repository
/// derives them. Missing sequences deserialize as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewSupplier {
    /// Display name; the API boundary rejects empty names.
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
    /// Categories the company supplies.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Headline products.
    #[serde(default)]
    pub products: Vec<String>,
    /// Company logo URL.
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Downloadable catalogue URL.
    #[serde(default)]
    pub catalogue_file_url: Option<String>,
    /// Years of partnership; defaults to [`DEFAULT_PARTNERSHIP_YEARS`].
    #[serde(default)]
    pub partnership_years: Option<u32>,
    /// Year the company was founded.
    #[serde(default)]
    pub founded: Option<i32>,
    /// Total shipments exported to date.
    #[serde(default)]
    pub total_exports: Option<i64>,
    /// Shipments exported in the last year.
    #[serde(default)]
    pub last_year_exports: Option<i64>,
}

/// Partial update: an explicit allow-list of the mutable fields.
///
/// `id`, `slug`, and `created_at` are not representable here, so a caller
/// cannot overwrite them. An omitted field keeps its stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupplierUpdate {
    /// New display name. The slug is not re-derived on rename.
    #[serde(default)]
    pub name: Option<String>,
    /// New contact email address.
    #[serde(default)]
    pub email: Option<String>,
    /// New contact phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// New company website URL.
    #[serde(default)]
    pub website: Option<String>,
    /// New company description.
    #[serde(default)]
    pub description: Option<String>,
    /// New city.
    #[serde(default)]
    pub city: Option<String>,
    /// Replacement category sequence.
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    /// Replacement product sequence.
    #[serde(default)]
    pub products: Option<Vec<String>>,
    /// New logo URL.
    #[serde(default)]
    pub logo_url: Option<String>,
    /// New catalogue URL.
    #[serde(default)]
    pub catalogue_file_url: Option<String>,
    /// New partnership tenure.
    #[serde(default)]
    pub partnership_years: Option<u32>,
    /// New founding year.
    #[serde(default)]
    pub founded: Option<i32>,
    /// New total export count.
    #[serde(default)]
    pub total_exports: Option<i64>,
    /// New last-year export count.
    #[serde(default)]
    pub last_year_exports: Option<i64>,
}

impl Supplier {
    /// Merges `changes` over this record and refreshes `updated_at`.
    ///
    /// Supplied fields overwrite, omitted fields are retained. The
    /// destructuring forces this method to account for every updatable
    /// field when one is added.
    pub fn apply(&mut self, changes: SupplierUpdate, now: DateTime<Utc>) {
        let SupplierUpdate {
            name,
            email,
            phone,
            website,
            description,
            city,
            categories,
            products,
            logo_url,
            catalogue_file_url,
            partnership_years,
            founded,
            total_exports,
            last_year_exports,
        } = changes;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = Some(email);
        }
        if let Some(phone) = phone {
            self.phone = Some(phone);
        }
        if let Some(website) = website {
            self.website = Some(website);
        }
        if let Some(description) = description {
            self.description = Some(description);
        }
        if let Some(city) = city {
            self.city = Some(city);
        }
        if let Some(categories) = categories {
            self.categories = categories;
        }
        if let Some(products) = products {
            self.products = products;
        }
        if let Some(logo_url) = logo_url {
            self.logo_url = Some(logo_url);
        }
        if let Some(catalogue_file_url) = catalogue_file_url {
            self.catalogue_file_url = Some(catalogue_file_url);
        }
        if let Some(partnership_years) = partnership_years {
            self.partnership_years = Some(partnership_years);
        }
        if let Some(founded) = founded {
            self.founded = Some(founded);
        }
        if let Some(total_exports) = total_exports {
            self.total_exports = Some(total_exports);
        }
        if let Some(last_year_exports) = last_year_exports {
            self.last_year_exports = Some(last_year_exports);
        }

        self.updated_at = now;
    }
}
