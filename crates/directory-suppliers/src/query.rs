//! Pure filtering over the supplier collection.
//!
//! The engine never mutates and never errors: an unset filter field imposes
//! no constraint, and absent optional fields on a record simply skip that
//! check. Provided predicates are AND-composed; result order is the source
//! order of the collection.

use crate::model::Supplier;

/// Caller-supplied combination of predicates for a listing query.
#[derive(Debug, Clone, Default)]
pub struct SupplierFilters {
    /// Case-insensitive substring matched against name, description, city.
    pub search: Option<String>,
    /// OR-set of categories; empty means unconstrained.
    pub categories: Vec<String>,
    /// Exact, case-sensitive city match.
    pub city: Option<String>,
    /// 1-based page number; only applied together with `limit`.
    pub page: Option<usize>,
    /// Page size; only applied together with `page`.
    pub limit: Option<usize>,
}

/// Returns copies of the suppliers matching `filters`, in source order.
#[must_use]
pub fn filter_suppliers(suppliers: &[Supplier], filters: &SupplierFilters) -> Vec<Supplier> {
    let matches = suppliers.iter().filter(|s| matches_filters(s, filters));
    match (filters.page, filters.limit) {
        (Some(page), Some(limit)) => {
            let start = page.saturating_sub(1).saturating_mul(limit);
            matches.skip(start).take(limit).cloned().collect()
        }
        _ => matches.cloned().collect(),
    }
}

fn matches_filters(supplier: &Supplier, filters: &SupplierFilters) -> bool {
    if let Some(search) = &filters.search {
        let needle = search.to_lowercase();
        let hit = contains_ci(&supplier.name, &needle)
            || supplier
                .description
                .as_deref()
                .is_some_and(|d| contains_ci(d, &needle))
            || supplier
                .city
                .as_deref()
                .is_some_and(|c| contains_ci(c, &needle));
        if !hit {
            return false;
        }
    }

    if !filters.categories.is_empty()
        && !supplier
            .categories
            .iter()
            .any(|c| filters.categories.contains(c))
    {
        return false;
    }

    if let Some(city) = &filters.city
        && supplier.city.as_deref() != Some(city.as_str())
    {
        return false;
    }

    true
}

fn contains_ci(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::{SupplierFilters, filter_suppliers};
    use crate::model::Supplier;

    fn supplier(name: &str, description: Option<&str>, city: Option<&str>, categories: &[&str]) -> Supplier {
        let now = Utc::now();
        Supplier {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            slug: crate::slug::slugify(name),
            email: None,
            phone: None,
            website: None,
            description: description.map(ToOwned::to_owned),
            city: city.map(ToOwned::to_owned),
            categories: categories.iter().map(|&c| c.to_owned()).collect(),
            products: Vec::new(),
            logo_url: None,
            catalogue_file_url: None,
            partnership_years: Some(10),
            founded: None,
            total_exports: None,
            last_year_exports: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn demo_set() -> Vec<Supplier> {
        vec![
            supplier(
                "EcoGreen Materials",
                Some("Sustainable packaging supplier."),
                Some("Portland, OR"),
                &["Packaging", "Raw Materials"],
            ),
            supplier(
                "TechParts International",
                Some("Premium electronics components."),
                Some("Munich, Germany"),
                &["Electronics", "Manufacturing"],
            ),
            supplier(
                "GlobalTextiles Co.",
                Some("High-quality textiles and fabrics."),
                Some("Mumbai, India"),
                &["Textiles", "Fabrics"],
            ),
        ]
    }

    #[test]
    fn test_no_filters_returns_everything_in_source_order() {
        let suppliers = demo_set();
        let result = filter_suppliers(&suppliers, &SupplierFilters::default());
        let names: Vec<&str> = result.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["EcoGreen Materials", "TechParts International", "GlobalTextiles Co."]
        );
    }

    #[test]
    fn test_search_is_case_insensitive_substring_on_name() {
        let suppliers = demo_set();
        let filters = SupplierFilters {
            search: Some("eco".to_owned()),
            ..SupplierFilters::default()
        };
        let result = filter_suppliers(&suppliers, &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "EcoGreen Materials");
    }

    #[test]
    fn test_search_also_matches_description_and_city() {
        let suppliers = demo_set();
        let by_description = SupplierFilters {
            search: Some("ELECTRONICS".to_owned()),
            ..SupplierFilters::default()
        };
        assert_eq!(filter_suppliers(&suppliers, &by_description).len(), 1);

        let by_city = SupplierFilters {
            search: Some("mumbai".to_owned()),
            ..SupplierFilters::default()
        };
        let result = filter_suppliers(&suppliers, &by_city);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "GlobalTextiles Co.");
    }

    #[test]
    fn test_search_skips_absent_optional_fields() {
        let suppliers = vec![supplier("Bare Minimum", None, None, &[])];
        let filters = SupplierFilters {
            search: Some("minimum".to_owned()),
            ..SupplierFilters::default()
        };
        assert_eq!(filter_suppliers(&suppliers, &filters).len(), 1);

        let miss = SupplierFilters {
            search: Some("portland".to_owned()),
            ..SupplierFilters::default()
        };
        assert!(filter_suppliers(&suppliers, &miss).is_empty());
    }

    #[test]
    fn test_categories_match_on_any_overlap() {
        let suppliers = demo_set();
        let filters = SupplierFilters {
            categories: vec!["Textiles".to_owned()],
            ..SupplierFilters::default()
        };
        let result = filter_suppliers(&suppliers, &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "GlobalTextiles Co.");

        let either = SupplierFilters {
            categories: vec!["Textiles".to_owned(), "Electronics".to_owned()],
            ..SupplierFilters::default()
        };
        assert_eq!(filter_suppliers(&suppliers, &either).len(), 2);
    }

    #[test]
    fn test_city_is_exact_and_case_sensitive() {
        let suppliers = demo_set();
        let exact = SupplierFilters {
            city: Some("Munich, Germany".to_owned()),
            ..SupplierFilters::default()
        };
        assert_eq!(filter_suppliers(&suppliers, &exact).len(), 1);

        let wrong_case = SupplierFilters {
            city: Some("munich, germany".to_owned()),
            ..SupplierFilters::default()
        };
        assert!(filter_suppliers(&suppliers, &wrong_case).is_empty());
    }

    #[test]
    fn test_predicates_compose_with_and() {
        let suppliers = demo_set();
        let filters = SupplierFilters {
            search: Some("e".to_owned()),
            categories: vec!["Electronics".to_owned()],
            city: Some("Munich, Germany".to_owned()),
            ..SupplierFilters::default()
        };
        let result = filter_suppliers(&suppliers, &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "TechParts International");

        let conflicting = SupplierFilters {
            search: Some("eco".to_owned()),
            city: Some("Munich, Germany".to_owned()),
            ..SupplierFilters::default()
        };
        assert!(filter_suppliers(&suppliers, &conflicting).is_empty());
    }

    #[test]
    fn test_pagination_slices_only_when_both_present() {
        let suppliers = demo_set();
        let second_page = SupplierFilters {
            page: Some(2),
            limit: Some(2),
            ..SupplierFilters::default()
        };
        let result = filter_suppliers(&suppliers, &second_page);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "GlobalTextiles Co.");

        let limit_alone = SupplierFilters {
            limit: Some(1),
            ..SupplierFilters::default()
        };
        assert_eq!(filter_suppliers(&suppliers, &limit_alone).len(), 3);

        let past_the_end = SupplierFilters {
            page: Some(5),
            limit: Some(2),
            ..SupplierFilters::default()
        };
        assert!(filter_suppliers(&suppliers, &past_the_end).is_empty());
    }
}
