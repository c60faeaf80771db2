//! Slug derivation.

/// Derives a URL-safe slug from a supplier name.
///
/// Lowercases ASCII letters, collapses every run of non-alphanumeric
/// characters to a single hyphen, and trims leading/trailing hyphens.
/// Deterministic: two names that normalize the same way collide, which the
/// repository detects and rejects.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::slugify;

    #[test]
    fn test_collapses_punctuation_runs_to_single_hyphen() {
        assert_eq!(slugify("Acme & Sons, Inc."), "acme-sons-inc");
    }

    #[test]
    fn test_lowercases_and_hyphenates_spaces() {
        assert_eq!(slugify("EcoGreen Materials"), "ecogreen-materials");
        assert_eq!(slugify("GlobalTextiles Co."), "globaltextiles-co");
    }

    #[test]
    fn test_trims_leading_and_trailing_separators() {
        assert_eq!(slugify("  --Fancy Name--  "), "fancy-name");
    }

    #[test]
    fn test_keeps_digits() {
        assert_eq!(slugify("24/7 Logistics"), "24-7-logistics");
    }

    #[test]
    fn test_non_ascii_treated_as_separator() {
        assert_eq!(slugify("Café Münch"), "caf-m-nch");
    }

    #[test]
    fn test_empty_and_symbol_only_names_produce_empty_slug() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
