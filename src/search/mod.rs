//! Free-text substring search over the catalog.

use crate::catalog::Catalog;
use crate::entity::Situation;

/// Search behavior knobs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Fold case on title and description too. By default only the slug
    /// comparison ignores case.
    pub case_insensitive: bool,
}

/// Search with default options.
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a Situation> {
    search_with(catalog, query, SearchOptions::default())
}

/// Return every situation whose title, description or slug contains `query`,
/// in catalog order. A blank query matches nothing.
///
/// Title and description are compared as authored unless
/// `options.case_insensitive` is set; the slug is always compared against the
/// lowercased query.
pub fn search_with<'a>(catalog: &'a Catalog, query: &str, options: SearchOptions) -> Vec<&'a Situation> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let lowered = query.to_lowercase();
    let results: Vec<&Situation> = catalog
        .situations()
        .iter()
        .filter(|s| {
            let text_hit = if options.case_insensitive {
                s.title.to_lowercase().contains(&lowered)
                    || s.description.to_lowercase().contains(&lowered)
            } else {
                s.title.contains(query) || s.description.contains(query)
            };
            text_hit || s.slug.contains(&lowered)
        })
        .collect();

    tracing::debug!(query, hits = results.len(), "search");
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Severity;

    fn slugs(results: &[&Situation]) -> Vec<String> {
        results.iter().map(|s| s.slug.clone()).collect()
    }

    fn catalog_with_latin_title() -> Catalog {
        let mut s = Situation::new("server-outage", "Server Outage", "business", Severity::High);
        s.description = "Production went DOWN".to_string();
        Catalog::new(Vec::new(), vec![s])
    }

    #[test]
    fn test_search_title() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(slugs(&search(catalog, "会議")), vec!["delay-meeting"]);
        assert_eq!(slugs(&search(catalog, "フリスビー")), vec!["frisbee-accident"]);
    }

    #[test]
    fn test_search_description() {
        let catalog = Catalog::builtin().unwrap();
        // both descriptions end with this word
        assert_eq!(
            slugs(&search(catalog, "謝罪")),
            vec!["delay-meeting", "frisbee-accident"]
        );
    }

    #[test]
    fn test_search_slug_ignores_case() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(slugs(&search(catalog, "DELAY-MEETING")), vec!["delay-meeting"]);
        assert_eq!(slugs(&search(catalog, "Frisbee")), vec!["frisbee-accident"]);
        assert_eq!(slugs(&search(catalog, "-")).len(), 2);
    }

    #[test]
    fn test_search_blank_query() {
        let catalog = Catalog::builtin().unwrap();
        assert!(search(catalog, "").is_empty());
        assert!(search(catalog, "   ").is_empty());
        assert!(search(catalog, "\t\n").is_empty());
    }

    #[test]
    fn test_search_no_match() {
        let catalog = Catalog::builtin().unwrap();
        assert!(search(catalog, "寝坊").is_empty());
    }

    #[test]
    fn test_title_match_is_case_sensitive_by_default() {
        let catalog = catalog_with_latin_title();
        assert_eq!(search(&catalog, "Server").len(), 1);
        // slug contains "server", so the lowercased query still hits
        assert_eq!(search(&catalog, "SERVER").len(), 1);
        // only reachable through the description, which keeps case
        assert!(search(&catalog, "production").is_empty());
        assert!(search(&catalog, "down").is_empty());
        assert_eq!(search(&catalog, "DOWN").len(), 1);
    }

    #[test]
    fn test_case_insensitive_option() {
        let catalog = catalog_with_latin_title();
        let options = SearchOptions {
            case_insensitive: true,
        };
        assert_eq!(search_with(&catalog, "production", options).len(), 1);
        assert_eq!(search_with(&catalog, "down", options).len(), 1);
        assert!(search_with(&catalog, "  ", options).is_empty());
    }
}
