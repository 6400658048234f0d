//! Consistency warnings for catalog data.
//!
//! A catalog is authored by hand, so the checks here report problems
//! instead of refusing to load. Lookups keep working on a catalog with
//! warnings; the first matching entry wins.

use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::entity::{Method, Recipient};

/// A problem found in catalog data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// Two situations share a slug.
    DuplicateSlug { slug: String },
    /// Slug is not in lowercase-hyphen form.
    InvalidSlug { slug: String },
    /// A situation defines the same (recipient, method) pair twice.
    DuplicateVariant {
        slug: String,
        recipient: Recipient,
        method: Method,
    },
    /// A variant has an empty body.
    EmptyBody {
        slug: String,
        recipient: Recipient,
        method: Method,
    },
    /// A situation names a category that does not exist.
    UnknownCategory { slug: String, category: String },
    /// A category index lists a slug with no situation behind it.
    DanglingCategoryEntry { category: String, slug: String },
    /// A category index and a situation's own category disagree.
    CategoryIndexMismatch { category: String, slug: String },
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Check a catalog and return any warnings, in catalog order.
pub fn check_catalog(catalog: &Catalog) -> Vec<Warning> {
    let mut warnings = Vec::new();
    let mut seen_slugs = HashSet::new();

    for situation in catalog.situations() {
        let slug = &situation.slug;

        if !seen_slugs.insert(slug.as_str()) {
            warnings.push(Warning::DuplicateSlug { slug: slug.clone() });
        }
        if !is_valid_slug(slug) {
            warnings.push(Warning::InvalidSlug { slug: slug.clone() });
        }

        let mut seen_pairs = HashSet::new();
        for variant in &situation.variants {
            if !seen_pairs.insert((variant.recipient, variant.method)) {
                warnings.push(Warning::DuplicateVariant {
                    slug: slug.clone(),
                    recipient: variant.recipient,
                    method: variant.method,
                });
            }
            if variant.content.body.trim().is_empty() {
                warnings.push(Warning::EmptyBody {
                    slug: slug.clone(),
                    recipient: variant.recipient,
                    method: variant.method,
                });
            }
        }

        match catalog.category(&situation.category) {
            None => warnings.push(Warning::UnknownCategory {
                slug: slug.clone(),
                category: situation.category.clone(),
            }),
            Some(category) if !category.lists(slug) => {
                warnings.push(Warning::CategoryIndexMismatch {
                    category: category.id.clone(),
                    slug: slug.clone(),
                })
            }
            Some(_) => {}
        }
    }

    for category in catalog.categories() {
        for slug in &category.situations {
            match catalog.find_by_slug(slug) {
                None => warnings.push(Warning::DanglingCategoryEntry {
                    category: category.id.clone(),
                    slug: slug.clone(),
                }),
                Some(situation) if situation.category != category.id => {
                    warnings.push(Warning::CategoryIndexMismatch {
                        category: category.id.clone(),
                        slug: slug.clone(),
                    })
                }
                Some(_) => {}
            }
        }
    }

    warnings
}

/// Format a warning for display.
pub fn format_warning(warning: &Warning) -> String {
    match warning {
        Warning::DuplicateSlug { slug } => {
            format!("Warning: slug '{}' is defined more than once", slug)
        }
        Warning::InvalidSlug { slug } => {
            format!("Warning: slug '{}' is not lowercase-hyphen form", slug)
        }
        Warning::DuplicateVariant {
            slug,
            recipient,
            method,
        } => format!(
            "Warning: '{}' defines {}/{} more than once - only the first is used",
            slug, recipient, method
        ),
        Warning::EmptyBody {
            slug,
            recipient,
            method,
        } => format!("Warning: '{}' {}/{} has an empty body", slug, recipient, method),
        Warning::UnknownCategory { slug, category } => format!(
            "Warning: '{}' belongs to unknown category '{}'",
            slug, category
        ),
        Warning::DanglingCategoryEntry { category, slug } => format!(
            "Warning: category '{}' lists '{}', which does not exist",
            category, slug
        ),
        Warning::CategoryIndexMismatch { category, slug } => format!(
            "Warning: category '{}' and situation '{}' disagree about membership",
            category, slug
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{ApologyVariant, Category, ContentBody, Severity, Situation};

    fn category(id: &str, situations: &[&str]) -> Category {
        Category {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            icon: "Briefcase".to_string(),
            situations: situations.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn situation(slug: &str, category: &str) -> Situation {
        let mut s = Situation::new(slug, slug, category, Severity::Low);
        s.variants.push(ApologyVariant::new(
            Recipient::Client,
            Method::Email,
            ContentBody::new("body"),
        ));
        s
    }

    #[test]
    fn test_clean_catalog() {
        let catalog = Catalog::new(
            vec![category("business", &["late"])],
            vec![situation("late", "business")],
        );
        assert!(check_catalog(&catalog).is_empty());
    }

    #[test]
    fn test_builtin_dangling_entries() {
        let warnings = check_catalog(Catalog::builtin().unwrap());
        assert_eq!(
            warnings,
            vec![
                Warning::DanglingCategoryEntry {
                    category: "business".to_string(),
                    slug: "email-mistake".to_string(),
                },
                Warning::DanglingCategoryEntry {
                    category: "private".to_string(),
                    slug: "forgot-promise".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_duplicate_variant_and_empty_body() {
        let mut s = situation("late", "business");
        s.variants.push(ApologyVariant::new(
            Recipient::Client,
            Method::Email,
            ContentBody::new("  "),
        ));
        let catalog = Catalog::new(vec![category("business", &["late"])], vec![s]);
        let warnings = check_catalog(&catalog);
        assert_eq!(warnings.len(), 2);
        assert!(matches!(warnings[0], Warning::DuplicateVariant { .. }));
        assert!(matches!(warnings[1], Warning::EmptyBody { .. }));
    }

    #[test]
    fn test_slug_problems() {
        let catalog = Catalog::new(
            vec![category("business", &["late", "Late_Again"])],
            vec![
                situation("late", "business"),
                situation("late", "business"),
                situation("Late_Again", "business"),
            ],
        );
        let warnings = check_catalog(&catalog);
        assert!(warnings.contains(&Warning::DuplicateSlug {
            slug: "late".to_string()
        }));
        assert!(warnings.contains(&Warning::InvalidSlug {
            slug: "Late_Again".to_string()
        }));
    }

    #[test]
    fn test_category_mismatch() {
        let catalog = Catalog::new(
            vec![
                category("business", &["late"]),
                category("private", &[]),
            ],
            vec![situation("late", "private"), situation("orphan", "sports")],
        );
        let warnings = check_catalog(&catalog);
        assert!(warnings.contains(&Warning::CategoryIndexMismatch {
            category: "private".to_string(),
            slug: "late".to_string(),
        }));
        assert!(warnings.contains(&Warning::CategoryIndexMismatch {
            category: "business".to_string(),
            slug: "late".to_string(),
        }));
        assert!(warnings.contains(&Warning::UnknownCategory {
            slug: "orphan".to_string(),
            category: "sports".to_string(),
        }));
    }

    #[test]
    fn test_valid_slugs() {
        assert!(is_valid_slug("delay-meeting"));
        assert!(is_valid_slug("error-404"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("-late"));
        assert!(!is_valid_slug("late-"));
        assert!(!is_valid_slug("late--again"));
        assert!(!is_valid_slug("Late"));
    }

    #[test]
    fn test_format_warning() {
        let msg = format_warning(&Warning::DanglingCategoryEntry {
            category: "private".to_string(),
            slug: "forgot-promise".to_string(),
        });
        assert!(msg.contains("private"));
        assert!(msg.contains("forgot-promise"));

        let msg = format_warning(&Warning::DuplicateVariant {
            slug: "late".to_string(),
            recipient: Recipient::Boss,
            method: Method::Phone,
        });
        assert!(msg.contains("boss/phone"));
    }
}
