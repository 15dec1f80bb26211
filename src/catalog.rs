// 📚 Catalog - Read-only resource collections
// A catalog is fixed at startup and never mutated: screens only derive
// filtered views from it.

use anyhow::{bail, Context as AnyhowContext, Result};
use serde::de::DeserializeOwned;
use std::collections::HashSet;

// ============================================================================
// RESOURCE TRAIT
// ============================================================================

/// One catalog entry (satellite asset, contract template, treaty, ...).
///
/// Concrete types carry their own category-specific attributes; the trait
/// exposes only what the query engine and the catalog need.
pub trait Resource {
    /// Unique identifier within the catalog (e.g. "SAT-001", "CT-04")
    fn id(&self) -> &str;

    /// Display name
    fn name(&self) -> &str;

    /// Category key, one of the catalog's declared categories
    /// (e.g. "active", "treaty"). Never the "all" wildcard.
    fn category(&self) -> &str;

    /// Text fields the search folds over. Which fields participate is a
    /// per-catalog decision: assets search name/kind/operator, legal
    /// resources search name/description.
    fn search_fields(&self) -> Vec<&str>;
}

// Borrowed resources are resources too, so a filtered view can be
// filtered again.
impl<R: Resource + ?Sized> Resource for &R {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn category(&self) -> &str {
        (**self).category()
    }

    fn search_fields(&self) -> Vec<&str> {
        (**self).search_fields()
    }
}

// ============================================================================
// CATALOG
// ============================================================================

/// Ordered, immutable collection of resources plus its closed category set.
///
/// Construction validates the catalog invariants once; afterwards the data
/// is only ever read. Original insertion order is the display order.
pub struct Catalog<R: Resource> {
    /// Declared category keys, in display order
    categories: Vec<String>,

    /// Resources in catalog order
    resources: Vec<R>,
}

impl<R: Resource> Catalog<R> {
    /// Build a catalog, enforcing the invariants:
    /// - resource ids are unique
    /// - every resource's category is a declared category
    /// - "all" is a query wildcard, not a declarable category
    pub fn new(categories: &[&str], resources: Vec<R>) -> Result<Self> {
        let mut declared: HashSet<&str> = HashSet::new();
        for category in categories {
            if *category == crate::query::WILDCARD {
                bail!("\"all\" is the wildcard selection, not a category");
            }
            if !declared.insert(*category) {
                bail!("duplicate category declaration: {}", category);
            }
        }

        let mut seen_ids: HashSet<&str> = HashSet::new();
        for resource in &resources {
            if !seen_ids.insert(resource.id()) {
                bail!("duplicate resource id: {}", resource.id());
            }
            if !declared.contains(resource.category()) {
                bail!(
                    "resource {} has undeclared category: {}",
                    resource.id(),
                    resource.category()
                );
            }
        }

        Ok(Catalog {
            categories: categories.iter().map(|c| c.to_string()).collect(),
            resources,
        })
    }

    /// Parse a catalog from a JSON array of resources
    pub fn from_json_str(categories: &[&str], json: &str) -> Result<Self>
    where
        R: DeserializeOwned,
    {
        let resources: Vec<R> =
            serde_json::from_str(json).context("Failed to parse catalog JSON")?;
        Catalog::new(categories, resources)
    }

    /// Declared category keys, in display order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// All resources, in catalog order
    pub fn resources(&self) -> &[R] {
        &self.resources
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Look up a resource by id
    pub fn get(&self, id: &str) -> Option<&R> {
        self.resources.iter().find(|r| r.id() == id)
    }

    /// Resource count per declared category, in declared order.
    /// Feeds the stats row on each screen.
    pub fn category_counts(&self) -> Vec<(&str, usize)> {
        self.categories
            .iter()
            .map(|category| {
                let count = self
                    .resources
                    .iter()
                    .filter(|r| r.category() == category.as_str())
                    .count();
                (category.as_str(), count)
            })
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Doc {
        id: &'static str,
        name: &'static str,
        category: &'static str,
    }

    impl Resource for Doc {
        fn id(&self) -> &str {
            self.id
        }

        fn name(&self) -> &str {
            self.name
        }

        fn category(&self) -> &str {
            self.category
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.name]
        }
    }

    fn doc(id: &'static str, name: &'static str, category: &'static str) -> Doc {
        Doc { id, name, category }
    }

    #[test]
    fn test_valid_catalog() {
        let catalog = Catalog::new(
            &["contract", "treaty"],
            vec![doc("A", "Alpha", "contract"), doc("B", "Beta", "treaty")],
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("B").unwrap().name(), "Beta");
        assert!(catalog.get("C").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(
            &["contract"],
            vec![doc("A", "Alpha", "contract"), doc("A", "Other", "contract")],
        );

        let err = result.err().unwrap().to_string();
        assert!(err.contains("duplicate resource id: A"));
    }

    #[test]
    fn test_undeclared_category_rejected() {
        let result = Catalog::new(&["contract"], vec![doc("A", "Alpha", "treaty")]);

        let err = result.err().unwrap().to_string();
        assert!(err.contains("undeclared category"));
        assert!(err.contains("treaty"));
    }

    #[test]
    fn test_wildcard_not_declarable() {
        let result = Catalog::<Doc>::new(&["all"], vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn test_category_counts_in_declared_order() {
        let catalog = Catalog::new(
            &["contract", "agreement", "treaty"],
            vec![
                doc("A", "Alpha", "treaty"),
                doc("B", "Beta", "contract"),
                doc("C", "Gamma", "contract"),
            ],
        )
        .unwrap();

        assert_eq!(
            catalog.category_counts(),
            vec![("contract", 2), ("agreement", 0), ("treaty", 1)]
        );
    }

    #[test]
    fn test_from_json_parse_error_has_context() {
        let result = Catalog::<crate::resources::legal::LegalResource>::from_json_str(
            &["contract"],
            "not json",
        );
        let err = format!("{:#}", result.err().unwrap());
        assert!(err.contains("Failed to parse catalog JSON"));
    }
}
