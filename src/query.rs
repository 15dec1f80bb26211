// 🔍 Query Engine - Pure catalog filtering
// Search text + category selection → the visible subsequence.
// Recomputed in full on every keystroke; catalogs are tens of records,
// so a linear scan per input event is fine.

use crate::catalog::Resource;

/// Selection key that matches every category
pub const WILDCARD: &str = "all";

// ============================================================================
// CATEGORY SELECTION
// ============================================================================

/// Either the "all" wildcard or one concrete category key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Category(String),
}

impl Selection {
    /// Parse a string-keyed selection ("all" → wildcard)
    pub fn from_key(key: &str) -> Self {
        if key == WILDCARD {
            Selection::All
        } else {
            Selection::Category(key.to_string())
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Selection::All => WILDCARD,
            Selection::Category(key) => key,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl Default for Selection {
    fn default() -> Self {
        Selection::All
    }
}

// ============================================================================
// PREDICATES
// ============================================================================

/// Case-insensitive substring test over the resource's search fields.
/// Empty query matches everything.
pub fn matches_text<R: Resource>(resource: &R, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let query_lower = query.to_lowercase();
    resource
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&query_lower))
}

/// Exact category match, or anything under the wildcard.
/// Category keys are program-supplied, so no case folding here: an
/// unrecognized key matches nothing rather than erroring.
pub fn matches_category<R: Resource>(resource: &R, selection: &Selection) -> bool {
    match selection {
        Selection::All => true,
        Selection::Category(key) => resource.category() == key,
    }
}

/// Both predicates together
pub fn matches<R: Resource>(resource: &R, query: &str, selection: &Selection) -> bool {
    matches_text(resource, query) && matches_category(resource, selection)
}

// ============================================================================
// FILTER
// ============================================================================

/// The ordered subsequence of `resources` matching both the text query and
/// the category selection. Stable: input order is preserved, nothing is
/// re-sorted. Pure: same inputs, same output, no mutation.
///
/// An empty result is a normal outcome (the screens render it as
/// "No resources found"), never an error.
pub fn filter<'a, R: Resource>(
    resources: &'a [R],
    query: &str,
    selection: &Selection,
) -> Vec<&'a R> {
    resources
        .iter()
        .filter(|resource| matches(*resource, query, selection))
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Entry {
        id: &'static str,
        name: &'static str,
        description: &'static str,
        category: &'static str,
    }

    impl Resource for Entry {
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
            vec![self.name, self.description]
        }
    }

    fn sample() -> Vec<Entry> {
        vec![
            Entry {
                id: "A",
                name: "CommSat Alpha",
                description: "Geostationary communications bird",
                category: "contract",
            },
            Entry {
                id: "B",
                name: "DataLink Beta",
                description: "Relay services for LEO constellations",
                category: "agreement",
            },
            Entry {
                id: "C",
                name: "NavigSat Gamma",
                description: "Navigation satellite partnership",
                category: "contract",
            },
        ]
    }

    fn ids(result: &[&Entry]) -> Vec<&'static str> {
        result.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_concrete_scenario() {
        let catalog = vec![
            Entry {
                id: "A",
                name: "CommSat Alpha",
                description: "",
                category: "contract",
            },
            Entry {
                id: "B",
                name: "DataLink Beta",
                description: "",
                category: "agreement",
            },
        ];

        assert_eq!(ids(&filter(&catalog, "sat", &Selection::All)), vec!["A"]);
        assert_eq!(
            ids(&filter(&catalog, "", &Selection::from_key("agreement"))),
            vec!["B"]
        );
        assert!(filter(&catalog, "zzz", &Selection::All).is_empty());
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let catalog = sample();
        let result = filter(&catalog, "", &Selection::All);
        assert_eq!(ids(&result), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_order_preserved() {
        let catalog = sample();
        // "a" hits all three; result must keep catalog order
        let result = filter(&catalog, "a", &Selection::All);
        assert_eq!(ids(&result), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_case_insensitive_text() {
        let catalog = sample();
        let upper = filter(&catalog, "SAT", &Selection::All);
        let lower = filter(&catalog, "sat", &Selection::All);
        assert_eq!(ids(&upper), ids(&lower));
    }

    #[test]
    fn test_description_searched() {
        let catalog = sample();
        let result = filter(&catalog, "relay", &Selection::All);
        assert_eq!(ids(&result), vec!["B"]);
    }

    #[test]
    fn test_category_filter_is_exact() {
        let catalog = sample();

        let contracts = filter(&catalog, "", &Selection::from_key("contract"));
        assert!(contracts.iter().all(|e| e.category == "contract"));
        assert_eq!(ids(&contracts), vec!["A", "C"]);

        // Unrecognized and wrong-case keys match nothing, without erroring
        assert!(filter(&catalog, "", &Selection::from_key("Contract")).is_empty());
        assert!(filter(&catalog, "", &Selection::from_key("bogus")).is_empty());
    }

    #[test]
    fn test_both_predicates_required() {
        let catalog = sample();
        let result = filter(&catalog, "sat", &Selection::from_key("contract"));
        assert_eq!(ids(&result), vec!["A", "C"]);

        let result = filter(&catalog, "alpha", &Selection::from_key("agreement"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let catalog = sample();
        let selection = Selection::from_key("contract");

        let once = filter(&catalog, "sat", &selection);
        let twice = filter(&once, "sat", &selection);

        assert_eq!(ids(&once), twice.iter().map(|e| e.id).collect::<Vec<_>>());
    }

    #[test]
    fn test_selection_keys_round_trip() {
        assert!(Selection::from_key("all").is_all());
        assert_eq!(Selection::from_key("all").key(), "all");
        assert_eq!(Selection::from_key("treaty").key(), "treaty");
        assert_eq!(Selection::default(), Selection::All);
    }
}
