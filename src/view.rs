// View binding - per-screen filter state
// Each screen owns one ViewState: the current search text and category
// selection. Every edit re-runs the query engine synchronously; there is
// no debounce, no async boundary, no history.

use crate::catalog::{Catalog, Resource};
use crate::query::{self, Selection};

/// Transient filter state for one screen
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    query: String,
    selection: Selection,
}

impl ViewState {
    pub fn new() -> Self {
        ViewState::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Replace the whole query string
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    /// Append one typed character (terminal search box)
    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    /// Delete the last typed character
    pub fn pop_char(&mut self) {
        self.query.pop();
    }

    /// Replace the category selection
    pub fn select(&mut self, selection: Selection) {
        self.selection = selection;
    }

    pub fn select_key(&mut self, key: &str) {
        self.selection = Selection::from_key(key);
    }

    /// Reset both cells to their defaults
    pub fn clear(&mut self) {
        self.query.clear();
        self.selection = Selection::All;
    }

    /// True when either filter would narrow the catalog
    pub fn is_filtered(&self) -> bool {
        !self.query.is_empty() || !self.selection.is_all()
    }

    /// Does this resource pass the current filters?
    pub fn matches<R: Resource>(&self, resource: &R) -> bool {
        query::matches(resource, &self.query, &self.selection)
    }

    /// The catalog subsequence visible under the current filters
    pub fn visible<'a, R: Resource>(&self, catalog: &'a Catalog<R>) -> Vec<&'a R> {
        query::filter(catalog.resources(), &self.query, &self.selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    struct Item {
        id: &'static str,
        name: &'static str,
        category: &'static str,
    }

    impl Resource for Item {
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

    fn catalog() -> Catalog<Item> {
        Catalog::new(
            &["contract", "agreement"],
            vec![
                Item {
                    id: "A",
                    name: "CommSat Alpha",
                    category: "contract",
                },
                Item {
                    id: "B",
                    name: "DataLink Beta",
                    category: "agreement",
                },
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_default_shows_everything() {
        let catalog = catalog();
        let view = ViewState::new();

        assert!(!view.is_filtered());
        assert_eq!(view.visible(&catalog).len(), 2);
    }

    #[test]
    fn test_typed_query_narrows_per_keystroke() {
        let catalog = catalog();
        let mut view = ViewState::new();

        view.push_char('s');
        view.push_char('a');
        view.push_char('t');
        assert_eq!(view.query(), "sat");
        let visible = view.visible(&catalog);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id(), "A");

        view.push_char('z');
        assert!(view.visible(&catalog).is_empty());

        view.pop_char();
        assert_eq!(view.visible(&catalog).len(), 1);
    }

    #[test]
    fn test_selection_is_independent_of_query() {
        let catalog = catalog();
        let mut view = ViewState::new();

        view.select_key("agreement");
        view.set_query("data");
        let visible = view.visible(&catalog);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id(), "B");

        // Changing one cell leaves the other in place
        view.select(Selection::All);
        assert_eq!(view.query(), "data");
        assert_eq!(view.visible(&catalog).len(), 1);
    }

    #[test]
    fn test_clear_resets_both_cells() {
        let catalog = catalog();
        let mut view = ViewState::new();

        view.set_query("sat");
        view.select_key("contract");
        assert!(view.is_filtered());

        view.clear();
        assert!(!view.is_filtered());
        assert_eq!(view.visible(&catalog).len(), 2);
    }
}
