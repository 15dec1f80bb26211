// ⚖️ Legal Resources - Legal Library catalog
// One catalog spanning four record kinds: contract templates, agreement
// frameworks, general principles, and international treaties. The kind is
// a tagged union so each record only carries the attributes valid for it,
// and the catalog category key falls out of the variant.

use crate::catalog::{Catalog, Resource};
use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Seed catalog shipped with the binary
const SEED_JSON: &str = include_str!("../../data/legal_library.json");

/// Declared Legal Library categories, in filter-button order
pub const LEGAL_CATEGORIES: [&str; 4] = ["contract", "agreement", "principle", "treaty"];

// ============================================================================
// LEGAL DETAILS (per-kind attributes)
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LegalDetails {
    /// Downloadable contract template
    Contract {
        /// Template area (e.g. "Leasing", "Insurance")
        category: String,
        pages: u32,
        downloads: u32,
        rating: f64,
    },

    /// International agreement framework
    Agreement {
        /// Body of law (e.g. "International Trade Law")
        domain: String,
        applicability: String,
        status: String,
    },

    /// General legal principle
    Principle {
        topics: Vec<String>,
        relevance: String,
        last_reviewed: NaiveDate,
    },

    /// International treaty
    Treaty {
        signatories: String,
        key_provisions: Vec<String>,
        relevance: String,
        status: String,
    },
}

impl LegalDetails {
    /// Stable filter key, the catalog category
    pub fn key(&self) -> &'static str {
        match self {
            LegalDetails::Contract { .. } => "contract",
            LegalDetails::Agreement { .. } => "agreement",
            LegalDetails::Principle { .. } => "principle",
            LegalDetails::Treaty { .. } => "treaty",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            LegalDetails::Contract { .. } => "Contract",
            LegalDetails::Agreement { .. } => "Agreement",
            LegalDetails::Principle { .. } => "Principle",
            LegalDetails::Treaty { .. } => "Treaty",
        }
    }
}

// ============================================================================
// LEGAL RESOURCE
// ============================================================================

/// One Legal Library record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegalResource {
    /// Record id (e.g. "CT-01", "IT-04")
    pub id: String,

    pub name: String,

    pub description: String,

    /// Publication date of the current revision; principles track
    /// `last_reviewed` in their details instead, treaties carry no date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<NaiveDate>,

    pub details: LegalDetails,
}

impl Resource for LegalResource {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        self.details.key()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.description]
    }
}

/// Build the Legal Library catalog from the embedded seed data
pub fn legal_catalog() -> Result<Catalog<LegalResource>> {
    Catalog::from_json_str(&LEGAL_CATEGORIES, SEED_JSON)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{filter, Selection};
    use crate::view::ViewState;

    #[test]
    fn test_seed_catalog_loads_and_validates() {
        let catalog = legal_catalog().unwrap();
        assert_eq!(catalog.len(), 22);
        assert_eq!(
            catalog.categories(),
            &["contract", "agreement", "principle", "treaty"]
        );
    }

    #[test]
    fn test_counts_per_kind() {
        let catalog = legal_catalog().unwrap();
        assert_eq!(
            catalog.category_counts(),
            vec![
                ("contract", 10),
                ("agreement", 4),
                ("principle", 4),
                ("treaty", 4)
            ]
        );
    }

    #[test]
    fn test_variant_attributes() {
        let catalog = legal_catalog().unwrap();

        let template = catalog.get("CT-04").unwrap();
        assert_eq!(template.name, "Space Debris Insurance");
        match &template.details {
            LegalDetails::Contract {
                category,
                pages,
                downloads,
                rating,
            } => {
                assert_eq!(category, "Insurance");
                assert_eq!(*pages, 22);
                assert_eq!(*downloads, 1105);
                assert_eq!(*rating, 4.9);
            }
            other => panic!("CT-04 should be a contract template, got {:?}", other),
        }

        let treaty = catalog.get("IT-01").unwrap();
        assert_eq!(treaty.category(), "treaty");
        assert!(treaty.last_updated.is_none());
        match &treaty.details {
            LegalDetails::Treaty {
                signatories,
                key_provisions,
                ..
            } => {
                assert_eq!(signatories, "110+ countries");
                assert_eq!(key_provisions.len(), 4);
            }
            other => panic!("IT-01 should be a treaty, got {:?}", other),
        }
    }

    #[test]
    fn test_search_spans_all_kinds_in_catalog_order() {
        let catalog = legal_catalog().unwrap();

        let hits = filter(catalog.resources(), "liability", &Selection::All);
        let ids: Vec<&str> = hits.iter().map(|r| r.id.as_str()).collect();
        // Name hits (GP-02, IT-04) and a description hit (CT-01), in order
        assert_eq!(ids, vec!["CT-01", "GP-02", "IT-04"]);
    }

    #[test]
    fn test_kind_filter() {
        let catalog = legal_catalog().unwrap();
        let mut view = ViewState::new();
        view.select_key("agreement");

        let visible = view.visible(&catalog);
        assert_eq!(visible.len(), 4);
        assert!(visible.iter().all(|r| r.category() == "agreement"));
        assert_eq!(visible[0].id, "AT-01");
    }

    #[test]
    fn test_search_and_kind_combine() {
        let catalog = legal_catalog().unwrap();
        let mut view = ViewState::new();
        view.set_query("space");
        view.select_key("principle");

        let visible = view.visible(&catalog);
        let ids: Vec<&str> = visible.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["GP-01", "GP-02", "GP-03", "GP-04"]);
    }
}
