// Space Trade Platform - Core Library
// Static catalogs, a pure query engine, and the per-screen view state
// that binds them. The console UI lives behind the `tui` feature.

pub mod catalog;
pub mod query;
pub mod resources;
pub mod view;

#[cfg(feature = "tui")]
pub mod ui;

// Re-export commonly used types
pub use catalog::{Catalog, Resource};
pub use query::{filter, matches, matches_category, matches_text, Selection, WILDCARD};
pub use resources::{
    contract_terms, legal_catalog, marketplace_catalog, AssetStatus, ContractTerms, LegalDetails,
    LegalResource, Orbit, SatelliteAsset, ASSET_CATEGORIES, LEGAL_CATEGORIES,
};
pub use view::ViewState;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
