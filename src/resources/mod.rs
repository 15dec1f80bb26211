// Resource Catalogs
// Each screen has one typed catalog with its own closed category set.
// Seed data is embedded JSON, parsed and validated at startup.

pub mod assets;
pub mod legal;

pub use assets::{
    contract_terms, marketplace_catalog, AssetStatus, ContractTerms, Orbit, SatelliteAsset,
    ASSET_CATEGORIES,
};
pub use legal::{legal_catalog, LegalDetails, LegalResource, LEGAL_CATEGORIES};
