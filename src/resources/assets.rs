// 🛰️ Satellite Assets - Marketplace catalog
// Fractional-ownership listings. The Marketplace filters on operational
// status and searches across name, asset kind, and operator.

use crate::catalog::{Catalog, Resource};
use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Seed catalog shipped with the binary
const SEED_JSON: &str = include_str!("../../data/marketplace.json");

/// Declared Marketplace categories, in filter-button order
pub const ASSET_CATEGORIES: [&str; 2] = ["active", "maintenance"];

// ============================================================================
// ASSET STATUS
// ============================================================================

/// Operational status - doubles as the Marketplace filter category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetStatus {
    Active,
    Maintenance,
}

impl AssetStatus {
    /// Stable filter key (lowercase, what the query engine compares)
    pub fn key(&self) -> &'static str {
        match self {
            AssetStatus::Active => "active",
            AssetStatus::Maintenance => "maintenance",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            AssetStatus::Active => "Active",
            AssetStatus::Maintenance => "Maintenance",
        }
    }
}

// ============================================================================
// ORBIT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orbit {
    #[serde(rename = "LEO")]
    Leo,
    #[serde(rename = "MEO")]
    Meo,
    #[serde(rename = "GEO")]
    Geo,
}

impl Orbit {
    pub fn label(&self) -> &'static str {
        match self {
            Orbit::Leo => "LEO",
            Orbit::Meo => "MEO",
            Orbit::Geo => "GEO",
        }
    }

    /// Nominal altitude shown on the technical detail panel
    pub fn altitude(&self) -> &'static str {
        match self {
            Orbit::Leo => "2,000 km",
            Orbit::Meo => "20,200 km",
            Orbit::Geo => "35,786 km",
        }
    }
}

// ============================================================================
// SATELLITE ASSET
// ============================================================================

/// One tradable space asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SatelliteAsset {
    /// Listing id (e.g. "SAT-001")
    pub id: String,

    /// Asset name (e.g. "CommSat Alpha")
    pub name: String,

    /// Asset kind (e.g. "Communication Satellite")
    pub kind: String,

    pub orbit: Orbit,

    /// Operating company
    pub operator: String,

    pub status: AssetStatus,

    /// Ownership share on offer (e.g. "20%")
    pub share_available: String,

    /// Listing price (e.g. "2.5M USDC")
    pub price: String,

    /// Revenue line (e.g. "340K USDC/month")
    pub revenue: String,

    /// Coverage area (e.g. "Global", "Regional")
    pub coverage: String,

    pub launch_date: NaiveDate,

    pub next_maintenance: NaiveDate,
}

impl Resource for SatelliteAsset {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        self.status.key()
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.kind, &self.operator]
    }
}

/// Build the Marketplace catalog from the embedded seed data
pub fn marketplace_catalog() -> Result<Catalog<SatelliteAsset>> {
    Catalog::from_json_str(&ASSET_CATEGORIES, SEED_JSON)
}

// ============================================================================
// CONTRACT TERMS
// ============================================================================

/// Contract summary shown on an asset's detail panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractTerms {
    pub contract_type: &'static str,
    pub terms: &'static str,
    pub coverage: &'static str,
    pub payment_terms: &'static str,
    pub liability_limit: &'static str,
    pub arbitration_clause: &'static str,
    pub maintenance_schedule: &'static str,
}

/// Contract terms per listing. Listings without negotiated terms fall back
/// to the standard service agreement.
pub fn contract_terms(asset_id: &str) -> ContractTerms {
    match asset_id {
        "SAT-001" => ContractTerms {
            contract_type: "Fractional Ownership Agreement",
            terms: "5-year renewable lease with option to purchase",
            coverage: "Global coverage with 99.9% uptime guarantee",
            payment_terms: "Quarterly payments in advance",
            liability_limit: "50M USDC comprehensive coverage",
            arbitration_clause: "ICC Arbitration Rules apply with London as seat",
            maintenance_schedule: "Monthly system checks, annual hardware inspection",
        },
        "SAT-002" => ContractTerms {
            contract_type: "Data Services License Agreement",
            terms: "3-year fixed term with automatic renewal",
            coverage: "Regional coverage with redundancy backup",
            payment_terms: "Monthly subscription model",
            liability_limit: "25M USDC operational coverage",
            arbitration_clause: "SIAC Rules with Singapore jurisdiction",
            maintenance_schedule: "Bi-weekly software updates, quarterly maintenance",
        },
        "SAT-003" => ContractTerms {
            contract_type: "Navigation Services Partnership",
            terms: "7-year strategic partnership agreement",
            coverage: "Global positioning services with military-grade accuracy",
            payment_terms: "Annual license fees with usage-based pricing",
            liability_limit: "100M USDC full operational coverage",
            arbitration_clause: "LCIA Rules with London arbitration seat",
            maintenance_schedule: "Continuous monitoring with real-time diagnostics",
        },
        _ => ContractTerms {
            contract_type: "Standard Service Agreement",
            terms: "Flexible terms based on service type",
            coverage: "Service-specific coverage area",
            payment_terms: "Standard payment schedule",
            liability_limit: "Standard liability coverage",
            arbitration_clause: "Standard arbitration procedures",
            maintenance_schedule: "Regular maintenance as per schedule",
        },
    }
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
        let catalog = marketplace_catalog().unwrap();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.categories(), &["active", "maintenance"]);

        let alpha = catalog.get("SAT-001").unwrap();
        assert_eq!(alpha.name, "CommSat Alpha");
        assert_eq!(alpha.orbit, Orbit::Geo);
        assert_eq!(alpha.status, AssetStatus::Active);
        assert_eq!(
            alpha.launch_date,
            NaiveDate::from_ymd_opt(2023, 8, 12).unwrap()
        );
    }

    #[test]
    fn test_status_counts() {
        let catalog = marketplace_catalog().unwrap();
        assert_eq!(
            catalog.category_counts(),
            vec![("active", 5), ("maintenance", 1)]
        );
    }

    #[test]
    fn test_search_covers_name_kind_and_operator() {
        let catalog = marketplace_catalog().unwrap();

        // Name
        let by_name = filter(catalog.resources(), "datalink", &Selection::All);
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, "SAT-002");

        // Kind
        let by_kind = filter(catalog.resources(), "weather", &Selection::All);
        assert_eq!(by_kind.len(), 1);
        assert_eq!(by_kind[0].id, "SAT-005");

        // Operator
        let by_operator = filter(catalog.resources(), "navspace", &Selection::All);
        assert_eq!(by_operator.len(), 1);
        assert_eq!(by_operator[0].id, "SAT-003");
    }

    #[test]
    fn test_status_filter() {
        let catalog = marketplace_catalog().unwrap();
        let mut view = ViewState::new();
        view.select_key("maintenance");

        let visible = view.visible(&catalog);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "SAT-005");
        assert_eq!(visible[0].status, AssetStatus::Maintenance);
    }

    #[test]
    fn test_contract_terms_fallback() {
        let negotiated = contract_terms("SAT-001");
        assert_eq!(negotiated.contract_type, "Fractional Ownership Agreement");

        let standard = contract_terms("SAT-006");
        assert_eq!(standard.contract_type, "Standard Service Agreement");
        assert_eq!(contract_terms("SAT-999"), standard);
    }

    #[test]
    fn test_orbit_altitudes() {
        assert_eq!(Orbit::Geo.altitude(), "35,786 km");
        assert_eq!(Orbit::Meo.altitude(), "20,200 km");
        assert_eq!(Orbit::Leo.altitude(), "2,000 km");
    }
}
