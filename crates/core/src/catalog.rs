//! Vehicle categories, repair services, and request composition
//!
//! Fixed reference data for the service-request page. Labels are not
//! stored here: entries carry translation keys and the web layer resolves
//! them per language, so the catalog itself stays locale-agnostic.

// ----------------------------------------------------------------------------
// Catalog tables
// ----------------------------------------------------------------------------

/// A repair service the workshop offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceKind {
    pub id: &'static str,
    pub title_key: &'static str,
    pub description_key: &'static str,
}

/// A vehicle category. The `id` doubles as its translation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VehicleCategory {
    pub id: &'static str,
    pub brands: &'static [&'static str],
}

pub static SERVICES: [ServiceKind; 6] = [
    ServiceKind {
        id: "revisie",
        title_key: "batteryRevision",
        description_key: "batteryRevisionDesc",
    },
    ServiceKind {
        id: "banden",
        title_key: "tireRepair",
        description_key: "tireRepairDesc",
    },
    ServiceKind {
        id: "motor",
        title_key: "motorRepair",
        description_key: "motorRepairDesc",
    },
    ServiceKind {
        id: "electronica",
        title_key: "controllerElectronics",
        description_key: "controllerElectronicsDesc",
    },
    ServiceKind {
        id: "remmen",
        title_key: "brakes",
        description_key: "brakesDesc",
    },
    ServiceKind {
        id: "onderhoud",
        title_key: "maintenance",
        description_key: "maintenanceDesc",
    },
];

pub static CATEGORIES: [VehicleCategory; 4] = [
    VehicleCategory {
        id: "eSteps",
        brands: &["Segway-Ninebot", "Xiaomi", "NIU", "Micro", "Pure Electric"],
    },
    VehicleCategory {
        id: "eBikes",
        brands: &["Cowboy", "VanMoof", "Gazelle", "Cube", "Trek"],
    },
    VehicleCategory {
        id: "monowheels",
        brands: &["InMotion", "KingSong", "Begode", "Veteran"],
    },
    VehicleCategory {
        id: "hoverboards",
        brands: &["Oxboard", "Razor", "Segway", "Evercross"],
    },
];

pub fn service_by_id(id: &str) -> Option<&'static ServiceKind> {
    SERVICES.iter().find(|service| service.id == id)
}

pub fn category_by_id(id: &str) -> Option<&'static VehicleCategory> {
    CATEGORIES.iter().find(|category| category.id == id)
}

// ----------------------------------------------------------------------------
// Request composition
// ----------------------------------------------------------------------------

/// Where finished requests are sent.
pub const CONTACT_EMAIL: &str = "service@voltwerk.be";

/// A fully composed service request, ready to hand to the mail client.
/// Held only for the moment of composition, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceRequest {
    pub category: &'static VehicleCategory,
    pub service: &'static ServiceKind,
    pub brand: Option<String>,
    pub reference: String,
}

/// Build a `mailto:` URL with percent-encoded subject and body.
pub fn mailto_url(to: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        to,
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id() {
        let service = service_by_id("revisie").unwrap();
        assert_eq!(service.title_key, "batteryRevision");

        let category = category_by_id("monowheels").unwrap();
        assert!(category.brands.contains(&"KingSong"));

        assert!(service_by_id("valeting").is_none());
        assert!(category_by_id("skateboards").is_none());
    }

    #[test]
    fn test_catalog_is_complete() {
        assert_eq!(SERVICES.len(), 6);
        assert_eq!(CATEGORIES.len(), 4);

        for category in &CATEGORIES {
            assert!(!category.brands.is_empty());
        }
        for service in &SERVICES {
            assert!(service.description_key.ends_with("Desc"));
        }
    }

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in SERVICES.iter().enumerate() {
            for b in &SERVICES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
        for (i, a) in CATEGORIES.iter().enumerate() {
            for b in &CATEGORIES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_mailto_url_encodes_payload() {
        let url = mailto_url("service@voltwerk.be", "Herstelling: eBikes", "Merk: Cowboy\nRef: 1234");
        assert!(url.starts_with("mailto:service@voltwerk.be?subject="));
        assert!(url.contains("Herstelling%3A%20eBikes"));
        assert!(url.contains("Merk%3A%20Cowboy%0ARef%3A%201234"));
        assert!(!url.contains(' '));
    }
}
