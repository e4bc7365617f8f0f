//! Capability kinds - the families of abstract capabilities in the catalogue.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifies which abstract capability family is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapabilityKind {
    /// Abstract Factory: families of GUI widgets
    Gui,
    /// Factory Method: logistics creating transports
    Logistics,
    /// Factory Method: the structural creator/product skeleton
    Creator,
    /// Factory Method: dialogs creating platform buttons
    Dialog,
    /// Factory Method: payment gateways creating payment methods
    Payment,
    /// Open/Closed: shipping strategies
    Shipping,
    /// Dependency Inversion: database backends
    Database,
    /// Interface Segregation: cloud providers
    Cloud,
}

impl CapabilityKind {
    /// Every kind, in catalogue order.
    pub const ALL: [CapabilityKind; 8] = [
        CapabilityKind::Gui,
        CapabilityKind::Logistics,
        CapabilityKind::Creator,
        CapabilityKind::Dialog,
        CapabilityKind::Payment,
        CapabilityKind::Shipping,
        CapabilityKind::Database,
        CapabilityKind::Cloud,
    ];

    /// Get the kind name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            CapabilityKind::Gui => "gui",
            CapabilityKind::Logistics => "logistics",
            CapabilityKind::Creator => "creator",
            CapabilityKind::Dialog => "dialog",
            CapabilityKind::Payment => "payment",
            CapabilityKind::Shipping => "shipping",
            CapabilityKind::Database => "database",
            CapabilityKind::Cloud => "cloud",
        }
    }

    /// One-line description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            CapabilityKind::Gui => "Abstract Factory over Windows and Mac widget families",
            CapabilityKind::Logistics => "Factory Method: plan a delivery with a created transport",
            CapabilityKind::Creator => "Factory Method: creator business logic over a product",
            CapabilityKind::Dialog => "Factory Method: dialogs rendering platform buttons",
            CapabilityKind::Payment => "Factory Method: checkout through a created payment",
            CapabilityKind::Shipping => "Open/Closed: pluggable shipping strategies",
            CapabilityKind::Database => "Dependency Inversion: reports over a database abstraction",
            CapabilityKind::Cloud => "Interface Segregation: cloud storage, hosting and CDN",
        }
    }
}

impl std::fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CapabilityKind {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gui" | "ui" => Ok(CapabilityKind::Gui),
            "logistics" => Ok(CapabilityKind::Logistics),
            "creator" => Ok(CapabilityKind::Creator),
            "dialog" => Ok(CapabilityKind::Dialog),
            "payment" => Ok(CapabilityKind::Payment),
            "shipping" => Ok(CapabilityKind::Shipping),
            "database" | "db" => Ok(CapabilityKind::Database),
            "cloud" => Ok(CapabilityKind::Cloud),
            _ => Err(KindParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid capability kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "invalid capability kind '{0}', valid values: gui, logistics, creator, dialog, payment, shipping, database, cloud"
)]
pub struct KindParseError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_through_str() {
        for kind in CapabilityKind::ALL {
            assert_eq!(kind.as_str().parse::<CapabilityKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_kind_parse_aliases() {
        assert_eq!("UI".parse::<CapabilityKind>().unwrap(), CapabilityKind::Gui);
        assert_eq!(" db ".parse::<CapabilityKind>().unwrap(), CapabilityKind::Database);
    }

    #[test]
    fn test_kind_parse_error_lists_values() {
        let err = "toolkit".parse::<CapabilityKind>().unwrap_err();
        assert_eq!(err, KindParseError("toolkit".to_string()));
        assert!(err.to_string().contains("valid values: gui"));
    }
}
