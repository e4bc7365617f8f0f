//! SOLID principle demonstrations.
//!
//! Every principle keeps its violating design in a `legacy` submodule next to
//! the corrected one, and [`run`] drives either stage against an effect sink.

pub mod dip;
pub mod errors;
pub mod isp;
pub mod lsp;
pub mod ocp;
pub mod srp;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::catalog::Catalog;
use crate::core::effect::EffectSink;
use crate::core::kind::CapabilityKind;

pub use errors::{PrincipleError, ShippingError, UnsupportedOperation};

/// One of the five SOLID principles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Principle {
    Srp,
    Ocp,
    Lsp,
    Isp,
    Dip,
}

impl Principle {
    pub const ALL: [Principle; 5] = [
        Principle::Srp,
        Principle::Ocp,
        Principle::Lsp,
        Principle::Isp,
        Principle::Dip,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Principle::Srp => "srp",
            Principle::Ocp => "ocp",
            Principle::Lsp => "lsp",
            Principle::Isp => "isp",
            Principle::Dip => "dip",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Principle::Srp => "Single Responsibility",
            Principle::Ocp => "Open/Closed",
            Principle::Lsp => "Liskov Substitution",
            Principle::Isp => "Interface Segregation",
            Principle::Dip => "Dependency Inversion",
        }
    }
}

impl fmt::Display for Principle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Principle {
    type Err = PrincipleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Principle::ALL
            .into_iter()
            .find(|p| p.as_str() == needle)
            .ok_or_else(|| PrincipleParseError(s.to_string()))
    }
}

/// Invalid principle name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown principle `{0}` (expected one of: srp, ocp, lsp, isp, dip)")]
pub struct PrincipleParseError(pub String);

/// Which design to demonstrate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Violation,
    #[default]
    Corrected,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Violation => f.write_str("violation"),
            Stage::Corrected => f.write_str("corrected"),
        }
    }
}

/// Run the demonstration of `principle` at `stage`.
///
/// Corrected stages draw their providers from `catalog`. A violation stage
/// may end in [`PrincipleError::Unsupported`]; that failure is the point of
/// the demonstration.
pub fn run(
    principle: Principle,
    stage: Stage,
    catalog: &Catalog,
    sink: &mut dyn EffectSink,
) -> Result<(), PrincipleError> {
    debug!(%principle, %stage, "Running principle demonstration");

    match (principle, stage) {
        (Principle::Srp, Stage::Violation) => {
            srp::legacy::Employee::new("Ada").print_time_sheet_report(sink);
        }
        (Principle::Srp, Stage::Corrected) => {
            srp::TimeSheetReport.print(&srp::Employee::new("Ada"), sink);
        }

        (Principle::Ocp, Stage::Violation) => {
            let order = ocp::legacy::Order::new(ocp::sample_items());
            order.shipping_cost("air", sink)?;
            order.shipping_cost("ground", sink)?;
        }
        (Principle::Ocp, Stage::Corrected) => {
            let resolver = catalog.shipping();
            for variant in resolver.variants(CapabilityKind::Shipping) {
                let shipping = resolver.resolve(CapabilityKind::Shipping, variant)?;
                ocp::Order::new(ocp::sample_items(), shipping).shipping_cost(sink);
            }
        }

        (Principle::Lsp, Stage::Violation) => {
            let project = lsp::legacy::Project::new(vec![
                lsp::legacy::Document::read_only("doc1"),
                lsp::legacy::Document::regular("doc2"),
                lsp::legacy::Document::read_only("doc3"),
            ]);
            project.open_all(sink);
            project.save_all(sink)?;
        }
        (Principle::Lsp, Stage::Corrected) => {
            let project = lsp::Project::new(vec![
                Box::new(lsp::ReadOnlyDocument::new("doc1")),
                Box::new(lsp::WritableDocument::new("doc2")),
                Box::new(lsp::ReadOnlyDocument::new("doc3")),
            ]);
            project.open_all(sink);
            project.save_all(sink);
        }

        (Principle::Isp, Stage::Violation) => {
            use isp::legacy::CloudProvider as _;

            isp::legacy::Amazon.create_server("amz-001", sink)?;
            isp::legacy::Dropbox.create_server("dbx-001", sink)?;
        }
        (Principle::Isp, Stage::Corrected) => {
            let resolver = catalog.cloud();
            for variant in resolver.variants(CapabilityKind::Cloud) {
                let provider = resolver.resolve(CapabilityKind::Cloud, variant)?;
                isp::exercise(provider.as_ref(), sink);
            }
        }

        (Principle::Dip, Stage::Violation) => {
            let report = dip::legacy::BudgetReport::new();
            report.open(dip::REPORT_DATE, sink);
            report.mysql().insert(sink);
            report.save(sink);
        }
        (Principle::Dip, Stage::Corrected) => {
            let database = catalog
                .database()
                .resolve(CapabilityKind::Database, "mysql")?;
            let report = dip::BudgetReport::new(database);
            report.open(dip::REPORT_DATE, sink);
            report.insert(sink);
            report.save(sink);
        }
    }

    Ok(())
}
