//! Capability use-case scripts.
//!
//! Each kind has one fixed script that only touches the abstract capability,
//! so every variant of a kind records the same operations in the same order.
//! The one exception is `cloud`, whose script skips hosting and CDN for
//! providers that do not expose them.

use tracing::debug;

use crate::core::catalog::Catalog;
use crate::core::effect::EffectSink;
use crate::core::kind::CapabilityKind;
use crate::patterns::abstract_factory::Application;
use crate::principles::dip::{BudgetReport, REPORT_DATE};
use crate::principles::isp;
use crate::principles::ocp::{sample_items, Order};
use crate::resolver::ResolveError;

/// Resolve `(kind, variant)` from the catalog and run the kind's script.
///
/// Nothing is emitted when resolution fails.
pub fn run_use_case(
    catalog: &Catalog,
    kind: CapabilityKind,
    variant: &str,
    sink: &mut dyn EffectSink,
) -> Result<(), ResolveError> {
    debug!(%kind, variant, "Running use case");

    match kind {
        CapabilityKind::Gui => {
            let factory = catalog.gui().resolve(kind, variant)?;
            let mut app = Application::new(factory);
            app.create_ui(sink);
            app.paint(sink);
        }
        CapabilityKind::Logistics => {
            catalog
                .logistics()
                .resolve(kind, variant)?
                .plan_delivery(sink);
        }
        CapabilityKind::Creator => {
            let result = catalog.creator().resolve(kind, variant)?.some_operation(sink);
            debug!(%result, "Creator finished");
        }
        CapabilityKind::Dialog => {
            catalog.dialog().resolve(kind, variant)?.render(sink);
        }
        CapabilityKind::Payment => {
            catalog.payment().resolve(kind, variant)?.checkout(sink);
        }
        CapabilityKind::Shipping => {
            let shipping = catalog.shipping().resolve(kind, variant)?;
            let order = Order::new(sample_items(), shipping);
            let cost = order.shipping_cost(sink);
            let days = order.shipping_date(sink);
            debug!(cost, days, "Order shipping computed");
        }
        CapabilityKind::Database => {
            let report = BudgetReport::new(catalog.database().resolve(kind, variant)?);
            report.open(REPORT_DATE, sink);
            report.insert(sink);
            report.save(sink);
        }
        CapabilityKind::Cloud => {
            let provider = catalog.cloud().resolve(kind, variant)?;
            isp::exercise(provider.as_ref(), sink);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::effect::Trace;

    fn trace_of(catalog: &Catalog, kind: CapabilityKind, variant: &str) -> Trace {
        let mut trace = Trace::new();
        run_use_case(catalog, kind, variant, &mut trace).unwrap();
        trace
    }

    #[test]
    fn test_gui_win_paints_win_button() {
        let catalog = Catalog::builtin().unwrap();
        let trace = trace_of(&catalog, CapabilityKind::Gui, "win");
        assert!(trace.messages().contains(&"Paint win button"));
    }

    #[test]
    fn test_gui_traces_identical_across_variants() {
        let catalog = Catalog::builtin().unwrap();
        let win = trace_of(&catalog, CapabilityKind::Gui, "win");
        let mac = trace_of(&catalog, CapabilityKind::Gui, "mac");
        assert_eq!(win.operations(), vec!["create", "create", "paint", "paint"]);
        assert_eq!(win.operations(), mac.operations());
    }

    #[test]
    fn test_every_kind_is_substitutable() {
        let catalog = Catalog::builtin().unwrap();
        for kind in CapabilityKind::ALL {
            if kind == CapabilityKind::Cloud {
                continue;
            }
            let variants = catalog.variants(kind);
            let first = trace_of(&catalog, kind, variants[0].as_str());
            for variant in &variants[1..] {
                let other = trace_of(&catalog, kind, variant.as_str());
                assert_eq!(first.operations(), other.operations(), "{} {}", kind, variant);
            }
        }
    }

    #[test]
    fn test_cloud_skips_absent_capabilities() {
        let catalog = Catalog::builtin().unwrap();
        let amazon = trace_of(&catalog, CapabilityKind::Cloud, "amazon");
        let dropbox = trace_of(&catalog, CapabilityKind::Cloud, "dropbox");

        assert_eq!(amazon.len(), 5);
        assert_eq!(dropbox.operations(), amazon.operations()[..2].to_vec());
    }

    #[test]
    fn test_repeated_resolution_is_stable() {
        let catalog = Catalog::builtin().unwrap();
        let first = trace_of(&catalog, CapabilityKind::Payment, "pix");
        let second = trace_of(&catalog, CapabilityKind::Payment, "pix");
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_variant_emits_nothing() {
        let catalog = Catalog::builtin().unwrap();
        let mut trace = Trace::new();
        let err = run_use_case(&catalog, CapabilityKind::Gui, "linux", &mut trace).unwrap_err();

        assert!(matches!(err, ResolveError::UnknownVariant { .. }));
        assert!(trace.is_empty());
    }

    #[test]
    fn test_database_report_script() {
        let catalog = Catalog::builtin().unwrap();
        let trace = trace_of(&catalog, CapabilityKind::Database, "mongodb");
        assert_eq!(
            trace.messages(),
            vec!["Open 2024-01-31", "Report insert", "MongoDB insert", "Save"]
        );
    }
}
