//! The built-in catalogue - one typed resolver per capability family.
//!
//! Construction registers every built-in variant from a static table. It only
//! fails if the table binds the same `(kind, variant)` twice, which is a
//! programming error surfaced as [`ResolveError::DuplicateVariant`].

use serde::Serialize;
use tracing::debug;

use crate::core::kind::CapabilityKind;
use crate::core::variant::VariantKey;
use crate::patterns::abstract_factory::{GuiFactory, MacFactory, WinFactory};
use crate::patterns::factory_method::creator::{
    ConcreteCreator1, ConcreteCreator2, Creator, CreatorA, CreatorB,
};
use crate::patterns::factory_method::dialog::{Dialog, WebDialog, WindowsDialog};
use crate::patterns::factory_method::logistics::{Logistics, RoadLogistics, SeaLogistics};
use crate::patterns::factory_method::payment::{
    BankSlipPayment, CreditCardPayment, DebitCardPayment, PaymentGateway, PixPayment,
};
use crate::principles::dip::{Database, MongoDb, MySql};
use crate::principles::isp::{Amazon, CloudProvider, Dropbox};
use crate::principles::ocp::{Air, Ground, Shipping};
use crate::resolver::{ResolveError, Resolver, ResolverBuilder};

/// Every built-in resolver.
#[derive(Debug)]
pub struct Catalog {
    gui: Resolver<dyn GuiFactory>,
    logistics: Resolver<dyn Logistics>,
    creator: Resolver<dyn Creator>,
    dialog: Resolver<dyn Dialog>,
    payment: Resolver<dyn PaymentGateway>,
    shipping: Resolver<dyn Shipping>,
    database: Resolver<dyn Database>,
    cloud: Resolver<dyn CloudProvider>,
}

impl Catalog {
    /// Build the catalogue with all built-in variants.
    pub fn builtin() -> Result<Self, ResolveError> {
        use CapabilityKind as K;

        let gui = ResolverBuilder::<dyn GuiFactory>::new()
            .register_variant(K::Gui, "win", || Box::new(WinFactory::new()))?
            .register_variant(K::Gui, "mac", || Box::new(MacFactory::new()))?
            .build();

        let logistics = ResolverBuilder::<dyn Logistics>::new()
            .register_variant(K::Logistics, "road", || Box::new(RoadLogistics))?
            .register_variant(K::Logistics, "sea", || Box::new(SeaLogistics))?
            .build();

        let creator = ResolverBuilder::<dyn Creator>::new()
            .register_variant(K::Creator, "a", || Box::new(CreatorA))?
            .register_variant(K::Creator, "b", || Box::new(CreatorB))?
            .register_variant(K::Creator, "1", || Box::new(ConcreteCreator1))?
            .register_variant(K::Creator, "2", || Box::new(ConcreteCreator2))?
            .build();

        let dialog = ResolverBuilder::<dyn Dialog>::new()
            .register_variant(K::Dialog, "windows", || Box::new(WindowsDialog))?
            .register_variant(K::Dialog, "web", || Box::new(WebDialog))?
            .build();

        let payment = ResolverBuilder::<dyn PaymentGateway>::new()
            .register_variant(K::Payment, "credit", || Box::new(CreditCardPayment))?
            .register_variant(K::Payment, "debit", || Box::new(DebitCardPayment))?
            .register_variant(K::Payment, "pix", || Box::new(PixPayment))?
            .register_variant(K::Payment, "bankslip", || Box::new(BankSlipPayment))?
            .build();

        let shipping = ResolverBuilder::<dyn Shipping>::new()
            .register_variant(K::Shipping, "ground", || Box::new(Ground))?
            .register_variant(K::Shipping, "air", || Box::new(Air))?
            .build();

        let database = ResolverBuilder::<dyn Database>::new()
            .register_variant(K::Database, "mysql", || Box::new(MySql))?
            .register_variant(K::Database, "mongodb", || Box::new(MongoDb))?
            .build();

        let cloud = ResolverBuilder::<dyn CloudProvider>::new()
            .register_variant(K::Cloud, "amazon", || Box::new(Amazon))?
            .register_variant(K::Cloud, "dropbox", || Box::new(Dropbox))?
            .build();

        let catalog = Catalog {
            gui,
            logistics,
            creator,
            dialog,
            payment,
            shipping,
            database,
            cloud,
        };
        debug!(kinds = CapabilityKind::ALL.len(), "Built catalog");
        Ok(catalog)
    }

    pub fn gui(&self) -> &Resolver<dyn GuiFactory> {
        &self.gui
    }

    pub fn logistics(&self) -> &Resolver<dyn Logistics> {
        &self.logistics
    }

    pub fn creator(&self) -> &Resolver<dyn Creator> {
        &self.creator
    }

    pub fn dialog(&self) -> &Resolver<dyn Dialog> {
        &self.dialog
    }

    pub fn payment(&self) -> &Resolver<dyn PaymentGateway> {
        &self.payment
    }

    pub fn shipping(&self) -> &Resolver<dyn Shipping> {
        &self.shipping
    }

    pub fn database(&self) -> &Resolver<dyn Database> {
        &self.database
    }

    pub fn cloud(&self) -> &Resolver<dyn CloudProvider> {
        &self.cloud
    }

    /// Variant keys registered for `kind`, in registration order.
    pub fn variants(&self, kind: CapabilityKind) -> Vec<VariantKey> {
        match kind {
            CapabilityKind::Gui => self.gui.variants(kind).cloned().collect(),
            CapabilityKind::Logistics => self.logistics.variants(kind).cloned().collect(),
            CapabilityKind::Creator => self.creator.variants(kind).cloned().collect(),
            CapabilityKind::Dialog => self.dialog.variants(kind).cloned().collect(),
            CapabilityKind::Payment => self.payment.variants(kind).cloned().collect(),
            CapabilityKind::Shipping => self.shipping.variants(kind).cloned().collect(),
            CapabilityKind::Database => self.database.variants(kind).cloned().collect(),
            CapabilityKind::Cloud => self.cloud.variants(kind).cloned().collect(),
        }
    }

    /// Check if `(kind, variant)` is registered.
    pub fn contains(&self, kind: CapabilityKind, variant: impl AsRef<str>) -> bool {
        let variant = VariantKey::new(variant);
        self.variants(kind).contains(&variant)
    }

    /// One summary per kind, in catalogue order.
    pub fn summaries(&self) -> Vec<KindSummary> {
        CapabilityKind::ALL
            .iter()
            .map(|&kind| KindSummary {
                kind,
                description: kind.description(),
                variants: self.variants(kind),
            })
            .collect()
    }
}

/// Summary of a capability kind for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KindSummary {
    pub kind: CapabilityKind,
    pub description: &'static str,
    pub variants: Vec<VariantKey>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::effect::Trace;

    #[test]
    fn test_builtin_registers_every_kind() {
        let catalog = Catalog::builtin().unwrap();
        for kind in CapabilityKind::ALL {
            assert!(!catalog.variants(kind).is_empty(), "{} has no variants", kind);
        }
    }

    #[test]
    fn test_variant_order_is_registration_order() {
        let catalog = Catalog::builtin().unwrap();
        let payment: Vec<String> = catalog
            .variants(CapabilityKind::Payment)
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(payment, vec!["credit", "debit", "pix", "bankslip"]);
    }

    #[test]
    fn test_contains_normalizes() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.contains(CapabilityKind::Gui, " WIN "));
        assert!(!catalog.contains(CapabilityKind::Gui, "linux"));
        assert!(!catalog.contains(CapabilityKind::Dialog, "win"));
    }

    #[test]
    fn test_resolving_win_paints_win_button() {
        let catalog = Catalog::builtin().unwrap();
        let factory = catalog.gui().resolve(CapabilityKind::Gui, "win").unwrap();
        let mut trace = Trace::new();
        factory.create_button(&mut Trace::new()).paint(&mut trace);
        assert_eq!(trace.messages(), vec!["Paint win button"]);
    }

    #[test]
    fn test_summaries_follow_kind_order() {
        let catalog = Catalog::builtin().unwrap();
        let kinds: Vec<CapabilityKind> = catalog.summaries().iter().map(|s| s.kind).collect();
        assert_eq!(kinds, CapabilityKind::ALL.to_vec());
    }
}
