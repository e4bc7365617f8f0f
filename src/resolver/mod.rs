//! Capability resolution.
//!
//! A [`Resolver`] maps `(CapabilityKind, VariantKey)` pairs to factory
//! functions producing boxed providers behind an abstract capability trait.
//!
//! # Lifecycle
//!
//! ```text
//!   ResolverBuilder::new()
//!        │  register_variant(kind, key, factory)   (fails on duplicates)
//!        ▼
//!   Resolver<P>  ── immutable, Send + Sync, shared by all clients
//!        │  resolve(kind, key)                     (fails on unknown keys)
//!        ▼
//!   Box<P>       ── fresh provider per call, owned by the caller
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use patternbook::resolver::ResolverBuilder;
//!
//! let resolver = ResolverBuilder::<dyn GuiFactory>::new()
//!     .register_variant(CapabilityKind::Gui, "win", || Box::new(WinFactory::new()))?
//!     .register_variant(CapabilityKind::Gui, "mac", || Box::new(MacFactory::new()))?
//!     .build();
//!
//! let factory = resolver.resolve(CapabilityKind::Gui, "win")?;
//! ```

pub mod errors;

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::core::kind::CapabilityKind;
use crate::core::variant::VariantKey;

pub use errors::ResolveError;

/// Factory function bound to one variant.
pub type Factory<P> = Box<dyn Fn() -> Box<P> + Send + Sync>;

/// Builder collecting variant bindings before the resolver is frozen.
pub struct ResolverBuilder<P: ?Sized> {
    bindings: HashMap<(CapabilityKind, VariantKey), Factory<P>>,
    order: Vec<(CapabilityKind, VariantKey)>,
}

impl<P: ?Sized> ResolverBuilder<P> {
    /// Create an empty builder.
    pub fn new() -> Self {
        ResolverBuilder {
            bindings: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Bind a factory to `(kind, variant)`.
    ///
    /// Fails with [`ResolveError::DuplicateVariant`] if the pair is already bound.
    pub fn register_variant<F>(
        mut self,
        kind: CapabilityKind,
        variant: impl Into<VariantKey>,
        factory: F,
    ) -> Result<Self, ResolveError>
    where
        F: Fn() -> Box<P> + Send + Sync + 'static,
    {
        let variant = variant.into();
        let key = (kind, variant);

        if self.bindings.contains_key(&key) {
            let (kind, variant) = key;
            return Err(ResolveError::DuplicateVariant { kind, variant });
        }

        debug!(kind = %key.0, variant = %key.1, "Registered variant");
        self.order.push(key.clone());
        self.bindings.insert(key, Box::new(factory));
        Ok(self)
    }

    /// Freeze the bindings into a resolver.
    pub fn build(self) -> Resolver<P> {
        Resolver {
            bindings: self.bindings,
            order: self.order,
        }
    }
}

impl<P: ?Sized> Default for ResolverBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable map from `(kind, variant)` to provider factories.
pub struct Resolver<P: ?Sized> {
    bindings: HashMap<(CapabilityKind, VariantKey), Factory<P>>,
    order: Vec<(CapabilityKind, VariantKey)>,
}

impl<P: ?Sized> Resolver<P> {
    /// Construct a fresh provider for `(kind, variant)`.
    ///
    /// No factory runs when the pair is unbound.
    pub fn resolve(
        &self,
        kind: CapabilityKind,
        variant: impl AsRef<str>,
    ) -> Result<Box<P>, ResolveError> {
        let variant = VariantKey::new(variant);
        let key = (kind, variant);

        match self.bindings.get(&key) {
            Some(factory) => {
                debug!(kind = %key.0, variant = %key.1, "Resolved provider");
                Ok(factory())
            }
            None => {
                let (kind, variant) = key;
                debug!(%kind, %variant, "Unknown variant");
                Err(ResolveError::UnknownVariant {
                    kind,
                    available: self.variants(kind).cloned().collect(),
                    variant,
                })
            }
        }
    }

    /// Variant keys bound for `kind`, in registration order.
    pub fn variants(&self, kind: CapabilityKind) -> impl Iterator<Item = &VariantKey> + '_ {
        self.order
            .iter()
            .filter(move |(k, _)| *k == kind)
            .map(|(_, v)| v)
    }

    /// Kinds with at least one binding, in registration order.
    pub fn kinds(&self) -> Vec<CapabilityKind> {
        let mut kinds = Vec::new();
        for (kind, _) in &self.order {
            if !kinds.contains(kind) {
                kinds.push(*kind);
            }
        }
        kinds
    }

    /// Check if `(kind, variant)` is bound.
    pub fn contains(&self, kind: CapabilityKind, variant: impl AsRef<str>) -> bool {
        self.bindings
            .contains_key(&(kind, VariantKey::new(variant)))
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the resolver has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<P: ?Sized> fmt::Debug for Resolver<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("bindings", &self.order)
            .finish()
    }
}
