//! patternbook - a catalogue of creational patterns and SOLID principles
//!
//! Every demonstration is a provider behind an abstract capability trait.
//! Providers are resolved by `(kind, variant)` from a [`Catalog`] and report
//! what they do through an [`EffectSink`].

pub mod core;
pub mod ops;
pub mod patterns;
pub mod principles;
pub mod resolver;
pub mod util;

pub use crate::core::{CapabilityKind, Catalog, Effect, EffectSink, Trace, VariantKey};
pub use crate::resolver::{ResolveError, Resolver, ResolverBuilder};
pub use crate::util::config::Config;
