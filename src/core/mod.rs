//! Core data structures for patternbook.
//!
//! - Capability kinds and variant keys, the two halves of a resolver key
//! - Effects and the sinks providers report to
//! - The built-in catalog of resolvers

pub mod catalog;
pub mod effect;
pub mod kind;
pub mod variant;

pub use catalog::{Catalog, KindSummary};
pub use effect::{Console, Effect, EffectSink, Trace};
pub use kind::{CapabilityKind, KindParseError};
pub use variant::VariantKey;
