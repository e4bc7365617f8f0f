//! Errors raised by the principle demonstrations.

use thiserror::Error;

use crate::resolver::ResolveError;

/// A provider was asked to do something it cannot do.
///
/// Only the legacy (violation) code paths construct this; the corrected
/// designs make the unsupported call unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{provider}` does not support `{operation}`")]
pub struct UnsupportedOperation {
    provider: String,
    operation: &'static str,
}

impl UnsupportedOperation {
    pub(crate) fn new(provider: impl Into<String>, operation: &'static str) -> Self {
        UnsupportedOperation {
            provider: provider.into(),
            operation,
        }
    }

    /// Name of the provider that refused the call.
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Operation that was refused.
    pub fn operation(&self) -> &'static str {
        self.operation
    }
}

/// Error from the string-switched shipping calculation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShippingError {
    #[error("unknown shipping method `{0}` (expected ground or air)")]
    UnknownShipping(String),
}

/// Any failure while running a principle demonstration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrincipleError {
    #[error(transparent)]
    Unsupported(#[from] UnsupportedOperation),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Shipping(#[from] ShippingError),
}
