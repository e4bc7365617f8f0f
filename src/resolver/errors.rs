//! Resolution error types and diagnostics.

use thiserror::Error;

use crate::core::kind::CapabilityKind;
use crate::core::variant::VariantKey;
use crate::util::diagnostic::{suggestions, Diagnostic};

/// Error during capability registration or resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("unknown variant `{variant}` for capability `{kind}`")]
    UnknownVariant {
        kind: CapabilityKind,
        variant: VariantKey,
        available: Vec<VariantKey>,
    },

    #[error("variant `{variant}` is already registered for capability `{kind}`")]
    DuplicateVariant {
        kind: CapabilityKind,
        variant: VariantKey,
    },
}

impl ResolveError {
    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ResolveError::UnknownVariant {
                kind,
                variant,
                available,
            } => {
                let mut diag = Diagnostic::error(format!(
                    "no `{}` provider is registered under `{}`",
                    kind, variant
                ));

                if available.is_empty() {
                    diag = diag.with_context(format!("`{}` has no registered variants", kind));
                } else {
                    let names: Vec<&str> = available.iter().map(|v| v.as_str()).collect();
                    diag = diag.with_context(format!("available variants: {}", names.join(", ")));
                    diag = diag.with_suggestion(format!(
                        "Run `patternbook run {} {}`",
                        kind, available[0]
                    ));
                }

                diag.with_suggestion(suggestions::LIST_VARIANTS)
            }

            ResolveError::DuplicateVariant { kind, variant } => {
                Diagnostic::error(format!("`{}` registered twice for `{}`", variant, kind))
                    .with_context("each (kind, variant) pair may be bound to one factory")
                    .with_suggestion("Remove the duplicate registration")
            }
        }
    }
}
