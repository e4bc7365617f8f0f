//! Variant keys - the selection token naming one concrete provider.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Key selecting one concrete provider within a capability kind.
///
/// Keys are normalized on construction (trimmed, lower-cased) so that
/// `"Win"`, `" win "` and `"win"` select the same provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct VariantKey(String);

impl VariantKey {
    /// Create a normalized key.
    pub fn new(key: impl AsRef<str>) -> Self {
        VariantKey(key.as_ref().trim().to_lowercase())
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for VariantKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VariantKey {
    fn from(key: &str) -> Self {
        VariantKey::new(key)
    }
}

impl From<String> for VariantKey {
    fn from(key: String) -> Self {
        VariantKey::new(key)
    }
}

impl From<VariantKey> for String {
    fn from(key: VariantKey) -> Self {
        key.0
    }
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
