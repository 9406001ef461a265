use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Identifier of a field within a form.
///
/// Cheap to clone: outcomes, errors and the validity channel all carry the
/// key of the field they belong to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldKey(Arc<str>);

impl FieldKey {
    /// Create a key from any string-like value.
    #[must_use]
    pub fn new(key: impl Into<Arc<str>>) -> Self {
        Self(key.into())
    }

    /// The key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FieldKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FieldKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for FieldKey {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl From<&FieldKey> for FieldKey {
    fn from(key: &FieldKey) -> Self {
        key.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_borrow() {
        let key = FieldKey::from("price");
        assert_eq!(key.to_string(), "price");
        assert_eq!(key.as_str(), "price");

        let mut set = std::collections::HashSet::new();
        set.insert(key);
        assert!(set.contains("price"));
    }

    #[test]
    fn serde_transparent() {
        let key = FieldKey::from("bedrooms");
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"bedrooms\"");
        let back: FieldKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
