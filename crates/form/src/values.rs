use std::any::Any;
use std::fmt;

use formwork_validator::foundation::FormValue;
use indexmap::IndexMap;

use crate::key::FieldKey;

/// Current field values, keyed by field key.
///
/// The UI layer writes into this between passes; a render pass only reads
/// it. Values keep their concrete types and are handed to validators as
/// `&dyn FormValue`.
#[derive(Default)]
pub struct FormValues {
    values: IndexMap<FieldKey, Box<dyn FormValue>>,
}

impl FormValues {
    /// Create an empty value set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value of a field, replacing any previous value.
    pub fn set<V: FormValue>(&mut self, key: impl Into<FieldKey>, value: V) {
        self.values.insert(key.into(), Box::new(value));
    }

    /// Set the value of a field (builder-style, consuming).
    #[must_use]
    pub fn with<V: FormValue>(mut self, key: impl Into<FieldKey>, value: V) -> Self {
        self.set(key, value);
        self
    }

    /// Get the erased value of a field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&dyn FormValue> {
        self.values.get(key).map(|value| &**value)
    }

    /// Get the value of a field if it has type `T`.
    #[must_use]
    pub fn get_as<T: Any>(&self, key: &str) -> Option<&T> {
        self.get(key)?.downcast_ref::<T>()
    }

    /// Remove the value of a field, returning it if it existed.
    pub fn remove(&mut self, key: &str) -> Option<Box<dyn FormValue>> {
        self.values.shift_remove(key)
    }

    /// Check whether a value exists for the given key.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterate over all keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &FieldKey> {
        self.values.keys()
    }

    /// The number of values stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for FormValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.values.iter()).finish()
    }
}
