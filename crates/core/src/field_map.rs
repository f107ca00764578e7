//! Map-backed field set.

use crate::field_set::{FieldIter, FieldSet, FieldValue, IndexableFieldSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Field set backed by a name to value map.
///
/// Implements both [`FieldSet`] and [`IndexableFieldSet`]; lookups are a
/// single map retrieval. Enumeration follows key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap(BTreeMap<Box<str>, FieldValue>);

impl FieldMap {
    /// Create an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder form of [`Self::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<Box<str>>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert a field, returning the previous value for that name.
    pub fn insert(
        &mut self,
        name: impl Into<Box<str>>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.0.insert(name.into(), value.into())
    }

    /// Borrow the value stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    /// Returns true when a field named `name` exists.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Remove a field, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.0.remove(name)
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when the map holds no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(name, value)| (&**name, value))
    }

    /// Convert into a JSON object value.
    #[must_use]
    pub fn into_json(self) -> FieldValue {
        FieldValue::Object(
            self.0
                .into_iter()
                .map(|(name, value)| (name.into_string(), value))
                .collect(),
        )
    }
}

impl FieldSet for FieldMap {
    fn fields(&self) -> FieldIter<'_> {
        Box::new(self.iter())
    }

    fn as_indexable(&self) -> Option<&dyn IndexableFieldSet> {
        Some(self)
    }
}

impl IndexableFieldSet for FieldMap {
    fn lookup_field_by_name(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }
}

impl<K, V> FromIterator<(K, V)> for FieldMap
where
    K: Into<Box<str>>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for FieldMap
where
    K: Into<Box<str>>,
    V: Into<FieldValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl IntoIterator for FieldMap {
    type Item = (Box<str>, FieldValue);
    type IntoIter = btree_map::IntoIter<Box<str>, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<BTreeMap<Box<str>, FieldValue>> for FieldMap {
    fn from(map: BTreeMap<Box<str>, FieldValue>) -> Self {
        Self(map)
    }
}

impl From<serde_json::Map<String, FieldValue>> for FieldMap {
    fn from(map: serde_json::Map<String, FieldValue>) -> Self {
        map.into_iter().collect()
    }
}
