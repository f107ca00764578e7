//! Field-set fixtures that expose only one capability.

use logfields_core::{FieldIter, FieldMap, FieldSet, FieldValue, IndexableFieldSet};
use std::cell::Cell;

/// A field set that can only be enumerated.
///
/// Counts how many fields have been pulled from its iterators, so tests can
/// assert on early termination.
#[derive(Debug, Default)]
pub struct IterableOnlyFieldSet {
    entries: Vec<(Box<str>, FieldValue)>,
    pulled: Cell<usize>,
}

impl IterableOnlyFieldSet {
    /// Build from `(name, value)` pairs, kept in the given order.
    pub fn new<K, V, I>(entries: I) -> Self
    where
        K: Into<Box<str>>,
        V: Into<FieldValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
            pulled: Cell::new(0),
        }
    }

    /// Number of fields yielded so far.
    pub fn pulled(&self) -> usize {
        self.pulled.get()
    }
}

impl FieldSet for IterableOnlyFieldSet {
    fn fields(&self) -> FieldIter<'_> {
        Box::new(self.entries.iter().map(|(name, value)| {
            self.pulled.set(self.pulled.get() + 1);
            (&**name, value)
        }))
    }
}

/// A field set whose enumeration panics; only direct lookup works.
#[derive(Debug, Default)]
pub struct IndexableOnlyFieldSet(FieldMap);

impl IndexableOnlyFieldSet {
    /// Wrap a map.
    pub fn new(fields: FieldMap) -> Self {
        Self(fields)
    }
}

impl FieldSet for IndexableOnlyFieldSet {
    fn fields(&self) -> FieldIter<'_> {
        panic!("IndexableOnlyFieldSet does not support enumeration")
    }

    fn as_indexable(&self) -> Option<&dyn IndexableFieldSet> {
        Some(self)
    }
}

impl IndexableFieldSet for IndexableOnlyFieldSet {
    fn lookup_field_by_name(&self, name: &str) -> Option<&FieldValue> {
        self.0.lookup_field_by_name(name)
    }
}
