//! Precedence-ordered field set list.

use crate::field_set::{FieldIter, FieldSet, FieldValue, IndexableFieldSet};
use crate::lookup::lookup_field_by_name;
use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

/// Field sets stored from least significant to most significant.
///
/// When several layers define the same name, only the value from the most
/// significant (last) layer is observable through enumeration and lookup.
/// The list is itself a field set, so lists nest.
#[derive(Clone, Default)]
pub struct FieldSetList<'a> {
    layers: Cow<'a, [&'a dyn FieldSet]>,
}

impl<'a> FieldSetList<'a> {
    /// Create a list that owns its layer references.
    #[must_use]
    pub fn new(layers: Vec<&'a dyn FieldSet>) -> Self {
        Self {
            layers: Cow::Owned(layers),
        }
    }

    /// Wrap an existing slice of layers without copying it.
    #[must_use]
    pub const fn borrowed(layers: &'a [&'a dyn FieldSet]) -> Self {
        Self {
            layers: Cow::Borrowed(layers),
        }
    }

    /// Build a list from possibly-absent layers; absent layers are dropped.
    pub fn from_optional<I>(layers: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a dyn FieldSet>>,
    {
        Self::new(layers.into_iter().flatten().collect())
    }

    /// Append a layer that overrides every existing one.
    pub fn push(&mut self, layer: &'a dyn FieldSet) {
        self.layers.to_mut().push(layer);
    }

    /// Layers in storage order (least significant first).
    #[must_use]
    pub fn layers(&self) -> &[&'a dyn FieldSet] {
        &self.layers
    }

    /// Number of layers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Returns true when the list has no layers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl<'a> FromIterator<&'a dyn FieldSet> for FieldSetList<'a> {
    fn from_iter<I: IntoIterator<Item = &'a dyn FieldSet>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Debug for FieldSetList<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FieldSetList")
            .field("layers", &self.layers.len())
            .finish()
    }
}

impl FieldSet for FieldSetList<'_> {
    fn fields(&self) -> FieldIter<'_> {
        let mut emitted = HashSet::new();
        Box::new(
            self.layers
                .iter()
                .rev()
                .flat_map(|layer| layer.fields())
                .filter(move |(name, _)| emitted.insert(*name)),
        )
    }

    fn as_indexable(&self) -> Option<&dyn IndexableFieldSet> {
        Some(self)
    }
}

impl IndexableFieldSet for FieldSetList<'_> {
    fn lookup_field_by_name(&self, name: &str) -> Option<&FieldValue> {
        self.layers
            .iter()
            .rev()
            .find_map(|layer| lookup_field_by_name(Some(*layer), name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collapse::collapse_field_sets;
    use crate::field_map::FieldMap;
    use proptest::prelude::*;
    use serde_json::json;
    use std::ops::ControlFlow;

    fn layers_abc() -> [FieldMap; 3] {
        [
            FieldMap::new().with("a", 1).with("b", 1),
            FieldMap::new().with("b", 2).with("c", 2),
            FieldMap::new().with("c", 3).with("d", 3),
        ]
    }

    fn gather(list: &FieldSetList<'_>) -> FieldMap {
        let mut fields = FieldMap::new();
        for (name, value) in list.fields() {
            let previous = fields.insert(name, value.clone());
            assert!(previous.is_none(), "{name} emitted twice");
        }
        fields
    }

    #[test]
    fn empty_list_is_an_empty_field_set() {
        let list = FieldSetList::default();

        assert!(list.is_empty());
        assert_eq!(list.fields().count(), 0);
        assert_eq!(list.lookup_field_by_name("fieldName"), None);
    }

    #[test]
    fn single_layer_passes_through() {
        let layer = FieldMap::new().with("a", 1).with("b", 1);
        let list = FieldSetList::new(vec![&layer]);

        assert_eq!(gather(&list), layer);
    }

    #[test]
    fn most_significant_layer_wins_enumeration() {
        let [a, b, c] = layers_abc();
        let list = FieldSetList::new(vec![&a, &b, &c]);

        let expected = FieldMap::new()
            .with("a", 1)
            .with("b", 2)
            .with("c", 3)
            .with("d", 3);
        assert_eq!(gather(&list), expected);
    }

    #[test]
    fn most_significant_layer_wins_lookup() {
        let low = FieldMap::new().with("fieldName", 41);
        let high = FieldMap::new().with("fieldName", 42);
        let list = FieldSetList::new(vec![&low, &high]);

        assert_eq!(list.lookup_field_by_name("fieldName"), Some(&json!(42)));
    }

    #[test]
    fn lookup_falls_through_to_lower_layers() {
        let low = FieldMap::new().with("fieldName", 42);
        let high = FieldMap::new();
        let list = FieldSetList::new(vec![&low, &high]);

        assert_eq!(list.lookup_field_by_name("fieldName"), Some(&json!(42)));
        assert_eq!(list.lookup_field_by_name("missing"), None);
    }

    #[test]
    fn repeated_layers_emit_each_name_once() {
        let layer = FieldMap::new().with("x", 1).with("y", 2);
        let list = FieldSetList::new(vec![&layer, &layer, &layer]);

        assert_eq!(list.fields().count(), 2);
    }

    #[test]
    fn stop_on_first_field_spans_all_layers() {
        let [a, b, c] = layers_abc();
        let list = FieldSetList::new(vec![&a, &b, &c]);
        let mut visits = 0;

        let flow = list.for_each_field(&mut |_, _| {
            visits += 1;
            ControlFlow::Break(())
        });

        assert!(flow.is_break());
        assert_eq!(visits, 1);
    }

    #[test]
    fn nested_lists_keep_precedence() {
        let [a, b, c] = layers_abc();
        let inner = FieldSetList::new(vec![&a, &b]);
        let outer = FieldSetList::new(vec![&inner, &c]);

        assert_eq!(outer.lookup_field_by_name("b"), Some(&json!(2)));
        assert_eq!(outer.lookup_field_by_name("c"), Some(&json!(3)));
        assert_eq!(gather(&outer), collapse_field_sets(&[&a, &b, &c]));
    }

    #[test]
    fn from_optional_skips_absent_layers() {
        let layer = FieldMap::new().with("a", 1);
        let top = FieldMap::new().with("a", 2);
        let present: Option<&dyn FieldSet> = Some(&layer);
        let mut list = FieldSetList::from_optional([None, present, None]);
        assert_eq!(list.len(), 1);

        list.push(&top);
        assert_eq!(list.lookup_field_by_name("a"), Some(&json!(2)));

        let stored: Vec<_> = list
            .layers()
            .iter()
            .map(|layer| lookup_field_by_name(Some(*layer), "a"))
            .collect();
        assert_eq!(stored, vec![Some(&json!(1)), Some(&json!(2))]);
    }

    fn layer_strategy() -> impl Strategy<Value = Vec<Vec<(String, i64)>>> {
        prop::collection::vec(
            prop::collection::vec(("[a-e]", any::<i64>()), 0..6),
            0..5,
        )
    }

    proptest! {
        #[test]
        fn enumeration_matches_collapse(raw in layer_strategy()) {
            let layers: Vec<FieldMap> = raw.into_iter().map(FieldMap::from_iter).collect();
            let mut refs: Vec<&dyn FieldSet> = Vec::with_capacity(layers.len());
            for layer in &layers {
                refs.push(layer);
            }
            let list = FieldSetList::new(refs.clone());

            let mut seen = FieldMap::new();
            for (name, value) in list.fields() {
                prop_assert!(seen.insert(name, value.clone()).is_none());
            }
            let collapsed = collapse_field_sets(&refs);
            prop_assert_eq!(&seen, &collapsed);

            for (name, value) in collapsed.iter() {
                prop_assert_eq!(list.lookup_field_by_name(name), Some(value));
            }
        }
    }
}
