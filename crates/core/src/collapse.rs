//! Eager union of field sets.

use crate::field_map::FieldMap;
use crate::field_set::FieldSet;

/// Flatten `sets` into one map; later sets override earlier ones.
///
/// Every set is enumerated in full. The result is a concrete snapshot, not a
/// view over the inputs.
pub fn collapse_field_sets(sets: &[&dyn FieldSet]) -> FieldMap {
    let mut collapsed = FieldMap::new();
    for set in sets {
        collapsed.extend(set.fields().map(|(name, value)| (name, value.clone())));
    }
    collapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_sets_override_earlier_ones() {
        let fields = collapse_field_sets(&[
            &FieldMap::new().with("a", 1).with("b", 1),
            &FieldMap::new().with("b", 2).with("c", 2),
            &FieldMap::new().with("c", 3).with("d", 3),
        ]);

        let expected = FieldMap::new()
            .with("a", 1)
            .with("b", 2)
            .with("c", 3)
            .with("d", 3);
        assert_eq!(fields, expected);
    }

    #[test]
    fn no_sets_collapse_to_empty_map() {
        assert!(collapse_field_sets(&[]).is_empty());
    }
}
