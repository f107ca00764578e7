//! Name-based lookup over any field set.

use crate::field_set::{FieldSet, FieldValue};

/// Look up `name` in `fields`, using the fastest path the set supports.
///
/// An absent set is treated as empty. Sets exposing [`IndexableFieldSet`]
/// answer directly; anything else is scanned and the scan stops at the
/// first match.
///
/// [`IndexableFieldSet`]: crate::IndexableFieldSet
pub fn lookup_field_by_name<'a>(
    fields: Option<&'a dyn FieldSet>,
    name: &str,
) -> Option<&'a FieldValue> {
    let fields = fields?;
    if let Some(indexable) = fields.as_indexable() {
        return indexable.lookup_field_by_name(name);
    }

    fields
        .fields()
        .find_map(|(candidate, value)| (candidate == name).then_some(value))
}
