//! Field-set capability contracts.
//!
//! A [`FieldSet`] is anything that can enumerate `(name, value)` pairs.
//! [`IndexableFieldSet`] is an optional extension for direct by-name lookup;
//! callers discover it through [`FieldSet::as_indexable`] rather than by
//! knowing the concrete type.

use std::ops::ControlFlow;

/// Value payload attached to a field.
///
/// Payloads are JSON-shaped: any value with a JSON representation fits, and
/// anything else (handles, closures, binary blobs) must be converted by the
/// caller first, e.g. via [`serde_json::to_value`] or a string rendering.
///
/// ```
/// use logfields_core::FieldMap;
/// use serde_json::json;
///
/// let elapsed = serde_json::to_value(std::time::Duration::from_millis(1500))?;
/// let fields = FieldMap::new().with("elapsed", elapsed);
///
/// assert_eq!(
///     fields.get("elapsed"),
///     Some(&json!({ "secs": 1, "nanos": 500_000_000 }))
/// );
/// # Ok::<(), serde_json::Error>(())
/// ```
pub type FieldValue = serde_json::Value;

/// Boxed lazy iterator over the fields of a set.
///
/// Dropping the iterator is how a caller stops enumeration early.
pub type FieldIter<'a> = Box<dyn Iterator<Item = (&'a str, &'a FieldValue)> + 'a>;

/// Minimal contract for a collection of structured log details.
///
/// Values are [`FieldValue`]s, so a field's payload must be
/// JSON-representable. Enumeration order is unspecified. A single set may in
/// principle yield the same name twice; the contract does not deduplicate
/// within one set.
pub trait FieldSet {
    /// Lazily enumerate every field in the set.
    fn fields(&self) -> FieldIter<'_>;

    /// Capability query for the by-name lookup extension.
    ///
    /// Implementations that can answer lookups without a scan return
    /// `Some(self)`.
    fn as_indexable(&self) -> Option<&dyn IndexableFieldSet> {
        None
    }

    /// Visit fields until `visit` breaks.
    ///
    /// Once `visit` returns [`ControlFlow::Break`] it is never invoked again
    /// and `Break` is returned.
    fn for_each_field(
        &self,
        visit: &mut dyn FnMut(&str, &FieldValue) -> ControlFlow<()>,
    ) -> ControlFlow<()> {
        for (name, value) in self.fields() {
            if visit(name, value).is_break() {
                return ControlFlow::Break(());
            }
        }
        ControlFlow::Continue(())
    }
}

/// Extension contract allowing direct lookup of a field by name.
///
/// Results must agree with what [`FieldSet::fields`] reports for the same
/// name.
pub trait IndexableFieldSet: FieldSet {
    /// Return the value stored under `name`, if any.
    fn lookup_field_by_name(&self, name: &str) -> Option<&FieldValue>;
}
