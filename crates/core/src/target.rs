//! Recording targets and event emission.

use crate::field_set::FieldSet;
use crate::list::FieldSetList;

/// Minimal contract for a log target.
///
/// The target receives the message and the merged fields for one event. It
/// must not retain `fields` beyond the call.
pub trait Target {
    /// Record one event.
    fn record(&self, message: &str, fields: &dyn FieldSet);
}

/// Record an event to `target` with `message` and `fields`.
///
/// `fields` are ordered least significant first. An absent target discards
/// the event.
pub fn event(target: Option<&dyn Target>, message: &str, fields: &[&dyn FieldSet]) {
    if let Some(target) = target {
        target.record(message, &FieldSetList::borrowed(fields));
    }
}
