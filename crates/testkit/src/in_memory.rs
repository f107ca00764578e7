//! In-memory target that records what it receives.

use logfields_core::{FieldMap, FieldSet, Target, collapse_field_sets};
use std::sync::Mutex;

/// One event captured by [`RecordingTarget`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEvent {
    /// Message passed to the target.
    pub message: String,
    /// The event's fields, collapsed at record time.
    pub fields: FieldMap,
}

/// A target that keeps every event it records.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    events: Mutex<Vec<RecordedEvent>>,
}

impl RecordingTarget {
    /// Snapshot of the recorded events in arrival order.
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.lock().expect("recording target lock").clone()
    }

    /// Drain the recorded events.
    pub fn take(&self) -> Vec<RecordedEvent> {
        std::mem::take(&mut *self.events.lock().expect("recording target lock"))
    }
}

impl Target for RecordingTarget {
    fn record(&self, message: &str, fields: &dyn FieldSet) {
        let event = RecordedEvent {
            message: message.to_string(),
            fields: collapse_field_sets(&[fields]),
        };
        self.events
            .lock()
            .expect("recording target lock")
            .push(event);
    }
}
