//! # logfields-testkit
//!
//! Recording target and field-set fixtures.
//! This crate depends on `core` only.

pub mod fixtures;
pub mod in_memory;

pub use fixtures::{IndexableOnlyFieldSet, IterableOnlyFieldSet};
pub use in_memory::{RecordedEvent, RecordingTarget};

/// Returns the testkit crate version.
#[must_use]
pub const fn testkit_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
