//! # logfields-core
//!
//! Field-set composition for structured logging.
//!
//! This crate has no workspace dependencies, making it safe to import
//! anywhere. It provides:
//!
//! - [`FieldSet`] / [`IndexableFieldSet`] - capability contracts for a
//!   collection of named fields, with optional by-name lookup
//! - [`FieldMap`] - the reference map-backed field set
//! - [`lookup_field_by_name`] - lookup that prefers the indexed path
//! - [`FieldSetList`] - layered field sets where the last layer wins
//! - [`collapse_field_sets`] - eager union of field sets
//! - [`Target`] / [`event`] - the single write path
//!
//! # Example
//!
//! ```
//! use logfields_core::{FieldMap, FieldSet, Target, collapse_field_sets, event};
//! use std::cell::RefCell;
//!
//! #[derive(Default)]
//! struct Lines(RefCell<Vec<String>>);
//!
//! impl Target for Lines {
//!     fn record(&self, message: &str, fields: &dyn FieldSet) {
//!         let fields = collapse_field_sets(&[fields]);
//!         self.0.borrow_mut().push(format!("{message} {}", fields.into_json()));
//!     }
//! }
//!
//! let lines = Lines::default();
//! let request = FieldMap::new().with("requestId", "req_1").with("attempt", 1);
//! let retry = FieldMap::new().with("attempt", 2);
//!
//! event(Some(&lines), "retrying", &[&request, &retry]);
//! assert_eq!(
//!     lines.0.borrow().as_slice(),
//!     [r#"retrying {"attempt":2,"requestId":"req_1"}"#]
//! );
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod collapse;
pub mod field_map;
pub mod field_set;
pub mod list;
pub mod lookup;
pub mod target;

pub use collapse::collapse_field_sets;
pub use field_map::FieldMap;
pub use field_set::{FieldIter, FieldSet, FieldValue, IndexableFieldSet};
pub use list::FieldSetList;
pub use lookup::lookup_field_by_name;
pub use target::{Target, event};

/// Returns the core crate version.
#[must_use]
pub const fn core_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
