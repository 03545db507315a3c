//! Path-addressed operations on field trees.
//!
//! Every operation takes the current tree by reference and returns a new one;
//! the input is never modified. The result is a structural deep copy of the
//! input with the addressed change applied, so the old and new trees never
//! share mutable state and an undo stack can keep any number of versions.
//!
//! Operations that cannot apply (unknown path, full array, protected item) are
//! silent no-ops: they return an unchanged copy and log at `debug` level.
//!
//! # Core Operations
//!
//! - [`update_field_value`] - set the value at a path
//! - [`add_item_to_array`] / [`remove_item_from_array`] - grow or shrink arrays
//! - [`find_field_by_path`] / [`filter_fields`] - lookup and search
//! - [`outline`] - expansion state helpers for tree navigation

pub mod ops;
pub mod outline;
pub mod search;

pub use ops::{
    add_item_to_array, create_array_item, default_value_for_type, remove_item_from_array,
    reset_field_values, update_field_value,
};
pub use search::{filter_fields, find_field_by_path};
