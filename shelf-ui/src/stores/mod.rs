//! Store types for list view state
//!
//! Each store derives `Store` for fine-grained reactivity via lensing.

pub mod list;

pub use list::*;
