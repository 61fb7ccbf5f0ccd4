//! shelf-ui - Dioxus components for URL-addressable list views
//!
//! Pure view components plus the `use_list` hook that wires a
//! [`shelf_core::ListSession`] to the route's query parameters.

pub mod components;
pub mod hooks;
pub mod storage;
pub mod stores;

pub use components::*;
pub use hooks::*;
