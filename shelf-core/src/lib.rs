//! shelf-core - list orchestration for the admin console
//!
//! Entity catalogs, configuration, the fetch orchestrator that turns a
//! [`shelf_common::QueryState`] into requests and snapshots, search debouncing
//! and persisted column visibility. No UI and no transport live here; the
//! fetcher is a trait implemented by the app.

pub mod columns;
pub mod config;
pub mod debounce;
pub mod entities;
pub mod error;
pub mod list;

pub use columns::{ColumnVisibility, KeyValueStore, MemoryStore};
pub use config::{ListConfig, ShelfConfig};
pub use debounce::Debouncer;
pub use error::{ConfigError, FetchError, StorageError};
pub use list::{
    EmptyState, FetchTicket, ListController, ListFetcher, ListRequest, ListSession, ListSnapshot,
    ListView, Outcome,
};
