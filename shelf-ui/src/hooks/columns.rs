use dioxus::prelude::*;
use shelf_common::EntityCatalog;
use shelf_core::ColumnVisibility;
use tracing::warn;

use crate::storage::LocalStorage;

/// Column visibility for `catalog`, loaded from and saved to localStorage
pub fn use_column_visibility(
    catalog: &'static EntityCatalog,
) -> (Signal<ColumnVisibility>, Callback<String>) {
    let mut visibility = use_signal(|| ColumnVisibility::load(&LocalStorage, catalog));
    let toggle = use_callback(move |column: String| {
        let next = visibility.peek().toggled(&column);
        if let Err(e) = next.save(&LocalStorage, catalog) {
            warn!("Failed to save column visibility for {}: {e}", catalog.entity);
        }
        visibility.set(next);
    });
    (visibility, toggle)
}
