use dioxus::prelude::*;
use shelf_common::ListParams;
use shelf_core::entities::PRODUCTS;
use shelf_core::ShelfConfig;
use shelf_ui::{use_list, Column, ListPanel};

use crate::api;
use crate::rows::{format_timestamp, ProductRow};
use crate::Route;

fn columns() -> Vec<Column<ProductRow>> {
    vec![
        Column::new("name", "Name", |p: &ProductRow| rsx! { "{p.name}" }).sortable("name"),
        Column::new("slug", "Slug", |p: &ProductRow| {
            rsx! { span { class: "font-mono text-gray-400", "{p.slug}" } }
        })
        .sortable("slug"),
        Column::new("enabled", "Enabled", |p: &ProductRow| {
            let label = if p.enabled { "Enabled" } else { "Disabled" };
            rsx! { "{label}" }
        }),
        Column::new("updated", "Updated at", |p: &ProductRow| {
            rsx! { "{format_timestamp(&p.updated_at)}" }
        })
        .sortable("updatedAt"),
    ]
}

#[component]
pub fn Products(query: ListParams) -> Element {
    let config = use_context::<ShelfConfig>();
    let on_navigate = use_callback(|query: ListParams| {
        navigator().push(Route::Products { query });
    });
    let handle = use_list(
        &PRODUCTS,
        &config.list,
        || api::products(&config.api_url),
        None,
        query,
        on_navigate,
    );
    let columns = use_hook(columns);

    rsx! {
        ListPanel { handle, columns }
    }
}
