use dioxus::prelude::*;
use shelf_common::ListParams;
use shelf_core::entities::COLLECTIONS;
use shelf_core::ShelfConfig;
use shelf_ui::{use_list, Column, ListPanel};

use crate::api;
use crate::rows::CollectionRow;
use crate::Route;

fn columns() -> Vec<Column<CollectionRow>> {
    vec![
        Column::new("name", "Name", |c: &CollectionRow| rsx! { "{c.name}" }).sortable("name"),
        Column::new("slug", "Slug", |c: &CollectionRow| {
            rsx! { span { class: "font-mono text-gray-400", "{c.slug}" } }
        })
        .sortable("slug"),
        Column::new("visibility", "Visibility", |c: &CollectionRow| {
            let label = if c.is_private { "Private" } else { "Public" };
            rsx! { "{label}" }
        }),
        Column::new("position", "Position", |c: &CollectionRow| rsx! { "{c.position}" })
            .sortable("position"),
    ]
}

#[component]
pub fn Collections(query: ListParams) -> Element {
    let config = use_context::<ShelfConfig>();
    let on_navigate = use_callback(|query: ListParams| {
        navigator().push(Route::Collections { query });
    });
    let handle = use_list(
        &COLLECTIONS,
        &config.list,
        || api::collections(&config.api_url),
        None,
        query,
        on_navigate,
    );
    let columns = use_hook(columns);

    rsx! {
        ListPanel { handle, columns }
    }
}
