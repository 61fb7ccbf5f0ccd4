use dioxus::prelude::*;
use shelf_common::ListParams;
use shelf_core::entities::ORDERS;
use shelf_core::ShelfConfig;
use shelf_ui::{use_list, Column, ListPanel};

use crate::api;
use crate::rows::{format_timestamp, OrderRow};
use crate::Route;

fn columns() -> Vec<Column<OrderRow>> {
    vec![
        Column::new("code", "Code", |o: &OrderRow| {
            rsx! { span { class: "font-mono", "{o.code}" } }
        })
        .sortable("code"),
        Column::new("customer", "Customer", |o: &OrderRow| {
            rsx! { "{o.customer_name()}" }
        }),
        Column::new("state", "State", |o: &OrderRow| {
            rsx! {
                span { class: "rounded bg-gray-800 px-2 py-0.5 text-xs", "{o.state}" }
            }
        })
        .sortable("state"),
        Column::new("total", "Total", |o: &OrderRow| {
            rsx! { "{o.total()}" }
        })
        .sortable("totalWithTax"),
        Column::new("placed", "Placed at", |o: &OrderRow| {
            let placed = o.order_placed_at.as_deref().map(format_timestamp);
            rsx! { "{placed.unwrap_or_default()}" }
        })
        .sortable("orderPlacedAt"),
    ]
}

#[component]
pub fn Orders(query: ListParams) -> Element {
    let config = use_context::<ShelfConfig>();
    let on_navigate = use_callback(|query: ListParams| {
        navigator().push(Route::Orders { query });
    });
    let handle = use_list(
        &ORDERS,
        &config.list,
        || api::orders(&config.api_url),
        None,
        query,
        on_navigate,
    );
    let columns = use_hook(columns);

    rsx! {
        ListPanel { handle, columns }
    }
}
