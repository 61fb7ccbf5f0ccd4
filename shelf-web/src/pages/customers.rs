use dioxus::prelude::*;
use shelf_common::ListParams;
use shelf_core::entities::CUSTOMERS;
use shelf_core::ShelfConfig;
use shelf_ui::{use_list, Column, ListPanel};

use crate::api;
use crate::rows::{format_timestamp, CustomerRow};
use crate::Route;

fn columns() -> Vec<Column<CustomerRow>> {
    vec![
        Column::new("name", "Name", |c: &CustomerRow| {
            rsx! { "{c.first_name} {c.last_name}" }
        })
        .sortable("lastName"),
        Column::new("email", "Email", |c: &CustomerRow| rsx! { "{c.email_address}" })
            .sortable("emailAddress"),
        Column::new("created", "Customer since", |c: &CustomerRow| {
            rsx! { "{format_timestamp(&c.created_at)}" }
        })
        .sortable("createdAt"),
    ]
}

#[component]
pub fn Customers(query: ListParams) -> Element {
    let config = use_context::<ShelfConfig>();
    let on_navigate = use_callback(|query: ListParams| {
        navigator().push(Route::Customers { query });
    });
    let handle = use_list(
        &CUSTOMERS,
        &config.list,
        || api::customers(&config.api_url),
        None,
        query,
        on_navigate,
    );
    let columns = use_hook(columns);

    rsx! {
        ListPanel { handle, columns }
    }
}
