//! shelf-web - admin console list views
//!
//! Every list is addressed by its URL: the query string of each route is
//! the list's state, so views can be bookmarked, shared and navigated with
//! back/forward.

pub mod api;
pub mod pages;
pub mod rows;

use dioxus::prelude::*;
use pages::{AppLayout, Collections, Customers, Orders, Products};
use shelf_common::ListParams;
use shelf_core::ShelfConfig;
use tracing::error;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[redirect("/", || Route::Orders { query: ListParams::new() })]
    #[route("/orders?:..query")]
    Orders { query: ListParams },
    #[route("/products?:..query")]
    Products { query: ListParams },
    #[route("/customers?:..query")]
    Customers { query: ListParams },
    #[route("/collections?:..query")]
    Collections { query: ListParams },
}

/// Embedded console configuration. Falls back to the defaults when the
/// file does not load.
pub fn load_config() -> ShelfConfig {
    ShelfConfig::from_yaml(include_str!("../shelf.yaml")).unwrap_or_else(|e| {
        error!("Invalid shelf.yaml, using defaults: {e}");
        ShelfConfig::default()
    })
}

#[component]
pub fn App() -> Element {
    use_context_provider(load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
