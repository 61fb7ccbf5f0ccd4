use dioxus::prelude::*;
use shelf_common::ListParams;

use crate::Route;

#[component]
pub fn AppLayout() -> Element {
    let current_route = use_route::<Route>();

    // links start from a fresh list state; the current query is not carried over
    let nav_items = [
        (Route::Orders { query: ListParams::new() }, "Orders"),
        (Route::Products { query: ListParams::new() }, "Products"),
        (Route::Customers { query: ListParams::new() }, "Customers"),
        (Route::Collections { query: ListParams::new() }, "Collections"),
    ];

    rsx! {
        div { class: "flex min-h-screen",
            nav { class: "w-52 flex-shrink-0 border-r border-gray-800 px-3 py-6 flex flex-col gap-1",
                p { class: "px-2 mb-4 text-sm font-semibold uppercase tracking-wider text-gray-500",
                    "Catalog & sales"
                }
                for (route, label) in nav_items {
                    Link {
                        key: "{label}",
                        class: nav_class(same_page(&route, &current_route)),
                        to: route,
                        "{label}"
                    }
                }
            }
            main { class: "flex-1 min-w-0 px-8 py-6", Outlet::<Route> {} }
        }
    }
}

/// Same list view, whatever its query
fn same_page(a: &Route, b: &Route) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b)
}

fn nav_class(active: bool) -> &'static str {
    if active {
        "px-2 py-1.5 rounded bg-gray-800 text-white text-sm"
    } else {
        "px-2 py-1.5 rounded text-gray-400 hover:text-white text-sm"
    }
}
