use dioxus::prelude::*;
use shelf_common::pagination::{self, PageLink};

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon};
use crate::components::ChromelessButton;

/// Page navigation and page-size picker under a list
#[component]
pub fn Pager(
    /// 1-based page from the URL, possibly past `total`
    current: u32,
    total: u32,
    total_items: u64,
    per_page: u32,
    page_sizes: Vec<u32>,
    on_page: EventHandler<u32>,
    on_per_page: EventHandler<u32>,
) -> Element {
    let pager = pagination::Pager::new(current, total);
    let previous = pager.previous();
    let next = pager.next();
    let links: Vec<Element> = pager
        .links()
        .into_iter()
        .enumerate()
        .map(|(index, link)| match link {
            PageLink::Page(page) => rsx! {
                ChromelessButton {
                    key: "{index}",
                    class: Some(page_class(page == pager.current).to_string()),
                    aria_pressed: Some(page == pager.current),
                    onclick: move |_| on_page.call(page),
                    "{page}"
                }
            },
            PageLink::Ellipsis => rsx! {
                span { key: "{index}", class: "px-1 text-gray-600", "..." }
            },
        })
        .collect();
    let nav_class = "p-1.5 rounded text-gray-400 hover:text-white hover:bg-gray-700/50 disabled:opacity-30";

    rsx! {
        div { class: "flex items-center justify-between gap-4 px-3 py-2 text-sm text-gray-400",
            span { "{total_items} items" }
            nav { class: "flex items-center gap-1", aria_label: "Pagination",
                ChromelessButton {
                    class: Some(nav_class.to_string()),
                    aria_label: Some("Previous page".to_string()),
                    disabled: previous.is_none(),
                    onclick: move |_| {
                        if let Some(page) = previous {
                            on_page.call(page);
                        }
                    },
                    ChevronLeftIcon {}
                }
                {links.into_iter()}
                ChromelessButton {
                    class: Some(nav_class.to_string()),
                    aria_label: Some("Next page".to_string()),
                    disabled: next.is_none(),
                    onclick: move |_| {
                        if let Some(page) = next {
                            on_page.call(page);
                        }
                    },
                    ChevronRightIcon {}
                }
            }
            label { class: "flex items-center gap-2",
                "Per page"
                select {
                    class: "bg-gray-800 rounded px-2 py-1 text-gray-200",
                    onchange: move |e| {
                        if let Ok(size) = e.value().parse::<u32>() {
                            on_per_page.call(size);
                        }
                    },
                    for size in page_sizes {
                        option {
                            key: "{size}",
                            value: "{size}",
                            selected: size == per_page,
                            "{size}"
                        }
                    }
                }
            }
        }
    }
}

fn page_class(is_current: bool) -> &'static str {
    if is_current {
        "min-w-8 px-2 py-1 rounded bg-indigo-600 text-white"
    } else {
        "min-w-8 px-2 py-1 rounded text-gray-400 hover:text-white hover:bg-gray-700/50"
    }
}
