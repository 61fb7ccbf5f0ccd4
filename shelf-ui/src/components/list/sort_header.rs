use dioxus::prelude::*;
use shelf_common::SortDirection;

use crate::components::icons::{ArrowDownIcon, ArrowUpDownIcon, ArrowUpIcon};

/// Column header. Sortable headers cycle ascending, descending, unsorted.
#[component]
pub fn SortHeader(
    label: String,
    /// `None` for columns the entity cannot sort by
    sort_key: Option<String>,
    /// Direction if this column is the sorted one
    active: Option<SortDirection>,
    on_sort: EventHandler<String>,
) -> Element {
    let Some(key) = sort_key else {
        return rsx! {
            th { class: "px-3 py-2 text-left text-xs font-medium uppercase tracking-wide text-gray-400",
                "{label}"
            }
        };
    };

    let icon = match active {
        Some(SortDirection::Ascending) => rsx! {
            ArrowUpIcon { class: "w-3.5 h-3.5 text-indigo-400" }
        },
        Some(SortDirection::Descending) => rsx! {
            ArrowDownIcon { class: "w-3.5 h-3.5 text-indigo-400" }
        },
        None => rsx! {
            ArrowUpDownIcon { class: "w-3.5 h-3.5 opacity-40" }
        },
    };
    let aria_sort = match active {
        Some(SortDirection::Ascending) => "ascending",
        Some(SortDirection::Descending) => "descending",
        None => "none",
    };

    rsx! {
        th {
            class: "px-3 py-2 text-left text-xs font-medium uppercase tracking-wide text-gray-400",
            aria_sort,
            button {
                r#type: "button",
                class: "inline-flex items-center gap-1 hover:text-white",
                onclick: move |_| on_sort.call(key.clone()),
                "{label}"
                {icon}
            }
        }
    }
}
