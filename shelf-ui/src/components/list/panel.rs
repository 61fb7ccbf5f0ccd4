//! Full list view: toolbar, table, pager and fetch notices

use dioxus::prelude::*;
use shelf_common::{FilterExpression, FilterField};
use tracing::warn;

use super::{
    ColumnMenu, Column, FilterChips, FilterMenu, ListEmptyState, ListTable, Pager, SearchBox,
};
use crate::components::icons::FilterIcon;
use crate::components::{Button, ButtonSize, ButtonVariant, FetchErrorToast};
use crate::hooks::{use_column_visibility, ListHandle};
use crate::stores::list::ListUiStateStoreExt;

#[component]
pub fn ListPanel<T: Clone + PartialEq + 'static>(
    handle: ListHandle<T>,
    columns: Vec<Column<T>>,
    #[props(default)] title: Option<String>,
) -> Element {
    let state = handle.state;
    let catalog = handle.catalog;
    let query = state.query().read().clone();
    let total_items = *state.total_items().read();
    let total_pages = *state.total_pages().read();
    let loading = *state.loading().read();
    let notice = state.notice().read().clone();
    let placeholder_rows = *state.placeholder_rows().read();
    let empty_state = *state.empty_state().read();
    let page_beyond = *state.page_beyond().read();
    let page_sizes = state.page_sizes().read().clone();
    let debounce_ms = *state.search_debounce_ms().read();
    let items = handle.items.read().clone();

    let (visibility, toggle_column) = use_column_visibility(catalog);
    let column_labels: Vec<(&'static str, &'static str)> =
        columns.iter().map(|c| (c.key, c.label)).collect();

    let title = title.unwrap_or_else(|| catalog.label.to_string());
    let search = query.search().unwrap_or_default().to_string();
    let advanced = query.filter().cloned().zip(query.operator());
    let addable: Vec<FilterField> = match &advanced {
        Some((filter, _)) => catalog.available_fields(filter).copied().collect(),
        None => Vec::new(),
    };

    let criteria = match advanced {
        None => rsx! {
            SearchBox {
                value: search,
                debounce_ms,
                on_search: move |text: String| handle.set_search(&text),
            }
            Button {
                variant: ButtonVariant::Ghost,
                size: ButtonSize::Small,
                onclick: move |_| handle.to_advanced(),
                FilterIcon { class: "w-3.5 h-3.5" }
                "Filters"
            }
        },
        Some((filter, operator)) => rsx! {
            FilterChips {
                catalog,
                filter,
                operator,
                on_remove: move |name: String| handle.remove_filter(&name),
                on_toggle_operator: move |_| handle.toggle_operator(),
            }
            FilterMenu {
                fields: addable,
                on_add: move |(name, expression): (String, FilterExpression)| {
                    if let Err(e) = handle.set_filter(&name, expression) {
                        warn!("Rejected filter on {}: {e}", catalog.entity);
                    }
                },
            }
            Button {
                variant: ButtonVariant::Ghost,
                size: ButtonSize::Small,
                onclick: move |_| handle.to_basic(),
                "Basic search"
            }
        },
    };

    rsx! {
        section { class: "flex flex-col gap-3",
            header { class: "flex items-center justify-between",
                h1 { class: "text-2xl font-bold text-white", "{title}" }
                if loading {
                    span { class: "text-xs text-gray-500", "Loading..." }
                }
            }
            div { class: "flex flex-wrap items-center gap-2",
                {criteria}
                div { class: "ml-auto",
                    ColumnMenu {
                        columns: column_labels,
                        visibility: visibility(),
                        on_toggle: move |key: String| toggle_column.call(key),
                    }
                }
            }
            ListTable {
                items,
                columns,
                sort: query.sort.clone(),
                visibility: visibility(),
                placeholder_rows,
                on_sort: move |key: String| handle.sort_by(&key),
            }
            if let Some(kind) = empty_state {
                ListEmptyState {
                    kind,
                    page_beyond,
                    on_clear: move |_| handle.clear_criteria(),
                    on_first_page: move |_| handle.first_page(),
                }
            }
            Pager {
                current: query.page,
                total: total_pages,
                total_items,
                per_page: query.per_page,
                page_sizes,
                on_page: move |page| handle.set_page(page),
                on_per_page: move |size| handle.set_per_page(size),
            }
            if let Some(message) = notice {
                FetchErrorToast {
                    message,
                    on_dismiss: move |_| handle.dismiss_notice(),
                    on_retry: move |_| handle.refetch(),
                }
            }
        }
    }
}
