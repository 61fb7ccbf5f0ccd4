//! Generic list table with sortable headers and skeleton rows

use std::rc::Rc;

use dioxus::prelude::*;
use shelf_common::Sort;
use shelf_core::ColumnVisibility;

use super::SortHeader;

/// Renders one cell of a row
pub struct CellFn<T>(pub Rc<dyn Fn(&T) -> Element>);

impl<T> CellFn<T> {
    pub fn new(render: impl Fn(&T) -> Element + 'static) -> Self {
        Self(Rc::new(render))
    }
}

impl<T> Clone for CellFn<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> PartialEq for CellFn<T> {
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}

pub struct Column<T> {
    /// Stable key, also used for persisted visibility
    pub key: &'static str,
    pub label: &'static str,
    /// Sort key sent to the API, `None` if the column is not sortable
    pub sort_key: Option<&'static str>,
    pub render: CellFn<T>,
}

impl<T> Column<T> {
    pub fn new(
        key: &'static str,
        label: &'static str,
        render: impl Fn(&T) -> Element + 'static,
    ) -> Self {
        Self {
            key,
            label,
            sort_key: None,
            render: CellFn::new(render),
        }
    }

    pub fn sortable(mut self, sort_key: &'static str) -> Self {
        self.sort_key = Some(sort_key);
        self
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            label: self.label,
            sort_key: self.sort_key,
            render: self.render.clone(),
        }
    }
}

impl<T> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.sort_key == other.sort_key && self.render == other.render
    }
}

#[component]
pub fn ListTable<T: Clone + PartialEq + 'static>(
    items: Vec<T>,
    columns: Vec<Column<T>>,
    sort: Option<Sort>,
    visibility: ColumnVisibility,
    /// Skeleton rows shown before the first result arrives
    #[props(default)]
    placeholder_rows: usize,
    on_sort: EventHandler<String>,
) -> Element {
    let columns: Vec<Column<T>> = columns
        .into_iter()
        .filter(|c| visibility.is_visible(c.key))
        .collect();
    let column_count = columns.len();

    rsx! {
        table { class: "w-full border-collapse text-sm",
            thead { class: "border-b border-gray-700",
                tr {
                    for column in columns.iter() {
                        SortHeader {
                            key: "{column.key}",
                            label: column.label.to_string(),
                            sort_key: column.sort_key.map(str::to_string),
                            active: sort
                                .as_ref()
                                .filter(|s| Some(s.key.as_str()) == column.sort_key)
                                .map(|s| s.direction),
                            on_sort,
                        }
                    }
                }
            }
            tbody {
                for row in 0..placeholder_rows {
                    tr { key: "placeholder-{row}", class: "animate-pulse",
                        for cell in 0..column_count {
                            td { key: "{cell}", class: "px-3 py-2.5",
                                div { class: "h-3 rounded bg-gray-700/60" }
                            }
                        }
                    }
                }
                for (index, item) in items.iter().enumerate() {
                    tr {
                        key: "{index}",
                        class: "border-b border-gray-800 hover:bg-gray-800/40",
                        for column in columns.iter() {
                            td { key: "{column.key}", class: "px-3 py-2 text-gray-200",
                                {(column.render.0)(item)}
                            }
                        }
                    }
                }
            }
        }
    }
}
