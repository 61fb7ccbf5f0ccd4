use dioxus::prelude::*;
use shelf_core::ColumnVisibility;

use crate::components::icons::ColumnsIcon;
use crate::components::{Button, ButtonSize, ButtonVariant, Popover};

/// Dropdown of checkboxes that show or hide table columns
#[component]
pub fn ColumnMenu(
    /// `(key, label)` of every column
    columns: Vec<(&'static str, &'static str)>,
    visibility: ColumnVisibility,
    on_toggle: EventHandler<String>,
) -> Element {
    let mut is_open = use_signal(|| false);

    rsx! {
        Button {
            id: "column-menu".to_string(),
            variant: ButtonVariant::Ghost,
            size: ButtonSize::Small,
            title: Some("Columns".to_string()),
            onclick: move |_| is_open.set(true),
            ColumnsIcon { class: "w-3.5 h-3.5" }
            "Columns"
        }
        Popover {
            anchor_id: "column-menu".to_string(),
            is_open,
            on_close: move |_| is_open.set(false),
            class: Some("rounded-lg border border-gray-700 bg-gray-900 p-2 shadow-xl text-sm".to_string()),
            ul { class: "flex flex-col gap-1",
                for (key, title) in columns {
                    li { key: "{key}",
                        label { class: "flex items-center gap-2 px-2 py-1 rounded text-gray-300 hover:bg-gray-800 cursor-pointer",
                            input {
                                r#type: "checkbox",
                                checked: visibility.is_visible(key),
                                onchange: move |_| on_toggle.call(key.to_string()),
                            }
                            "{title}"
                        }
                    }
                }
            }
        }
    }
}
