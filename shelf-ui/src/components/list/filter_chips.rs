use dioxus::prelude::*;
use shelf_common::{EntityCatalog, FilterMap, LogicalOperator};

use crate::components::icons::XIcon;
use crate::components::ChromelessButton;

/// Active filter chips of an advanced-mode list
#[component]
pub fn FilterChips(
    catalog: &'static EntityCatalog,
    filter: FilterMap,
    operator: LogicalOperator,
    on_remove: EventHandler<String>,
    on_toggle_operator: EventHandler<()>,
) -> Element {
    let chips: Vec<(String, String, String)> = filter
        .iter()
        .map(|(name, expression)| {
            (
                name.clone(),
                catalog.label_for(name).to_string(),
                expression.describe(),
            )
        })
        .collect();
    // the operator only matters once two chips can be combined
    let show_operator = chips.len() > 1;
    let operator_label = match operator {
        LogicalOperator::And => "Match all",
        LogicalOperator::Or => "Match any",
    };

    rsx! {
        div { class: "flex flex-wrap items-center gap-2",
            for (index, (name, label, description)) in chips.into_iter().enumerate() {
                span { key: "{name}", class: "inline-flex items-center gap-2",
                    if show_operator && index > 0 {
                        span { class: "text-xs uppercase text-gray-500", "{operator}" }
                    }
                    span { class: "inline-flex items-center gap-1 rounded-full bg-indigo-500/15 px-2.5 py-0.5 text-sm text-indigo-200",
                        span { class: "font-medium", "{label}" }
                        span { class: "text-indigo-300/80", "{description}" }
                        ChromelessButton {
                            class: Some("text-indigo-300 hover:text-white".to_string()),
                            aria_label: Some(format!("Remove {label} filter")),
                            onclick: {
                                let name = name.clone();
                                move |_| on_remove.call(name.clone())
                            },
                            XIcon { class: "w-3 h-3" }
                        }
                    }
                }
            }
            if show_operator {
                ChromelessButton {
                    class: Some("text-xs text-gray-400 underline decoration-dotted hover:text-white".to_string()),
                    title: Some("Toggle between matching all and any filters".to_string()),
                    onclick: move |_| on_toggle_operator.call(()),
                    "{operator_label}"
                }
            }
        }
    }
}
