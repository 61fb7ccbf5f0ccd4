//! Non-blocking notice for failed list fetches

use dioxus::prelude::*;

use crate::components::icons::{AlertTriangleIcon, RefreshIcon, XIcon};
use crate::components::{Button, ButtonSize, ButtonVariant, ChromelessButton};

/// Toast shown while a fetch failure is unacknowledged. The rows of the
/// previous successful fetch stay on screen underneath.
#[component]
pub fn FetchErrorToast(
    message: String,
    on_dismiss: EventHandler<()>,
    on_retry: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "fixed bottom-6 right-6 z-50 max-w-md rounded-lg border border-amber-700/50 bg-gray-900 px-4 py-3 shadow-lg",
            role: "status",
            div { class: "flex items-start gap-3",
                AlertTriangleIcon { class: "w-5 h-5 text-amber-500 flex-shrink-0 mt-0.5" }
                div { class: "flex-1",
                    p { class: "text-sm font-medium text-amber-200", "Could not load the list" }
                    p { class: "text-sm text-gray-400 break-words", "{message}" }
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Small,
                        class: Some("mt-2".to_string()),
                        onclick: move |_| on_retry.call(()),
                        RefreshIcon { class: "w-3.5 h-3.5" }
                        "Retry"
                    }
                }
                ChromelessButton {
                    class: Some("text-gray-500 hover:text-gray-200".to_string()),
                    aria_label: Some("Dismiss".to_string()),
                    onclick: move |_| on_dismiss.call(()),
                    XIcon {}
                }
            }
        }
    }
}
