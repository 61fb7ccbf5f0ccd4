use dioxus::prelude::*;
use shelf_core::EmptyState;

use crate::components::icons::InboxIcon;
use crate::components::{Button, ButtonSize, ButtonVariant};

/// Placeholder for a loaded list without rows
#[component]
pub fn ListEmptyState(
    kind: EmptyState,
    /// The page in the URL is past the last page of the result
    page_beyond: bool,
    on_clear: EventHandler<()>,
    on_first_page: EventHandler<()>,
) -> Element {
    let message = if page_beyond {
        "This page is past the end of the results"
    } else {
        match kind {
            EmptyState::Filtered => "No results match the current search or filters",
            EmptyState::Empty => "Nothing here yet",
        }
    };

    rsx! {
        div { class: "flex flex-col items-center justify-center gap-3 py-16 text-gray-400",
            InboxIcon { class: "w-10 h-10 text-gray-600" }
            p { class: "text-sm", "{message}" }
            div { class: "flex gap-2",
                if page_beyond {
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Small,
                        onclick: move |_| on_first_page.call(()),
                        "Go to first page"
                    }
                }
                if kind == EmptyState::Filtered {
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        onclick: move |_| on_clear.call(()),
                        "Clear search and filters"
                    }
                }
            }
        }
    }
}
