use dioxus::prelude::*;
use shelf_core::Debouncer;

use crate::components::icons::{SearchIcon, XIcon};
use crate::components::ChromelessButton;

/// Free-text search input. Keystrokes are committed through `on_search`
/// once typing pauses for `debounce_ms`.
#[component]
pub fn SearchBox(
    /// Search text of the current URL
    value: String,
    debounce_ms: u64,
    on_search: EventHandler<String>,
    #[props(default = "Search...")] placeholder: &'static str,
) -> Element {
    let mut draft = use_signal(|| value.clone());
    let debouncer = use_hook(|| Debouncer::new(debounce_ms));

    // back/forward navigation changes the value under us
    use_effect(use_reactive!(|value| draft.set(value)));

    let input_debouncer = debouncer.clone();
    let clear_debouncer = debouncer.clone();

    rsx! {
        div { class: "relative w-72",
            SearchIcon { class: "w-4 h-4 absolute left-2.5 top-2 text-gray-500" }
            input {
                r#type: "search",
                class: "w-full bg-gray-800/50 rounded-md pl-8 pr-8 py-1.5 text-sm text-gray-200 placeholder-gray-500 focus:outline-none focus:ring-1 focus:ring-indigo-500/50",
                value: "{draft}",
                placeholder,
                oninput: move |e| {
                    let text = e.value();
                    draft.set(text.clone());
                    let debouncer = input_debouncer.clone();
                    spawn(async move {
                        if debouncer.settle().await {
                            on_search.call(text);
                        }
                    });
                },
            }
            if !draft.read().is_empty() {
                ChromelessButton {
                    class: Some("absolute right-2 top-1.5 text-gray-500 hover:text-gray-200".to_string()),
                    aria_label: Some("Clear search".to_string()),
                    onclick: move |_| {
                        clear_debouncer.cancel();
                        draft.set(String::new());
                        on_search.call(String::new());
                    },
                    XIcon {}
                }
            }
        }
    }
}
