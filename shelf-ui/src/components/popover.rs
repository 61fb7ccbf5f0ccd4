//! Anchored popover using the native popover API
//!
//! The popover renders in the top layer and gets light dismiss for free.
//! It is placed under its anchor from the anchor's bounding rect.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use wasm_bindgen_x::JsCast;

static POPOVER_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

const HIDDEN_STYLE: &str = "position: fixed; top: 0; left: 0; margin: 0; opacity: 0;";

/// Call `showPopover` / `hidePopover` on an element
fn call_popover_method(element: &web_sys_x::Element, method: &str) {
    if let Ok(func) = js_sys_x::Reflect::get(element, &method.into()) {
        if let Some(func) = func.dyn_ref::<js_sys_x::Function>() {
            let _ = func.call0(element);
        }
    }
}

/// Popover below the element with id `anchor_id`
#[component]
pub fn Popover(
    anchor_id: String,
    is_open: ReadSignal<bool>,
    /// Called on light dismiss
    on_close: EventHandler<()>,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    // Set while we toggle the popover ourselves, so ontoggle can tell our
    // toggles apart from light dismiss
    let mut own_toggle = use_signal(|| false);

    let popover_id = use_hook(|| {
        let id = POPOVER_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("popover-{id}")
    });
    let effect_popover_id = popover_id.clone();

    use_effect(move || {
        let open = is_open();
        let Some(document) = web_sys_x::window().and_then(|w| w.document()) else {
            return;
        };
        let Some(floating) = document.get_element_by_id(&effect_popover_id) else {
            return;
        };

        own_toggle.set(true);
        if !open {
            call_popover_method(&floating, "hidePopover");
            return;
        }

        let style = match document.get_element_by_id(&anchor_id) {
            Some(anchor) => {
                let rect = anchor.get_bounding_client_rect();
                format!(
                    "position: fixed; top: {}px; left: {}px; margin: 0; min-width: {}px;",
                    rect.bottom() + 4.0,
                    rect.left(),
                    rect.width()
                )
            }
            None => HIDDEN_STYLE.replace("opacity: 0;", ""),
        };
        let _ = floating.set_attribute("style", &style);
        call_popover_method(&floating, "showPopover");
    });

    rsx! {
        div {
            id: "{popover_id}",
            popover: "auto",
            class: class.unwrap_or_default(),
            style: HIDDEN_STYLE,
            ontoggle: move |_| {
                if own_toggle() {
                    own_toggle.set(false);
                    return;
                }
                on_close.call(());
            },
            {children}
        }
    }
}
