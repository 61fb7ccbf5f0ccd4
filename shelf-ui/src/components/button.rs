//! Buttons used by the list chrome

use dioxus::prelude::*;

/// Button without visual styling; keeps disabled clicks from firing
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default)] title: Option<String>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] aria_pressed: Option<bool>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: class.as_deref(),
            id: id.as_deref(),
            disabled,
            title: title.as_deref(),
            aria_label: aria_label.as_deref(),
            aria_pressed: aria_pressed.map(|p| if p { "true" } else { "false" }),
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    /// Text only, for toolbar and pager actions
    Ghost,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    Small,
    Medium,
}

#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] id: Option<String>,
    #[props(default)] title: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let sizing = match size {
        ButtonSize::Small => "px-2.5 py-1 text-sm",
        ButtonSize::Medium => "px-4 py-2",
    };
    let look = match variant {
        ButtonVariant::Primary => "bg-indigo-600 hover:bg-indigo-500 text-white",
        ButtonVariant::Secondary => "bg-gray-700 hover:bg-gray-600 text-gray-200",
        ButtonVariant::Ghost => "text-gray-400 hover:text-white hover:bg-gray-700/50",
    };
    let extra = class.unwrap_or_default();
    let class = format!(
        "inline-flex items-center gap-1.5 rounded-md transition-colors disabled:opacity-40 disabled:cursor-not-allowed {sizing} {look} {extra}"
    );

    rsx! {
        ChromelessButton {
            id,
            disabled,
            title,
            class: Some(class),
            onclick,
            {children}
        }
    }
}
