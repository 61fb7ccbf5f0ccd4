use dioxus::prelude::*;
use shelf_common::{FilterExpression, FilterField, OperatorKind, Range, Scalar};

use crate::components::icons::PlusIcon;
use crate::components::{Button, ButtonSize, ButtonVariant, Popover};

/// Raw input of the add-filter form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterDraft {
    /// Text operand, or the lower bound of a range
    pub value: String,
    /// Upper bound of a range
    pub upper: String,
}

impl FilterDraft {
    pub fn single(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            upper: String::new(),
        }
    }

    pub fn range(lower: impl Into<String>, upper: impl Into<String>) -> Self {
        Self {
            value: lower.into(),
            upper: upper.into(),
        }
    }
}

/// Build the expression a field of `kind` takes from the form input.
///
/// `None` while the input is incomplete or does not parse. Booleans and
/// choices are picked with buttons and never go through this.
pub fn build_expression(kind: &OperatorKind, draft: &FilterDraft) -> Option<FilterExpression> {
    let value = draft.value.trim();
    let upper = draft.upper.trim();
    match kind {
        OperatorKind::Text => (!value.is_empty()).then(|| FilterExpression::Contains(value.into())),
        OperatorKind::Id => {
            let ids: Vec<Scalar> = value
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(Scalar::text)
                .collect();
            match ids.len() {
                0 => None,
                1 => ids.into_iter().next().map(FilterExpression::Equals),
                _ => Some(FilterExpression::In(ids)),
            }
        }
        OperatorKind::Number => {
            let lower = value.parse::<i64>().ok()?;
            if upper.is_empty() {
                return Some(FilterExpression::Equals(Scalar::Integer(lower)));
            }
            let upper = upper.parse::<i64>().ok()?;
            Some(FilterExpression::Range(Range {
                start: Scalar::Integer(lower.min(upper)),
                end: Scalar::Integer(lower.max(upper)),
            }))
        }
        OperatorKind::Date => (!value.is_empty() && !upper.is_empty()).then(|| {
            FilterExpression::Range(Range {
                start: Scalar::text(value),
                end: Scalar::text(upper),
            })
        }),
        OperatorKind::Boolean | OperatorKind::Choice(_) => None,
    }
}

/// "Add filter" dropdown listing the fields that are not filtered yet
#[component]
pub fn FilterMenu(
    fields: Vec<FilterField>,
    on_add: EventHandler<(String, FilterExpression)>,
) -> Element {
    let mut is_open = use_signal(|| false);
    let mut selected: Signal<Option<FilterField>> = use_signal(|| None);
    let mut draft = use_signal(FilterDraft::default);

    let mut close = move || {
        is_open.set(false);
        selected.set(None);
        draft.set(FilterDraft::default());
    };
    let mut submit = move |name: &'static str, expression: FilterExpression| {
        on_add.call((name.to_string(), expression));
        close();
    };

    let body = match selected() {
        None => rsx! {
            ul { class: "flex flex-col",
                for field in fields.iter().copied() {
                    li { key: "{field.name}",
                        button {
                            r#type: "button",
                            class: "w-full text-left px-2 py-1 rounded text-gray-300 hover:bg-gray-800",
                            onclick: move |_| selected.set(Some(field)),
                            "{field.label}"
                        }
                    }
                }
            }
        },
        Some(field) => rsx! {
            div { class: "flex flex-col gap-2 min-w-56",
                p { class: "text-xs uppercase tracking-wide text-gray-500", "{field.label}" }
                FieldInput {
                    field,
                    draft: draft(),
                    on_draft: move |d| draft.set(d),
                    on_pick: move |expression| submit(field.name, expression),
                }
                if !matches!(field.kind, OperatorKind::Boolean | OperatorKind::Choice(_)) {
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Small,
                        disabled: build_expression(&field.kind, &draft()).is_none(),
                        onclick: move |_| {
                            if let Some(expression) = build_expression(&field.kind, &draft()) {
                                submit(field.name, expression);
                            }
                        },
                        "Apply"
                    }
                }
            }
        },
    };

    rsx! {
        Button {
            id: "add-filter".to_string(),
            variant: ButtonVariant::Ghost,
            size: ButtonSize::Small,
            disabled: fields.is_empty(),
            onclick: move |_| is_open.set(true),
            PlusIcon { class: "w-3.5 h-3.5" }
            "Add filter"
        }
        Popover {
            anchor_id: "add-filter".to_string(),
            is_open,
            on_close: move |_| close(),
            class: Some("rounded-lg border border-gray-700 bg-gray-900 p-2 shadow-xl text-sm".to_string()),
            {body}
        }
    }
}

/// Input controls for one field kind
#[component]
fn FieldInput(
    field: FilterField,
    draft: FilterDraft,
    on_draft: EventHandler<FilterDraft>,
    /// Immediate choice (booleans and option lists)
    on_pick: EventHandler<FilterExpression>,
) -> Element {
    let input_class = "bg-gray-800/50 rounded px-2 py-1 text-gray-200 focus:outline-none focus:ring-1 focus:ring-indigo-500/50";
    let lower = draft.clone();
    let upper = draft.clone();

    match field.kind {
        OperatorKind::Boolean => rsx! {
            div { class: "flex gap-2",
                for (label, flag) in [("Yes", true), ("No", false)] {
                    Button {
                        key: "{label}",
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Small,
                        onclick: move |_| on_pick.call(FilterExpression::BooleanEquals(flag)),
                        "{label}"
                    }
                }
            }
        },
        OperatorKind::Choice(options) => rsx! {
            div { class: "flex flex-col",
                for option in options.iter().copied() {
                    button {
                        key: "{option}",
                        r#type: "button",
                        class: "text-left px-2 py-1 rounded text-gray-300 hover:bg-gray-800",
                        onclick: move |_| on_pick.call(FilterExpression::Equals(Scalar::text(option))),
                        "{option}"
                    }
                }
            }
        },
        OperatorKind::Number | OperatorKind::Date => {
            let input_type = if field.kind == OperatorKind::Date {
                "date"
            } else {
                "number"
            };
            rsx! {
                div { class: "flex items-center gap-2",
                    input {
                        r#type: input_type,
                        class: input_class,
                        value: "{draft.value}",
                        oninput: move |e| on_draft.call(FilterDraft { value: e.value(), ..lower.clone() }),
                    }
                    span { class: "text-gray-500", "to" }
                    input {
                        r#type: input_type,
                        class: input_class,
                        value: "{draft.upper}",
                        oninput: move |e| on_draft.call(FilterDraft { upper: e.value(), ..upper.clone() }),
                    }
                }
            }
        }
        OperatorKind::Text | OperatorKind::Id => {
            let placeholder = if field.kind == OperatorKind::Id {
                "ID, or several separated by commas"
            } else {
                "Contains..."
            };
            rsx! {
                input {
                    r#type: "text",
                    class: input_class,
                    placeholder,
                    value: "{draft.value}",
                    oninput: move |e| on_draft.call(FilterDraft { value: e.value(), ..lower.clone() }),
                }
            }
        }
    }
}
