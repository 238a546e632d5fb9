//! Schema-driven configuration form
//!
//! Controls are generated from the field schema: text fields become inputs,
//! flags become checkboxes and choices become a segmented control or a select
//! depending on how many options they have. Fields with a visibility
//! condition are left out while it does not hold.

use dioxus::prelude::*;
use sajn_core::{ConfigState, Field, FieldDef, FieldKind, FieldValue, Language, Mode, SCHEMA};

use crate::components::{Checkbox, Segment, SegmentedControl, Select, TextInput, TextInputSize};

/// Choice fields with at most this many options render as a segmented control.
const SEGMENTED_MAX_OPTIONS: usize = 3;

/// Bordered card with a heading
#[component]
pub fn PanelSection(title: &'static str, children: Element) -> Element {
    rsx! {
        section { class: "rounded-lg border border-zinc-200 bg-white p-5",
            h2 { class: "mb-4 text-sm font-medium text-zinc-900", "{title}" }
            {children}
        }
    }
}

/// The full configuration form: required fields, settings, theme
#[component]
pub fn ConfigPanelView(state: ConfigState, on_change: EventHandler<(Field, FieldValue)>) -> Element {
    let required: Vec<FieldDef> = SCHEMA.iter().filter(|d| d.required).copied().collect();
    let settings: Vec<FieldDef> = SCHEMA
        .iter()
        .filter(|d| {
            !d.required
                && !Field::THEME.contains(&d.field)
                && !matches!(d.kind, FieldKind::Flag { .. })
        })
        .copied()
        .collect();
    let flags: Vec<FieldDef> = SCHEMA
        .iter()
        .filter(|d| matches!(d.kind, FieldKind::Flag { .. }) && d.is_visible(&state))
        .copied()
        .collect();
    let theme: Vec<FieldDef> = Field::THEME.iter().map(|f| *f.def()).collect();

    rsx! {
        div { class: "space-y-6",
            PanelSection { title: "Required",
                div { class: "space-y-4",
                    for def in required {
                        FieldControl {
                            key: "{def.param}",
                            def,
                            state: state.clone(),
                            on_change,
                        }
                    }
                }
            }
            PanelSection { title: "Configuration",
                div { class: "space-y-4",
                    for def in settings {
                        FieldControl {
                            key: "{def.param}",
                            def,
                            state: state.clone(),
                            on_change,
                        }
                    }
                    div { class: "space-y-3 pt-2",
                        for def in flags {
                            FieldControl {
                                key: "{def.param}",
                                def,
                                state: state.clone(),
                                on_change,
                            }
                        }
                    }
                }
            }
            PanelSection { title: "Theme (CSS Variables)",
                div { class: "grid grid-cols-2 gap-3",
                    for def in theme {
                        FieldControl {
                            key: "{def.param}",
                            def,
                            state: state.clone(),
                            on_change,
                            compact: true,
                        }
                    }
                }
            }
        }
    }
}

/// A single labelled control for one schema field
#[component]
pub fn FieldControl(
    def: FieldDef,
    state: ConfigState,
    on_change: EventHandler<(Field, FieldValue)>,
    #[props(default)] compact: bool,
) -> Element {
    let field = def.field;
    let label_class = if compact {
        "mb-1.5 block text-xs text-zinc-500"
    } else {
        "mb-1.5 block text-sm text-zinc-600"
    };

    match (def.kind, state.get(field)) {
        (FieldKind::Flag { .. }, FieldValue::Bool(checked)) => rsx! {
            Checkbox {
                checked,
                label: def.label,
                onchange: move |v: bool| on_change.call((field, FieldValue::Bool(v))),
            }
        },
        (FieldKind::Choice { options, .. }, FieldValue::String(selected)) => {
            let choices: Vec<(&'static str, &'static str)> = options
                .iter()
                .map(|v| (*v, choice_label(field, *v)))
                .collect();

            let control = if choices.len() <= SEGMENTED_MAX_OPTIONS {
                rsx! {
                    SegmentedControl {
                        segments: choices.iter().map(|&(v, l)| Segment::new(l, v)).collect::<Vec<_>>(),
                        selected,
                        on_select: move |v: &'static str| on_change.call((field, v.into())),
                    }
                }
            } else {
                rsx! {
                    Select {
                        value: selected,
                        options: choices,
                        onchange: move |v: String| on_change.call((field, v.into())),
                    }
                }
            };

            rsx! {
                div {
                    label { class: "{label_class}", "{def.label}" }
                    {control}
                }
            }
        }
        (FieldKind::Text { .. }, FieldValue::String(text)) => rsx! {
            div {
                label { class: "{label_class}", "{def.label}" }
                TextInput {
                    value: text,
                    size: if compact { TextInputSize::Small } else { TextInputSize::Medium },
                    placeholder: def.placeholder,
                    on_input: move |v: String| on_change.call((field, v.into())),
                }
            }
        },
        _ => {
            tracing::warn!("Field {} holds a value of the wrong type", def.param);
            rsx! {}
        }
    }
}

fn choice_label(field: Field, value: &'static str) -> &'static str {
    match field {
        Field::Mode => value.parse::<Mode>().map(Mode::label).unwrap_or(value),
        Field::Language => value.parse::<Language>().map(Language::label).unwrap_or(value),
        _ => value,
    }
}
