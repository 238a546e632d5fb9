//! Segmented control: a group of toggle buttons where exactly one is selected

use dioxus::prelude::*;

/// A single segment in a segmented control
#[derive(Clone, PartialEq)]
pub struct Segment {
    pub label: &'static str,
    pub value: &'static str,
}

impl Segment {
    pub fn new(label: &'static str, value: &'static str) -> Self {
        Self { label, value }
    }
}

/// A row of toggle buttons where exactly one is selected
#[component]
pub fn SegmentedControl(
    segments: Vec<Segment>,
    selected: String,
    on_select: EventHandler<&'static str>,
) -> Element {
    let last = segments.len().saturating_sub(1);

    rsx! {
        div { class: "flex rounded-md border border-zinc-300",
            for (idx , segment) in segments.iter().enumerate() {
                button {
                    key: "{segment.value}",
                    class: "flex-1 px-4 py-2 text-sm font-medium transition-colors {segment_class(segment.value == selected)} {corner_class(idx, last)}",
                    onclick: {
                        let value = segment.value;
                        move |_| on_select.call(value)
                    },
                    "{segment.label}"
                }
            }
        }
    }
}

fn segment_class(is_selected: bool) -> &'static str {
    if is_selected {
        "bg-zinc-900 text-white"
    } else {
        "bg-white text-zinc-600 hover:bg-zinc-50"
    }
}

fn corner_class(idx: usize, last: usize) -> &'static str {
    match (idx == 0, idx == last) {
        (true, true) => "rounded-md",
        (true, false) => "rounded-l-md",
        (false, true) => "rounded-r-md",
        (false, false) => "",
    }
}
