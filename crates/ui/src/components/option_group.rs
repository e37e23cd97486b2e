use dioxus::prelude::*;
use quiz_core::model::{AnswerOption, OptionId};

/// Radio-style list; exactly one option is highlighted at a time.
#[component]
pub fn OptionGroup(
    options: Vec<AnswerOption>,
    selected: Option<OptionId>,
    on_select: EventHandler<OptionId>,
) -> Element {
    rsx! {
        ul { class: "option-group", role: "radiogroup",
            for option in options {
                li { key: "{option.id()}",
                    OptionItem {
                        id: option.id(),
                        label: option.label().to_string(),
                        checked: selected == Some(option.id()),
                        on_select,
                    }
                }
            }
        }
    }
}

#[component]
fn OptionItem(id: OptionId, label: String, checked: bool, on_select: EventHandler<OptionId>) -> Element {
    let class = if checked {
        "option option--selected"
    } else {
        "option"
    };

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            role: "radio",
            "aria-checked": "{checked}",
            onclick: move |_| on_select.call(id),
            span { class: "option__marker" }
            span { class: "option__label", "{label}" }
        }
    }
}
