use dioxus::prelude::*;

#[component]
pub fn StepCounter(current: u32, total: u32) -> Element {
    rsx! {
        p { class: "step-counter",
            span { class: "step-counter__current", "{current}" }
            span { class: "step-counter__sep", " / " }
            span { class: "step-counter__total", "{total}" }
        }
    }
}
