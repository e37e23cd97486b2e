use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        div { class: "loading", role: "status",
            div { class: "loading__spinner" }
            p { class: "loading__label", "Loading..." }
        }
    }
}
