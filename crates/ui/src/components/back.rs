use dioxus::prelude::*;
use dioxus_router::use_navigator;
use quiz_core::model::PreviousPath;

use crate::routes::Route;

/// Back link. The first step leaves the quiz for the part screen; later steps
/// step back through history.
#[component]
pub fn Back(previous: PreviousPath) -> Element {
    let navigator = use_navigator();

    rsx! {
        button {
            class: "back-link",
            r#type: "button",
            onclick: move |_| match previous {
                PreviousPath::History => navigator.go_back(),
                PreviousPath::PartSelection => {
                    let _ = navigator.push(Route::Part {});
                }
            },
            "Back"
        }
    }
}
