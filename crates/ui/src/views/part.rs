use dioxus::prelude::*;
use quiz_core::model::PartName;

use crate::components::ActionButton;
use crate::context::AppContext;
use crate::routes::Route;
use crate::transition::use_page_transition;

#[component]
pub fn PartView() -> Element {
    let ctx = use_context::<AppContext>();
    let transition = use_page_transition();
    let session = ctx.user_session();
    let initial = session.selected_part();
    let mut chosen = use_signal(move || initial);

    let parts = ctx.parts().to_vec();
    let current = chosen();

    let on_start = move |()| {
        if let Some(part) = chosen() {
            session.select_part(part);
            transition.navigate_with_fade(Route::Question {});
        }
    };

    rsx! {
        div { class: "{transition.wrapper_class()}", id: "part-page",
            h2 { class: "part-title", "Pick a part" }
            ul { class: "part-list",
                for part in parts {
                    li { key: "{part}",
                        PartItem {
                            checked: current.as_ref() == Some(&part),
                            on_choose: move |part: PartName| chosen.set(Some(part)),
                            part,
                        }
                    }
                }
            }
            ActionButton {
                text: "Start".to_string(),
                enabled: current.is_some(),
                on_click: on_start,
            }
        }
    }
}

#[component]
fn PartItem(part: PartName, checked: bool, on_choose: EventHandler<PartName>) -> Element {
    let class = if checked { "part part--selected" } else { "part" };
    let label = part.to_string();

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            onclick: move |_| on_choose.call(part.clone()),
            "{label}"
        }
    }
}
