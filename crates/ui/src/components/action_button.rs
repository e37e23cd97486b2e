use dioxus::prelude::*;

/// Primary call to action. Clicks are swallowed while disabled.
#[component]
pub fn ActionButton(text: String, enabled: bool, on_click: EventHandler<()>) -> Element {
    let class = if enabled {
        "action-button"
    } else {
        "action-button action-button--disabled"
    };

    rsx! {
        button {
            class: "{class}",
            id: "action-button",
            r#type: "button",
            disabled: !enabled,
            onclick: move |_| {
                if enabled {
                    on_click.call(());
                }
            },
            "{text}"
        }
    }
}
