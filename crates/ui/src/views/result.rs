use dioxus::prelude::*;
use dioxus_router::Link;

use crate::components::{ActionButton, LoadingSpinner};
use crate::context::AppContext;
use crate::routes::Route;
use crate::transition::use_page_transition;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ResultVm, map_result};

#[component]
pub fn ResultView() -> Element {
    let ctx = use_context::<AppContext>();
    let transition = use_page_transition();

    let question_service = ctx.question_service();
    let session = ctx.user_session();
    let resource = use_resource(move || {
        let service = question_service.clone();
        let session = session.clone();
        async move {
            let Some(committed) = session.committed() else {
                return Ok::<_, ViewError>(None);
            };
            let questions = service.list_questions().await.map_err(|err| {
                tracing::error!(error = %err, "could not reload questions for results");
                ViewError::Unknown
            })?;
            let display_name = &session.identity().display_name;
            Ok(Some(map_result(display_name, &committed, &questions)))
        }
    });
    let state = view_state_from_resource(&resource);

    let session = ctx.user_session();
    let on_restart = use_callback(move |()| {
        session.reset();
        transition.go_to(Route::Part {});
    });

    rsx! {
        div { class: "{transition.wrapper_class()}", id: "result-page",
            h2 { class: "result-title", "Your results" }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    LoadingSpinner {}
                },
                ViewState::Ready(Some(result)) => rsx! {
                    ResultSummary { result }
                    ActionButton {
                        text: "Start over".to_string(),
                        enabled: true,
                        on_click: on_restart,
                    }
                },
                ViewState::Ready(None) => rsx! {
                    div { class: "result-empty",
                        p { "No answers yet." }
                        Link { class: "result-empty__link", to: Route::Part {}, "Pick a part to begin" }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "view-error", "{err.message()}" }
                    ActionButton {
                        text: "Start over".to_string(),
                        enabled: true,
                        on_click: on_restart,
                    }
                },
            }
        }
    }
}

#[component]
fn ResultSummary(result: ResultVm) -> Element {
    rsx! {
        dl { class: "result-meta",
            dt { "Name" }
            dd { class: "result-meta__name", "{result.display_name}" }
            dt { "Part" }
            dd { class: "result-meta__part", "{result.part_label}" }
            dt { "Finished" }
            dd { class: "result-meta__time", "{result.committed_at_str}" }
        }
        ol { class: "result-rows",
            for row in result.rows {
                li { key: "{row.step}", class: "result-row",
                    p { class: "result-row__question", "{row.question}" }
                    p { class: "result-row__answer", "{row.answer}" }
                }
            }
        }
    }
}
