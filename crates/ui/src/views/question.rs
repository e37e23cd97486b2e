use dioxus::prelude::*;
use quiz_core::model::StepOutcome;

use crate::components::{ActionButton, Back, LoadingSpinner, OptionGroup, StepCounter, StepImage};
use crate::context::AppContext;
use crate::routes::Route;
use crate::transition::use_page_transition;
use crate::views::ViewError;
use crate::vm::{QuestionIntent, QuestionPageVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuestionView() -> Element {
    let ctx = use_context::<AppContext>();
    let transition = use_page_transition();
    let mut vm = use_signal(QuestionPageVm::default);
    let mut error = use_signal(|| None::<ViewError>);

    // Fetch once on mount. The resource future is dropped with the page, which
    // drops the load handle and aborts the fetch.
    let question_service = ctx.question_service();
    let _load = use_resource(move || {
        let service = question_service.clone();
        async move {
            let result = service.spawn_load().wait().await;
            vm.write().finish_loading(result);
        }
    });

    use_drop(move || {
        if let Ok(mut state) = vm.try_write() {
            state.teardown();
        }
    });

    let session = ctx.user_session();
    let dispatch_intent = use_callback(move |intent: QuestionIntent| match intent {
        QuestionIntent::Select(id) => {
            if vm.write().select_option(id) {
                error.set(None);
            }
        }
        QuestionIntent::Next => {
            let outcome = vm.write().advance_or_finish();
            match outcome {
                Ok(StepOutcome::Ignored) => {}
                Ok(StepOutcome::Advance { from, to }) => {
                    tracing::debug!(from, to, "advancing to next step");
                    transition.run_with_fade(move || {
                        let mut vm = vm;
                        vm.write().complete_advance();
                    });
                }
                Ok(StepOutcome::Finish(option_ids)) => match session.commit_selections(option_ids) {
                    Ok(_) => transition.navigate_with_fade(Route::Results {}),
                    Err(err) => {
                        tracing::error!(error = %err, "failed to commit selections");
                        error.set(Some(ViewError::CommitRejected));
                    }
                },
                Err(err) => {
                    tracing::error!(error = %err, "step update failed");
                    error.set(Some(ViewError::Unknown));
                }
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuestionTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let page = vm.read().clone();
    let wrapper_class = transition.wrapper_class();

    if page.is_loading() {
        return rsx! {
            div { class: "{wrapper_class}", id: "question-page",
                LoadingSpinner {}
            }
        };
    }

    let title = page.title().to_string();
    let button_label = page.button_label().to_string();

    rsx! {
        div { class: "{wrapper_class}", id: "question-page",
            nav { class: "question-nav",
                Back { previous: page.previous_path() }
                StepCounter { current: page.current_step(), total: page.total_steps() }
            }
            StepImage { illustration: page.illustration() }
            h2 { class: "question-title", "{title}" }
            OptionGroup {
                options: page.options(),
                selected: page.selected(),
                on_select: move |id| dispatch_intent.call(QuestionIntent::Select(id)),
            }
            if let Some(err) = error() {
                p { class: "view-error", "{err.message()}" }
            }
            ActionButton {
                text: button_label,
                enabled: page.is_button_enabled(),
                on_click: move |()| dispatch_intent.call(QuestionIntent::Next),
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuestionTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuestionIntent>>>>,
    vm: Rc<RefCell<Option<Signal<QuestionPageVm>>>>,
}

#[cfg(test)]
impl QuestionTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuestionIntent>, vm: Signal<QuestionPageVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuestionIntent> {
        (*self.dispatch.borrow()).expect("question dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<QuestionPageVm> {
        (*self.vm.borrow()).expect("question vm registered")
    }
}
