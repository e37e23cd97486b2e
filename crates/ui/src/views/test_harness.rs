use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::PartName;
use quiz_core::time::fixed_clock;
use services::{
    QuestionService, QuestionSource, RepositoryQuestionSource, SessionIdentity, UserSession,
};
use storage::{QuestionRepository, Storage};
use storage::bank::default_questions;

use crate::context::{UiApp, build_app_context};
use crate::views::question::QuestionTestHandles;
use crate::views::{PartView, QuestionView, ResultView};
use crate::vm::QuestionIntent;

#[derive(Clone)]
struct TestApp {
    question_service: Arc<QuestionService>,
    user_session: Arc<UserSession>,
    fade: Duration,
}

impl UiApp for TestApp {
    fn question_service(&self) -> Arc<QuestionService> {
        Arc::clone(&self.question_service)
    }

    fn user_session(&self) -> Arc<UserSession> {
        Arc::clone(&self.user_session)
    }

    fn parts(&self) -> Vec<PartName> {
        ["Frontend", "Backend"]
            .into_iter()
            .map(|name| PartName::new(name).expect("valid part name"))
            .collect()
    }

    fn fade_duration(&self) -> Duration {
        self.fade
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Part,
    Question,
    Result,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    question_handles: Option<QuestionTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    if let Some(handles) = props.question_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

// `/result` and `/part` match the app routes so fade navigation lands somewhere.
#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
    #[route("/part", PartView)]
    Part {},
    #[route("/result", ResultView)]
    Results {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Part => rsx! { PartView {} },
        ViewKind::Question => rsx! { QuestionView {} },
        ViewKind::Result => rsx! { ResultView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub session: Arc<UserSession>,
    pub question_handles: Option<QuestionTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive a few rounds so spawned loads and fades run to completion.
    pub async fn settle(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn dispatch(&mut self, intent: QuestionIntent) {
        let dispatch = self
            .question_handles
            .as_ref()
            .expect("question handles registered")
            .dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Harness over the default bank with fades turned off.
pub async fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_fade(view, Duration::ZERO).await
}

pub async fn setup_view_harness_with_fade(view: ViewKind, fade: Duration) -> ViewHarness {
    let storage = Storage::in_memory();
    let questions = default_questions().expect("default bank");
    storage
        .questions
        .replace_questions(&questions)
        .await
        .expect("seed questions");
    let source = Arc::new(RepositoryQuestionSource::new(Arc::clone(&storage.questions)));
    build_view_harness(view, source, fade)
}

pub fn setup_view_harness_with_source(
    view: ViewKind,
    source: Arc<dyn QuestionSource>,
) -> ViewHarness {
    build_view_harness(view, source, Duration::ZERO)
}

fn build_view_harness(view: ViewKind, source: Arc<dyn QuestionSource>, fade: Duration) -> ViewHarness {
    let question_service = Arc::new(QuestionService::new(source));
    let user_session = Arc::new(UserSession::new(
        SessionIdentity::new("Ada", None),
        fixed_clock(),
    ));
    let question_handles = match view {
        ViewKind::Question => Some(QuestionTestHandles::default()),
        _ => None,
    };

    let app = Arc::new(TestApp {
        question_service,
        user_session: Arc::clone(&user_session),
        fade,
    });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            question_handles: question_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        session: user_session,
        question_handles,
    }
}
