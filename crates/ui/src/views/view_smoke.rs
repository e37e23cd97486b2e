use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dioxus::prelude::*;
use quiz_core::model::{OptionId, PartName, Question};
use services::{QuestionSource, QuestionSourceError};
use storage::bank::default_questions;

use super::test_harness::{
    ViewKind, setup_view_harness, setup_view_harness_with_fade, setup_view_harness_with_source,
};
use crate::vm::QuestionIntent;

struct FailingSource;

#[async_trait]
impl QuestionSource for FailingSource {
    async fn list_questions(&self) -> Result<Vec<Question>, QuestionSourceError> {
        Err(QuestionSourceError::Task("backend unavailable".to_string()))
    }
}

fn ids(raw: &[u64]) -> Vec<OptionId> {
    raw.iter().copied().map(OptionId::new).collect()
}

#[tokio::test(flavor = "current_thread")]
async fn question_view_shows_spinner_then_first_question() {
    let mut harness = setup_view_harness(ViewKind::Question).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Loading..."), "missing spinner in {html}");

    harness.settle().await;
    let html = harness.render();
    let title = default_questions().unwrap()[0].title().to_string();
    assert!(!html.contains("Loading..."), "spinner still shown in {html}");
    assert!(html.contains(&title), "missing {title} in {html}");
    assert!(html.contains("A sketch of the screens"), "missing option in {html}");
    assert!(html.contains("action-button--disabled"), "button should be disabled in {html}");
    assert!(html.contains("Next"), "missing button label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn failed_fetch_renders_an_empty_quiz() {
    let mut harness = setup_view_harness_with_source(ViewKind::Question, Arc::new(FailingSource));
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(!html.contains("Loading..."), "spinner still shown in {html}");
    assert!(!html.contains("option__label"), "unexpected options in {html}");
    assert!(html.contains("action-button--disabled"), "button should be disabled in {html}");

    let vm = harness.question_handles.as_ref().unwrap().vm();
    assert_eq!(vm.peek().title(), "");
    assert!(!vm.peek().is_loading());
}

#[tokio::test(flavor = "current_thread")]
async fn answering_every_step_commits_and_shows_results() {
    let mut harness = setup_view_harness(ViewKind::Question).await;
    harness.rebuild();
    harness.settle().await;

    for (step, choice) in [1_u64, 0, 1].into_iter().enumerate() {
        harness.dispatch(QuestionIntent::Select(OptionId::new(choice)));
        let html = harness.render();
        assert!(!html.contains("action-button--disabled"), "button should be enabled in {html}");

        harness.dispatch(QuestionIntent::Next);
        harness.settle().await;
        let vm = harness.question_handles.as_ref().unwrap().vm();
        let expected_step = u32::try_from(step + 2).unwrap();
        assert_eq!(vm.peek().current_step(), expected_step);
        assert_eq!(vm.peek().selected(), None);
        assert!(harness.session.committed().is_none());
    }

    let html = harness.render();
    assert!(html.contains("See results"), "missing last-step label in {html}");

    harness.dispatch(QuestionIntent::Select(OptionId::new(0)));
    harness.dispatch(QuestionIntent::Next);
    harness.settle().await;

    let committed = harness.session.committed().expect("selections committed");
    assert_eq!(committed.option_ids(), ids(&[1, 0, 1, 0]).as_slice());

    let html = harness.render();
    assert!(html.contains("Your results"), "missing results page in {html}");
    assert!(html.contains("A diagram of the data"), "missing answer label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn next_without_selection_does_nothing() {
    let mut harness = setup_view_harness(ViewKind::Question).await;
    harness.rebuild();
    harness.settle().await;

    harness.dispatch(QuestionIntent::Next);
    harness.settle().await;

    let vm = harness.question_handles.as_ref().unwrap().vm();
    assert_eq!(vm.peek().current_step(), 1);
    assert!(harness.session.committed().is_none());
}

#[tokio::test(flavor = "current_thread")]
async fn result_view_lists_committed_answers() {
    let mut harness = setup_view_harness(ViewKind::Result).await;
    harness
        .session
        .select_part(PartName::new("Backend").unwrap());
    harness.session.commit_selections(ids(&[0, 1, 0, 1])).unwrap();

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Ada"), "missing display name in {html}");
    assert!(html.contains("Backend"), "missing part in {html}");
    assert!(html.contains("A sketch of the screens"), "missing first answer in {html}");
    assert!(html.contains("Start over"), "missing restart button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn result_view_without_answers_shows_empty_state() {
    let mut harness = setup_view_harness(ViewKind::Result).await;
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("No answers yet."), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn part_view_lists_configured_parts() {
    let mut harness = setup_view_harness(ViewKind::Part).await;
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Frontend"), "missing part in {html}");
    assert!(html.contains("Backend"), "missing part in {html}");
    assert!(html.contains("action-button--disabled"), "start should wait for a part in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn step_changes_only_after_the_fade_finishes() {
    let fade = Duration::from_millis(300);
    let mut harness = setup_view_harness_with_fade(ViewKind::Question, fade).await;
    harness.rebuild();
    harness.settle().await;

    harness.dispatch(QuestionIntent::Select(OptionId::new(1)));
    harness.dispatch(QuestionIntent::Next);
    harness.drive_async().await;

    let vm = harness.question_handles.as_ref().unwrap().vm();
    assert_eq!(vm.peek().current_step(), 1);
    assert_eq!(vm.peek().selected(), Some(OptionId::new(1)));
    let html = harness.render();
    assert!(html.contains("page-fade--leaving"), "page should be fading out in {html}");

    // Clicks during the fade change nothing.
    harness.dispatch(QuestionIntent::Select(OptionId::new(0)));
    harness.dispatch(QuestionIntent::Next);
    assert_eq!(vm.peek().current_step(), 1);
    assert_eq!(vm.peek().selected(), Some(OptionId::new(1)));

    tokio::time::sleep(fade + Duration::from_millis(100)).await;
    harness.settle().await;

    assert_eq!(vm.peek().current_step(), 2);
    assert_eq!(vm.peek().selected(), None);
    let html = harness.render();
    assert!(!html.contains("page-fade--leaving"), "fade should be over in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn result_view_reports_a_failed_reload() {
    let mut harness = setup_view_harness_with_source(ViewKind::Result, Arc::new(FailingSource));
    harness.session.commit_selections(ids(&[1, 0, 1, 0])).unwrap();

    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Something went wrong"), "missing error message in {html}");
    assert!(html.contains("Start over"), "missing restart button in {html}");
}
