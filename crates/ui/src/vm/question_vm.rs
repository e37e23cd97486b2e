use quiz_core::model::{
    AnswerOption, OptionId, PreviousPath, Question, StepError, StepIllustration, StepOutcome,
    StepState,
};
use services::QuestionSourceError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionIntent {
    Select(OptionId),
    Next,
}

/// State behind the question page: the fetched questions plus the step machine.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionPageVm {
    loading: bool,
    torn_down: bool,
    questions: Vec<Question>,
    steps: StepState,
}

impl Default for QuestionPageVm {
    fn default() -> Self {
        Self::new(StepState::default())
    }
}

impl QuestionPageVm {
    #[must_use]
    pub fn new(steps: StepState) -> Self {
        Self {
            loading: true,
            torn_down: false,
            questions: Vec::new(),
            steps,
        }
    }

    /// Apply the result of the mount-time fetch.
    ///
    /// A failure is logged and leaves the question list empty; either way the
    /// page leaves the loading state. Returns `false` when the page is already
    /// gone and the result was discarded.
    pub fn finish_loading(&mut self, result: Result<Vec<Question>, QuestionSourceError>) -> bool {
        if self.torn_down {
            tracing::debug!("question page closed before load finished; dropping result");
            return false;
        }
        match result {
            Ok(questions) => {
                tracing::debug!(count = questions.len(), "questions loaded");
                self.questions = questions;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to load questions");
                self.questions.clear();
            }
        }
        self.loading = false;
        true
    }

    /// Mark the page as gone so a late load result is ignored.
    pub fn teardown(&mut self) {
        self.torn_down = true;
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.steps.question_index())
    }

    #[must_use]
    pub fn title(&self) -> &str {
        self.current_question().map_or("", Question::title)
    }

    #[must_use]
    pub fn options(&self) -> Vec<AnswerOption> {
        self.current_question()
            .map(|question| question.options().to_vec())
            .unwrap_or_default()
    }

    /// Only options of the question on screen can be picked.
    pub fn select_option(&mut self, id: OptionId) -> bool {
        let offered = self
            .current_question()
            .is_some_and(|question| question.option(id).is_some());
        offered && self.steps.select_option(id)
    }

    /// # Errors
    ///
    /// Propagates `StepError` from the step machine.
    pub fn advance_or_finish(&mut self) -> Result<StepOutcome, StepError> {
        if self.loading {
            return Ok(StepOutcome::Ignored);
        }
        self.steps.advance_or_finish()
    }

    pub fn complete_advance(&mut self) -> bool {
        self.steps.complete_advance()
    }

    #[must_use]
    pub fn selected(&self) -> Option<OptionId> {
        self.steps.selected()
    }

    #[must_use]
    pub fn current_step(&self) -> u32 {
        self.steps.current_step()
    }

    #[must_use]
    pub fn total_steps(&self) -> u32 {
        self.steps.total_steps()
    }

    #[must_use]
    pub fn is_button_enabled(&self) -> bool {
        self.steps.is_button_enabled()
    }

    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.steps.is_last_step() {
            "See results"
        } else {
            "Next"
        }
    }

    #[must_use]
    pub fn previous_path(&self) -> PreviousPath {
        self.steps.previous_path()
    }

    #[must_use]
    pub fn illustration(&self) -> StepIllustration {
        self.steps.illustration()
    }
}
