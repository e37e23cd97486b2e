use thiserror::Error;

use crate::model::StepIllustration;
use crate::model::ids::OptionId;

/// Number of questions a quiz walks through.
pub const TOTAL_STEPS: u32 = 4;

/// Where the back control leads from the current step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PreviousPath {
    /// Default history back.
    History,
    /// Explicit fallback to the part selection screen.
    PartSelection,
}

/// Result of pressing the action button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Nothing selected, a fade already pending, or the quiz was already committed.
    Ignored,
    /// The selection was recorded; call `complete_advance` once the exit fade has finished.
    Advance { from: u32, to: u32 },
    /// Last step answered. Holds one option per step, in step order.
    Finish(Vec<OptionId>),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StepError {
    #[error("a quiz needs at least one step")]
    NoSteps,
    #[error("step {step} has no recorded selection")]
    MissingSelection { step: u32 },
}

/// Per-page step state: current position, the transient choice and the answers so far.
///
/// Invariant: `1 <= current_step <= total_steps`. A slot in `selections` is only
/// filled once its step has been answered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepState {
    current_step: u32,
    total_steps: u32,
    selected: Option<OptionId>,
    selections: Vec<Option<OptionId>>,
    advancing: bool,
    committed: bool,
}

impl Default for StepState {
    fn default() -> Self {
        Self {
            current_step: 1,
            total_steps: TOTAL_STEPS,
            selected: None,
            selections: vec![None; TOTAL_STEPS as usize],
            advancing: false,
            committed: false,
        }
    }
}

impl StepState {
    /// # Errors
    ///
    /// Returns `StepError::NoSteps` when `total_steps` is zero.
    pub fn new(total_steps: u32) -> Result<Self, StepError> {
        if total_steps == 0 {
            return Err(StepError::NoSteps);
        }
        Ok(Self {
            total_steps,
            selections: vec![None; total_steps as usize],
            ..Self::default()
        })
    }

    #[must_use]
    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    #[must_use]
    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    #[must_use]
    pub fn selected(&self) -> Option<OptionId> {
        self.selected
    }

    #[must_use]
    pub fn selections(&self) -> &[Option<OptionId>] {
        &self.selections
    }

    #[must_use]
    pub fn is_last_step(&self) -> bool {
        self.current_step == self.total_steps
    }

    #[must_use]
    pub fn is_button_enabled(&self) -> bool {
        self.selected.is_some()
    }

    /// True between `advance_or_finish` returning `Advance` and `complete_advance`.
    #[must_use]
    pub fn is_advancing(&self) -> bool {
        self.advancing
    }

    #[must_use]
    pub fn is_committed(&self) -> bool {
        self.committed
    }

    /// Zero-based index of the question shown on the current step.
    #[must_use]
    pub fn question_index(&self) -> usize {
        (self.current_step - 1) as usize
    }

    /// Choose an option for the current step, replacing any earlier choice.
    ///
    /// Returns `false` (and changes nothing) while a fade is pending or after commit.
    pub fn select_option(&mut self, id: OptionId) -> bool {
        if self.advancing || self.committed {
            return false;
        }
        self.selected = Some(id);
        true
    }

    /// Record the current choice and decide what happens next.
    ///
    /// The step index is not touched here: a non-final step only moves once
    /// `complete_advance` is called.
    ///
    /// # Errors
    ///
    /// Returns `StepError::MissingSelection` if an earlier step was never answered.
    pub fn advance_or_finish(&mut self) -> Result<StepOutcome, StepError> {
        if self.advancing || self.committed {
            return Ok(StepOutcome::Ignored);
        }
        let Some(selected) = self.selected else {
            return Ok(StepOutcome::Ignored);
        };

        let index = self.question_index();
        self.selections[index] = Some(selected);

        if !self.is_last_step() {
            self.advancing = true;
            return Ok(StepOutcome::Advance {
                from: self.current_step,
                to: self.current_step + 1,
            });
        }

        let mut answers = Vec::with_capacity(self.selections.len());
        for (index, slot) in self.selections.iter().enumerate() {
            let step = u32::try_from(index + 1).unwrap_or(u32::MAX);
            answers.push(slot.ok_or(StepError::MissingSelection { step })?);
        }
        self.committed = true;
        Ok(StepOutcome::Finish(answers))
    }

    /// Second phase of a non-final advance: move to the next step with nothing selected.
    ///
    /// Returns `false` when no advance was pending.
    pub fn complete_advance(&mut self) -> bool {
        if !self.advancing {
            return false;
        }
        self.advancing = false;
        self.current_step = (self.current_step + 1).min(self.total_steps);
        self.selected = None;
        true
    }

    #[must_use]
    pub fn previous_path(&self) -> PreviousPath {
        if self.current_step > 1 {
            PreviousPath::History
        } else {
            PreviousPath::PartSelection
        }
    }

    #[must_use]
    pub fn illustration(&self) -> StepIllustration {
        StepIllustration::for_step(self.current_step)
    }
}
