use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{OptionId, QuestionId};

/// One selectable answer of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    id: OptionId,
    label: String,
}

impl AnswerOption {
    #[must_use]
    pub fn new(id: OptionId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> OptionId {
        self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A quiz question with its ordered options.
///
/// Questions are validated on construction and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: QuestionId,
    title: String,
    options: Vec<AnswerOption>,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyTitle` if the title is blank after trimming,
    /// `QuestionError::NoOptions` if there is nothing to choose from, and
    /// `QuestionError::DuplicateOption` if two options share an id.
    pub fn new(
        id: QuestionId,
        title: impl Into<String>,
        options: Vec<AnswerOption>,
    ) -> Result<Self, QuestionError> {
        let title = title.into();
        let title = title.trim();
        if title.is_empty() {
            return Err(QuestionError::EmptyTitle { id });
        }
        if options.is_empty() {
            return Err(QuestionError::NoOptions { id });
        }

        let mut seen = HashSet::with_capacity(options.len());
        for option in &options {
            if !seen.insert(option.id()) {
                return Err(QuestionError::DuplicateOption {
                    id,
                    option: option.id(),
                });
            }
        }

        Ok(Self {
            id,
            title: title.to_string(),
            options,
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, id: OptionId) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.id() == id)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question {id} has an empty title")]
    EmptyTitle { id: QuestionId },
    #[error("question {id} has no options")]
    NoOptions { id: QuestionId },
    #[error("question {id} repeats option id {option}")]
    DuplicateOption { id: QuestionId, option: OptionId },
}
