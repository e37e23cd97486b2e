use async_trait::async_trait;
use quiz_core::model::{AnswerOption, OptionId, Question, QuestionError, QuestionId};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    InvalidQuestion(#[from] QuestionError),
}

/// Persisted shape of a question: flat strings and ids, validated on the way out.
#[derive(Debug, Clone)]
pub struct QuestionRecord {
    pub id: QuestionId,
    pub title: String,
    pub options: Vec<(OptionId, String)>,
}

impl QuestionRecord {
    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        Self {
            id: question.id(),
            title: question.title().to_owned(),
            options: question
                .options()
                .iter()
                .map(|option| (option.id(), option.label().to_owned()))
                .collect(),
        }
    }

    /// Convert the record back into a domain `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the stored row no longer passes validation.
    pub fn into_question(self) -> Result<Question, QuestionError> {
        let options = self
            .options
            .into_iter()
            .map(|(id, label)| AnswerOption::new(id, label))
            .collect();
        Question::new(self.id, self.title, options)
    }
}

/// Repository contract for the ordered question bank.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Replace the whole bank, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the questions cannot be stored.
    async fn replace_questions(&self, questions: &[Question]) -> Result<(), StorageError>;

    /// All questions in quiz order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` on connection failures or rows that fail validation.
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    questions: Arc<Mutex<Vec<QuestionRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_questions(questions: &[Question]) -> Self {
        let records = questions.iter().map(QuestionRecord::from_question).collect();
        Self {
            questions: Arc::new(Mutex::new(records)),
        }
    }
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn replace_questions(&self, questions: &[Question]) -> Result<(), StorageError> {
        let mut guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = questions.iter().map(QuestionRecord::from_question).collect();
        Ok(())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        let guard = self
            .questions
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard
            .iter()
            .cloned()
            .map(|record| record.into_question().map_err(StorageError::from))
            .collect()
    }
}

/// Repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let questions: Arc<dyn QuestionRepository> = Arc::new(InMemoryRepository::new());
        Self { questions }
    }
}
