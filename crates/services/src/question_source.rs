use std::sync::Arc;

use async_trait::async_trait;
use quiz_core::model::Question;
use storage::QuestionRepository;

use crate::error::QuestionSourceError;

/// Anything that can hand out the ordered question list.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// # Errors
    ///
    /// Returns `QuestionSourceError` when the questions cannot be fetched or decoded.
    async fn list_questions(&self) -> Result<Vec<Question>, QuestionSourceError>;
}

/// Serves questions straight from a storage repository.
#[derive(Clone)]
pub struct RepositoryQuestionSource {
    repo: Arc<dyn QuestionRepository>,
}

impl RepositoryQuestionSource {
    #[must_use]
    pub fn new(repo: Arc<dyn QuestionRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl QuestionSource for RepositoryQuestionSource {
    async fn list_questions(&self) -> Result<Vec<Question>, QuestionSourceError> {
        Ok(self.repo.list_questions().await?)
    }
}
