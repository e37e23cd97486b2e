use std::sync::Arc;

use storage::bank::default_questions;
use storage::{QuestionRepository, Storage};

use crate::Clock;
use crate::error::AppServicesError;
use crate::http_source::{HttpQuestionSource, HttpSourceConfig};
use crate::question_service::QuestionService;
use crate::question_source::{QuestionSource, RepositoryQuestionSource};
use crate::user_session::{SessionIdentity, UserSession};

/// Assembles the services the UI talks to.
#[derive(Clone)]
pub struct AppServices {
    questions: Arc<QuestionService>,
    session: Arc<UserSession>,
}

impl AppServices {
    #[must_use]
    pub fn from_source(
        source: Arc<dyn QuestionSource>,
        identity: SessionIdentity,
        clock: Clock,
    ) -> Self {
        Self {
            questions: Arc::new(QuestionService::new(source)),
            session: Arc::new(UserSession::new(identity, clock)),
        }
    }

    /// Questions come from the REST API.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Http` if the HTTP client cannot be built.
    pub fn new_http(
        config: HttpSourceConfig,
        identity: SessionIdentity,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        tracing::info!(url = %config.questions_url(), "using http question source");
        let source: Arc<dyn QuestionSource> = Arc::new(HttpQuestionSource::new(config)?);
        Ok(Self::from_source(source, identity, clock))
    }

    /// Questions come from a local `SQLite` bank, seeded on first use.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or seeding fails.
    pub async fn new_sqlite(
        db_url: &str,
        identity: SessionIdentity,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        ensure_question_bank(storage.questions.as_ref()).await?;
        tracing::info!(db_url, "using sqlite question source");

        let source: Arc<dyn QuestionSource> =
            Arc::new(RepositoryQuestionSource::new(Arc::clone(&storage.questions)));
        Ok(Self::from_source(source, identity, clock))
    }

    #[must_use]
    pub fn questions(&self) -> Arc<QuestionService> {
        Arc::clone(&self.questions)
    }

    #[must_use]
    pub fn session(&self) -> Arc<UserSession> {
        Arc::clone(&self.session)
    }
}

/// Seed the default bank when the repository is empty. Returns how many questions were written.
///
/// # Errors
///
/// Returns `AppServicesError` if the repository cannot be read or written.
pub async fn ensure_question_bank(repo: &dyn QuestionRepository) -> Result<usize, AppServicesError> {
    if !repo.list_questions().await?.is_empty() {
        return Ok(0);
    }

    let questions = default_questions()?;
    repo.replace_questions(&questions).await?;
    tracing::info!(count = questions.len(), "seeded default question bank");
    Ok(questions.len())
}
