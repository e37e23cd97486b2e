use std::sync::Arc;

use quiz_core::model::Question;
use tokio::task::JoinHandle;

use crate::error::QuestionSourceError;
use crate::question_source::QuestionSource;

/// Entry point the question page uses to get its questions.
#[derive(Clone)]
pub struct QuestionService {
    source: Arc<dyn QuestionSource>,
}

impl QuestionService {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self { source }
    }

    /// # Errors
    ///
    /// Returns `QuestionSourceError` from the underlying source.
    pub async fn list_questions(&self) -> Result<Vec<Question>, QuestionSourceError> {
        self.source.list_questions().await
    }

    /// Start fetching on the runtime and return a handle that owns the fetch.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn spawn_load(&self) -> QuestionLoad {
        let source = Arc::clone(&self.source);
        let handle = tokio::spawn(async move { source.list_questions().await });
        QuestionLoad {
            handle: Some(handle),
        }
    }
}

/// An in-flight question fetch.
///
/// Dropping the handle aborts the fetch, so a result that arrives after the
/// owner went away is never observed.
#[derive(Debug)]
pub struct QuestionLoad {
    handle: Option<JoinHandle<Result<Vec<Question>, QuestionSourceError>>>,
}

impl QuestionLoad {
    /// Abort the fetch. A later `wait` resolves to `QuestionSourceError::Cancelled`.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().is_none_or(JoinHandle::is_finished)
    }

    /// Wait for the fetch. If this future is dropped early the fetch is aborted.
    ///
    /// # Errors
    ///
    /// Returns the source error, `QuestionSourceError::Cancelled` after `cancel`,
    /// or `QuestionSourceError::Task` if the fetch panicked.
    pub async fn wait(mut self) -> Result<Vec<Question>, QuestionSourceError> {
        let Some(handle) = self.handle.as_mut() else {
            return Err(QuestionSourceError::Cancelled);
        };
        let joined = handle.await;
        self.handle = None;

        match joined {
            Ok(result) => result,
            Err(err) if err.is_cancelled() => Err(QuestionSourceError::Cancelled),
            Err(err) => Err(QuestionSourceError::Task(err.to_string())),
        }
    }
}

impl Drop for QuestionLoad {
    fn drop(&mut self) {
        self.cancel();
    }
}
