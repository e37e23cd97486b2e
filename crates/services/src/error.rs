//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{QuestionError, QuestionId};
use storage::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted while listing questions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionSourceError {
    #[error("question request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("question payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] QuestionError),
    #[error("question id {0} appears more than once in the payload")]
    DuplicateQuestion(QuestionId),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("question load was cancelled")]
    Cancelled,
    #[error("question load task failed: {0}")]
    Task(String),
}

/// Errors emitted by `UserSession`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionStoreError {
    #[error("selections were already committed for this session")]
    AlreadyCommitted,
    #[error("cannot commit an empty selection list")]
    EmptySelections,
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
