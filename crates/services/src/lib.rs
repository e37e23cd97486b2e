#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod http_source;
pub mod question_service;
pub mod question_source;
pub mod user_session;

pub use quiz_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, QuestionSourceError, SessionStoreError};
pub use http_source::{HttpQuestionSource, HttpSourceConfig};
pub use question_service::{QuestionLoad, QuestionService};
pub use question_source::{QuestionSource, RepositoryQuestionSource};
pub use user_session::{SessionIdentity, UserSession};
