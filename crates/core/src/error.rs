use thiserror::Error;

use crate::model::{PartError, QuestionError, StepError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Part(#[from] PartError),
    #[error(transparent)]
    Step(#[from] StepError),
}
