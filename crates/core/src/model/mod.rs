mod ids;
mod illustration;
mod part;
mod question;
mod selections;
mod step;

pub use ids::{OptionId, ParseIdError, QuestionId};
pub use illustration::StepIllustration;
pub use part::{PartError, PartName};
pub use question::{AnswerOption, Question, QuestionError};
pub use selections::CommittedSelections;
pub use step::{PreviousPath, StepError, StepOutcome, StepState, TOTAL_STEPS};
