mod part;
mod question;
mod result;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use part::PartView;
pub use question::QuestionView;
pub use result::ResultView;
pub use state::{ViewError, ViewState, view_state_from_resource};
