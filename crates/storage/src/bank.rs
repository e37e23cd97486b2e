//! Built-in question bank used to seed an empty database.

use quiz_core::model::{AnswerOption, OptionId, Question, QuestionError, QuestionId};

const DEFAULT_BANK: [(&str, [&str; 2]); 4] = [
    (
        "A new project kicks off. What do you reach for first?",
        ["A sketch of the screens", "A diagram of the data"],
    ),
    (
        "A bug report lands late on Friday.",
        ["Reproduce it right away", "Write it down for Monday"],
    ),
    (
        "Which review comment would make your day?",
        ["This feels great to use", "This will scale nicely"],
    ),
    (
        "Your ideal pairing session is...",
        ["Polishing details side by side", "Whiteboarding the architecture"],
    ),
];

/// The default four questions, each with options `0` and `1`.
///
/// # Errors
///
/// Returns `QuestionError` if the built-in data ever stops validating.
pub fn default_questions() -> Result<Vec<Question>, QuestionError> {
    DEFAULT_BANK
        .iter()
        .zip(1_u64..)
        .map(|((title, labels), id)| {
            let options = labels
                .iter()
                .zip(0_u64..)
                .map(|(label, option_id)| AnswerOption::new(OptionId::new(option_id), *label))
                .collect();
            Question::new(QuestionId::new(id), *title, options)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::TOTAL_STEPS;

    #[test]
    fn default_bank_covers_every_step() {
        let bank = default_questions().unwrap();
        assert_eq!(bank.len(), TOTAL_STEPS as usize);
        for question in &bank {
            let ids: Vec<_> = question.options().iter().map(AnswerOption::id).collect();
            assert_eq!(ids, vec![OptionId::new(0), OptionId::new(1)]);
        }
    }
}
