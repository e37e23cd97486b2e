use quiz_core::model::{CommittedSelections, OptionId, Question};

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRowVm {
    pub step: u32,
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultVm {
    pub display_name: String,
    pub part_label: String,
    pub committed_at_str: String,
    pub rows: Vec<ResultRowVm>,
}

/// Pair each committed answer with the question it was given for.
///
/// Steps without a matching question, or answers the question no longer
/// offers, fall back to showing the raw ids.
#[must_use]
pub fn map_result(
    display_name: &str,
    committed: &CommittedSelections,
    questions: &[Question],
) -> ResultVm {
    let rows = committed
        .option_ids()
        .iter()
        .zip(1_u32..)
        .map(|(&option_id, step)| {
            let question = usize::try_from(step - 1)
                .ok()
                .and_then(|index| questions.get(index));
            row_for(step, question, option_id)
        })
        .collect();

    ResultVm {
        display_name: display_name.to_string(),
        part_label: committed
            .part()
            .map_or_else(|| "No part selected".to_string(), ToString::to_string),
        committed_at_str: format_datetime(committed.committed_at()),
        rows,
    }
}

fn row_for(step: u32, question: Option<&Question>, option_id: OptionId) -> ResultRowVm {
    let Some(question) = question else {
        return ResultRowVm {
            step,
            question: format!("Question {step}"),
            answer: format!("Option {option_id}"),
        };
    };
    let answer = question
        .option(option_id)
        .map_or_else(|| format!("Option {option_id}"), |option| option.label().to_string());
    ResultRowVm {
        step,
        question: question.title().to_string(),
        answer,
    }
}
