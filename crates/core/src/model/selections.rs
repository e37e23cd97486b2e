use chrono::{DateTime, Utc};

use crate::model::{OptionId, PartName};

/// Answers handed to the session once the last step is confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommittedSelections {
    part: Option<PartName>,
    option_ids: Vec<OptionId>,
    committed_at: DateTime<Utc>,
}

impl CommittedSelections {
    #[must_use]
    pub fn new(
        part: Option<PartName>,
        option_ids: Vec<OptionId>,
        committed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            part,
            option_ids,
            committed_at,
        }
    }

    #[must_use]
    pub fn part(&self) -> Option<&PartName> {
        self.part.as_ref()
    }

    #[must_use]
    pub fn option_ids(&self) -> &[OptionId] {
        &self.option_ids
    }

    #[must_use]
    pub fn committed_at(&self) -> DateTime<Utc> {
        self.committed_at
    }
}
