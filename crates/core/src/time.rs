use chrono::{DateTime, Utc};

/// Source of "now" for commit timestamps, frozen in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    System,
    Frozen(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn system() -> Self {
        Self::System
    }

    #[must_use]
    pub fn frozen(at: DateTime<Utc>) -> Self {
        Self::Frozen(at)
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Self::System => Utc::now(),
            Self::Frozen(at) => *at,
        }
    }
}

/// 2023-11-14T22:13:20Z
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// Deterministic timestamp for tests.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::frozen(fixed_now())
}
