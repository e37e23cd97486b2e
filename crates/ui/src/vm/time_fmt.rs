use chrono::{DateTime, Utc};

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M UTC").to_string()
}

#[cfg(test)]
mod tests {
    use quiz_core::time::fixed_now;

    use super::*;

    #[test]
    fn formats_to_the_minute() {
        assert_eq!(format_datetime(fixed_now()), "2023-11-14 22:13 UTC");
    }
}
