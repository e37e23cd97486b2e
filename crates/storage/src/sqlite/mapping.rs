use quiz_core::model::{OptionId, QuestionId};

use crate::repository::StorageError;

fn i64_to_u64(field: &'static str, v: i64) -> Result<u64, StorageError> {
    u64::try_from(v).map_err(|_| StorageError::Serialization(format!("{field} sign overflow")))
}

fn u64_to_i64(field: &'static str, v: u64) -> Result<i64, StorageError> {
    i64::try_from(v).map_err(|_| StorageError::Serialization(format!("{field} overflow")))
}

pub(crate) fn question_id_from_i64(v: i64) -> Result<QuestionId, StorageError> {
    Ok(QuestionId::new(i64_to_u64("question_id", v)?))
}

pub(crate) fn question_id_to_i64(id: QuestionId) -> Result<i64, StorageError> {
    u64_to_i64("question_id", id.value())
}

pub(crate) fn option_id_from_i64(v: i64) -> Result<OptionId, StorageError> {
    Ok(OptionId::new(i64_to_u64("option_id", v)?))
}

pub(crate) fn option_id_to_i64(id: OptionId) -> Result<i64, StorageError> {
    u64_to_i64("option_id", id.value())
}

pub(crate) fn position_to_i64(index: usize) -> Result<i64, StorageError> {
    i64::try_from(index).map_err(|_| StorageError::Serialization("position overflow".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_ids_are_rejected() {
        assert!(question_id_from_i64(-1).is_err());
        assert!(option_id_from_i64(-5).is_err());
    }

    #[test]
    fn oversized_ids_are_rejected() {
        assert!(option_id_to_i64(OptionId::new(u64::MAX)).is_err());
        assert_eq!(question_id_to_i64(QuestionId::new(3)).unwrap(), 3);
    }
}
