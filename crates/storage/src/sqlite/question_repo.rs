use std::collections::HashMap;

use quiz_core::model::{Question, QuestionId};
use sqlx::Row;

use super::SqliteRepository;
use super::mapping::{
    option_id_from_i64, option_id_to_i64, position_to_i64, question_id_from_i64,
    question_id_to_i64,
};
use crate::repository::{QuestionRecord, QuestionRepository, StorageError};

fn conn<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

#[async_trait::async_trait]
impl QuestionRepository for SqliteRepository {
    async fn replace_questions(&self, questions: &[Question]) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await.map_err(conn)?;

        sqlx::query("DELETE FROM question_options")
            .execute(&mut *tx)
            .await
            .map_err(conn)?;
        sqlx::query("DELETE FROM questions")
            .execute(&mut *tx)
            .await
            .map_err(conn)?;

        for (position, question) in questions.iter().enumerate() {
            let question_id = question_id_to_i64(question.id())?;
            sqlx::query(
                r"
                INSERT INTO questions (id, position, title)
                VALUES (?1, ?2, ?3)
                ",
            )
            .bind(question_id)
            .bind(position_to_i64(position)?)
            .bind(question.title())
            .execute(&mut *tx)
            .await
            .map_err(conn)?;

            for (option_position, option) in question.options().iter().enumerate() {
                sqlx::query(
                    r"
                    INSERT INTO question_options (question_id, option_id, position, label)
                    VALUES (?1, ?2, ?3, ?4)
                    ",
                )
                .bind(question_id)
                .bind(option_id_to_i64(option.id())?)
                .bind(position_to_i64(option_position)?)
                .bind(option.label())
                .execute(&mut *tx)
                .await
                .map_err(conn)?;
            }
        }

        tx.commit().await.map_err(conn)?;
        Ok(())
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        let question_rows = sqlx::query(
            r"
            SELECT id, title
            FROM questions
            ORDER BY position ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(conn)?;

        let option_rows = sqlx::query(
            r"
            SELECT question_id, option_id, label
            FROM question_options
            ORDER BY question_id ASC, position ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(conn)?;

        let mut options_by_question: HashMap<QuestionId, Vec<_>> = HashMap::new();
        for row in option_rows {
            let question_id = question_id_from_i64(row.try_get("question_id").map_err(conn)?)?;
            let option_id = option_id_from_i64(row.try_get("option_id").map_err(conn)?)?;
            let label: String = row.try_get("label").map_err(conn)?;
            options_by_question
                .entry(question_id)
                .or_default()
                .push((option_id, label));
        }

        let mut questions = Vec::with_capacity(question_rows.len());
        for row in question_rows {
            let id = question_id_from_i64(row.try_get("id").map_err(conn)?)?;
            let title: String = row.try_get("title").map_err(conn)?;
            let record = QuestionRecord {
                id,
                title,
                options: options_by_question.remove(&id).unwrap_or_default(),
            };
            questions.push(record.into_question()?);
        }

        Ok(questions)
    }
}
