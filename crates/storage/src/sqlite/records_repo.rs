use async_trait::async_trait;
use chrono::Utc;
use escape_core::model::{Progress, Question};
use sqlx::Row;

use super::SqliteRepository;
use crate::records::{
    PROGRESS_KEY, QUESTIONS_KEY, decode_progress, decode_questions, encode_progress,
    encode_questions,
};
use crate::repository::{ProgressRepository, QuestionRepository, StorageError};

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

impl SqliteRepository {
    async fn read_record(&self, key: &str) -> Result<Option<String>, StorageError> {
        let row = sqlx::query("SELECT payload FROM records WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };
        row.try_get::<String, _>("payload").map(Some).map_err(ser)
    }

    async fn write_record(&self, key: &str, payload: String) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO records (key, payload, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at
            ",
        )
        .bind(key)
        .bind(payload)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for SqliteRepository {
    async fn load_questions(&self) -> Result<Option<Vec<Question>>, StorageError> {
        self.read_record(QUESTIONS_KEY)
            .await?
            .map(|payload| decode_questions(&payload))
            .transpose()
    }

    async fn save_questions(&self, questions: &[Question]) -> Result<(), StorageError> {
        let payload = encode_questions(questions)?;
        self.write_record(QUESTIONS_KEY, payload).await
    }
}

#[async_trait]
impl ProgressRepository for SqliteRepository {
    async fn load_progress(&self) -> Result<Option<Progress>, StorageError> {
        self.read_record(PROGRESS_KEY)
            .await?
            .map(|payload| decode_progress(&payload))
            .transpose()
    }

    async fn save_progress(&self, progress: &Progress) -> Result<(), StorageError> {
        let payload = encode_progress(progress)?;
        self.write_record(PROGRESS_KEY, payload).await
    }
}
