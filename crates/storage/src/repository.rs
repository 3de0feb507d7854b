use async_trait::async_trait;
use escape_core::model::{Progress, Question};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::records::{
    PROGRESS_KEY, QUESTIONS_KEY, decode_progress, decode_questions, encode_progress,
    encode_questions,
};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for the ordered question list.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Fetch the persisted question list.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the stored record is malformed,
    /// or other storage errors.
    async fn load_questions(&self) -> Result<Option<Vec<Question>>, StorageError>;

    /// Replace the persisted list with `questions`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the list cannot be stored.
    async fn save_questions(&self, questions: &[Question]) -> Result<(), StorageError>;
}

/// Repository contract for the progress cursor.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Fetch persisted progress, `Ok(None)` if absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the stored record is malformed,
    /// or other storage errors.
    async fn load_progress(&self) -> Result<Option<Progress>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if progress cannot be stored.
    async fn save_progress(&self, progress: &Progress) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
///
/// Payloads are kept encoded, exactly as a durable backend would hold them.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    records: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Raw payload stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    /// Overwrite the payload under `key` without any validation.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the lock is poisoned.
    pub fn put_raw(&self, key: &str, payload: impl Into<String>) -> Result<(), StorageError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_string(), payload.into());
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn load_questions(&self) -> Result<Option<Vec<Question>>, StorageError> {
        self.raw(QUESTIONS_KEY)?
            .map(|payload| decode_questions(&payload))
            .transpose()
    }

    async fn save_questions(&self, questions: &[Question]) -> Result<(), StorageError> {
        let payload = encode_questions(questions)?;
        self.put_raw(QUESTIONS_KEY, payload)
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn load_progress(&self) -> Result<Option<Progress>, StorageError> {
        self.raw(PROGRESS_KEY)?
            .map(|payload| decode_progress(&payload))
            .transpose()
    }

    async fn save_progress(&self, progress: &Progress) -> Result<(), StorageError> {
        let payload = encode_progress(progress)?;
        self.put_raw(PROGRESS_KEY, payload)
    }
}

/// Aggregates the two record repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionRepository>,
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_in_memory(InMemoryRepository::new())
    }

    /// Wrap an existing in-memory repository, keeping a handle for inspection.
    #[must_use]
    pub fn from_in_memory(repo: InMemoryRepository) -> Self {
        let questions: Arc<dyn QuestionRepository> = Arc::new(repo.clone());
        let progress: Arc<dyn ProgressRepository> = Arc::new(repo);
        Self {
            questions,
            progress,
        }
    }
}
