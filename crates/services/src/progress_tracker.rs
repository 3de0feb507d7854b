use std::sync::Arc;

use escape_core::model::Progress;
use storage::repository::{ProgressRepository, StorageError};

use crate::error::RoomError;

/// Persisted cursor over the question store.
pub struct ProgressTracker {
    repo: Arc<dyn ProgressRepository>,
    progress: Progress,
}

impl ProgressTracker {
    /// Load persisted progress, defaulting to index 0 when absent or malformed.
    ///
    /// # Errors
    ///
    /// Returns `RoomError::Storage` if the backend cannot be read.
    pub async fn load(repo: Arc<dyn ProgressRepository>) -> Result<Self, RoomError> {
        let progress = match repo.load_progress().await {
            Ok(Some(progress)) => progress,
            Ok(None) => Progress::new(),
            Err(StorageError::Serialization(reason)) => {
                log::warn!("stored progress is malformed ({reason}); starting from 0");
                Progress::new()
            }
            Err(err) => return Err(err.into()),
        };
        Ok(Self { repo, progress })
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.progress
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.progress.current_index()
    }

    /// Advance by one and persist. The caller compares the returned index
    /// against the store length to detect completion.
    ///
    /// # Errors
    ///
    /// Returns `RoomError::Storage` if the write fails.
    pub async fn record_correct_answer(&mut self) -> Result<usize, RoomError> {
        let mut next = self.progress;
        let index = next.advance();
        self.save(next).await?;
        Ok(index)
    }

    /// # Errors
    ///
    /// Returns `RoomError::Storage` if the write fails.
    pub async fn reset(&mut self) -> Result<(), RoomError> {
        self.save(Progress::new()).await
    }

    /// Repair the cursor after the store shrank to `len` questions, then persist.
    ///
    /// # Errors
    ///
    /// Returns `RoomError::Storage` if the write fails.
    pub async fn clamp_to(&mut self, len: usize) -> Result<(), RoomError> {
        let mut next = self.progress;
        if next.clamp_to(len) {
            log::debug!(
                "progress clamped from {} to {}",
                self.progress.current_index(),
                next.current_index()
            );
        }
        self.save(next).await
    }

    async fn save(&mut self, next: Progress) -> Result<(), RoomError> {
        self.repo.save_progress(&next).await?;
        self.progress = next;
        Ok(())
    }
}
