use std::sync::Arc;

use escape_core::model::{QuestionDraft, QuestionId, QuestionSet};
use storage::repository::{QuestionRepository, StorageError};

use crate::error::RoomError;

/// Explicit answer to the "replace everything with the defaults?" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Granted,
    Declined,
}

/// Persisted, ordered question list.
///
/// Every mutation writes the full list back before returning.
pub struct QuestionStore {
    repo: Arc<dyn QuestionRepository>,
    questions: QuestionSet,
}

impl QuestionStore {
    /// Load the persisted list, seeding the default set on first run.
    ///
    /// A malformed record is replaced by a fresh default set.
    ///
    /// # Errors
    ///
    /// Returns `RoomError::Storage` if the backend cannot be read or written.
    pub async fn load(repo: Arc<dyn QuestionRepository>) -> Result<Self, RoomError> {
        let loaded = match repo.load_questions().await {
            Ok(Some(items)) => match QuestionSet::from_persisted(items) {
                Ok(set) => Some(set),
                Err(err) => {
                    log::warn!("stored questions rejected ({err}); reseeding defaults");
                    None
                }
            },
            Ok(None) => None,
            Err(StorageError::Serialization(reason)) => {
                log::warn!("stored questions are malformed ({reason}); reseeding defaults");
                None
            }
            Err(err) => return Err(err.into()),
        };

        let store = match loaded {
            Some(questions) => Self { repo, questions },
            None => {
                let store = Self {
                    repo,
                    questions: QuestionSet::defaults(),
                };
                store.persist().await?;
                log::info!("seeded {} default questions", store.questions.len());
                store
            }
        };
        Ok(store)
    }

    #[must_use]
    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Validate, trim and append a question, returning its new id.
    ///
    /// # Errors
    ///
    /// Returns `RoomError::Invalid` without touching storage when the prompt
    /// or answer is blank, or `RoomError::Storage` if the write fails.
    pub async fn add(&mut self, draft: QuestionDraft) -> Result<QuestionId, RoomError> {
        let question = draft.validate()?;
        let id = question.id().clone();
        let mut next = self.questions.clone();
        next.push(question)?;
        self.repo.save_questions(next.as_slice()).await?;
        self.questions = next;
        Ok(id)
    }

    /// Remove the question with `id`. Absent ids are not an error.
    ///
    /// Returns whether a question was removed.
    ///
    /// # Errors
    ///
    /// Returns `RoomError::Storage` if the write fails.
    pub async fn remove(&mut self, id: &QuestionId) -> Result<bool, RoomError> {
        let mut next = self.questions.clone();
        let removed = next.remove(id).is_some();
        self.repo.save_questions(next.as_slice()).await?;
        self.questions = next;
        Ok(removed)
    }

    /// Replace every question with fresh copies of the default set.
    ///
    /// Does nothing unless `confirmation` is `Granted`; returns whether the
    /// store was replaced.
    ///
    /// # Errors
    ///
    /// Returns `RoomError::Storage` if the write fails.
    pub async fn restore_defaults(&mut self, confirmation: Confirmation) -> Result<bool, RoomError> {
        if confirmation == Confirmation::Declined {
            return Ok(false);
        }
        let next = QuestionSet::defaults();
        self.repo.save_questions(next.as_slice()).await?;
        self.questions = next;
        log::info!("restored {} default questions", self.questions.len());
        Ok(true)
    }

    async fn persist(&self) -> Result<(), RoomError> {
        self.repo.save_questions(self.questions.as_slice()).await?;
        Ok(())
    }
}
