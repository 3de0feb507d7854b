use std::sync::Arc;

use escape_core::model::{
    Evaluation, PlayState, Progress, QuestionDraft, QuestionError, QuestionId, QuestionSet,
    evaluate,
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use storage::repository::Storage;

use crate::error::RoomError;
use crate::flavor::{FeedbackKind, pick_flavor};
use crate::progress_tracker::ProgressTracker;
use crate::question_store::QuestionStore;

pub use crate::question_store::Confirmation;

/// User actions forwarded by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddQuestion(QuestionDraft),
    DeleteQuestion(QuestionId),
    SubmitAnswer(String),
    PlayAgain,
    RestoreDefaults(Confirmation),
}

/// What a dispatched command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomEvent {
    QuestionAdded(QuestionId),
    /// Blank prompt or answer; nothing was written.
    QuestionRejected(QuestionError),
    QuestionRemoved {
        id: QuestionId,
        removed: bool,
    },
    /// Empty store or finished run; nothing to answer.
    AnswerIgnored,
    AnswerAccepted {
        flavor: &'static str,
        new_index: usize,
        completed: bool,
    },
    AnswerRejected {
        flavor: &'static str,
    },
    RunReset,
    DefaultsRestored,
    RestoreDeclined,
}

/// Owned copy of the room state, handed to renderers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomSnapshot {
    pub questions: QuestionSet,
    pub progress: Progress,
}

impl RoomSnapshot {
    #[must_use]
    pub fn play_state(&self) -> PlayState {
        PlayState::of(&self.questions, &self.progress)
    }
}

/// Single owner of the question store, the progress tracker and the
/// random source used for flavor text.
///
/// Progress points at questions by position. Deleting an earlier question
/// shifts which question the cursor refers to.
pub struct EscapeRoom {
    questions: QuestionStore,
    progress: ProgressTracker,
    rng: Box<dyn RngCore + Send + Sync>,
}

impl EscapeRoom {
    /// Load both records from `storage`, seeding defaults on first run.
    ///
    /// # Errors
    ///
    /// Returns `RoomError::Storage` if either record cannot be read or the
    /// seed cannot be written.
    pub async fn open(storage: &Storage) -> Result<Self, RoomError> {
        let questions = QuestionStore::load(Arc::clone(&storage.questions)).await?;
        let progress = ProgressTracker::load(Arc::clone(&storage.progress)).await?;
        log::info!(
            "room opened with {} questions at index {}",
            questions.len(),
            progress.current_index()
        );
        Ok(Self {
            questions,
            progress,
            rng: Box::new(StdRng::from_os_rng()),
        })
    }

    /// Replace the random source, e.g. with a seeded rng in tests.
    #[must_use]
    pub fn with_rng(mut self, rng: impl RngCore + Send + Sync + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    #[must_use]
    pub fn questions(&self) -> &QuestionSet {
        self.questions.questions()
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.progress.progress()
    }

    #[must_use]
    pub fn play_state(&self) -> PlayState {
        PlayState::of(self.questions.questions(), &self.progress.progress())
    }

    #[must_use]
    pub fn snapshot(&self) -> RoomSnapshot {
        RoomSnapshot {
            questions: self.questions.questions().clone(),
            progress: self.progress.progress(),
        }
    }

    /// Apply one user command and persist its effects before returning.
    ///
    /// # Errors
    ///
    /// Returns `RoomError::Storage` if a write fails. Validation failures are
    /// reported as `RoomEvent::QuestionRejected` instead.
    pub async fn dispatch(&mut self, command: Command) -> Result<RoomEvent, RoomError> {
        match command {
            Command::AddQuestion(draft) => match self.questions.add(draft).await {
                Ok(id) => Ok(RoomEvent::QuestionAdded(id)),
                Err(RoomError::Invalid(reason)) => {
                    log::debug!("question rejected: {reason}");
                    Ok(RoomEvent::QuestionRejected(reason))
                }
                Err(err) => Err(err),
            },
            Command::DeleteQuestion(id) => {
                let removed = self.questions.remove(&id).await?;
                self.progress.clamp_to(self.questions.len()).await?;
                Ok(RoomEvent::QuestionRemoved { id, removed })
            }
            Command::SubmitAnswer(attempt) => self.submit_answer(&attempt).await,
            Command::PlayAgain => {
                self.progress.reset().await?;
                Ok(RoomEvent::RunReset)
            }
            Command::RestoreDefaults(confirmation) => {
                if self.questions.restore_defaults(confirmation).await? {
                    self.progress.reset().await?;
                    Ok(RoomEvent::DefaultsRestored)
                } else {
                    Ok(RoomEvent::RestoreDeclined)
                }
            }
        }
    }

    async fn submit_answer(&mut self, attempt: &str) -> Result<RoomEvent, RoomError> {
        let progress = self.progress.progress();
        match evaluate(self.questions.questions(), &progress, attempt) {
            Evaluation::Ignored => Ok(RoomEvent::AnswerIgnored),
            Evaluation::Incorrect => Ok(RoomEvent::AnswerRejected {
                flavor: pick_flavor(FeedbackKind::Failure, &mut self.rng),
            }),
            Evaluation::Correct => {
                let flavor = pick_flavor(FeedbackKind::Success, &mut self.rng);
                let new_index = self.progress.record_correct_answer().await?;
                let completed = new_index >= self.questions.len();
                if completed {
                    log::info!("run completed after {new_index} puzzles");
                }
                Ok(RoomEvent::AnswerAccepted {
                    flavor,
                    new_index,
                    completed,
                })
            }
        }
    }
}
