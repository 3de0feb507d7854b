//! Shared error types for the services crate.

use thiserror::Error;

use escape_core::model::QuestionError;
use storage::repository::StorageError;

/// Errors emitted by `QuestionStore`, `ProgressTracker` and `EscapeRoom`.
///
/// `EscapeRoom::dispatch` absorbs `Invalid` into a `RoomEvent`; only
/// backend failures reach its caller.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RoomError {
    #[error(transparent)]
    Invalid(#[from] QuestionError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
