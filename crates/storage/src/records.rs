//! Persisted record layout shared by every backend.
//!
//! Two independent records, each a JSON document under its own key.

use escape_core::model::{Progress, Question, QuestionId};
use serde::{Deserialize, Serialize};

use crate::repository::StorageError;

/// Key of the question list record.
pub const QUESTIONS_KEY: &str = "escape_room.questions";

/// Key of the progress record.
pub const PROGRESS_KEY: &str = "escape_room.progress";

/// Persisted shape for a question.
///
/// Mirrors the domain `Question` so repositories can serialize/deserialize
/// without leaking storage concerns into the domain layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: QuestionId,
    pub prompt: String,
    pub answer: String,
    /// Absent and `null` both mean "no hint".
    #[serde(default)]
    pub hint: Option<String>,
}

impl QuestionRecord {
    #[must_use]
    pub fn from_question(question: &Question) -> Self {
        Self {
            id: question.id().clone(),
            prompt: question.prompt().to_owned(),
            answer: question.answer().to_owned(),
            hint: Some(question.hint_raw().to_owned()),
        }
    }

    /// Convert the record back into a domain `Question`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the prompt or answer is blank.
    pub fn into_question(self) -> Result<Question, StorageError> {
        Question::from_persisted(self.id, self.prompt, self.answer, self.hint.unwrap_or_default())
            .map_err(|e| StorageError::Serialization(e.to_string()))
    }
}

/// Persisted shape for progress: `{"currentIndex": n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub current_index: u64,
}

impl ProgressRecord {
    #[must_use]
    pub fn from_progress(progress: &Progress) -> Self {
        Self {
            current_index: progress.current_index() as u64,
        }
    }

    /// # Errors
    ///
    /// Returns `StorageError::Serialization` if the index does not fit `usize`.
    pub fn into_progress(self) -> Result<Progress, StorageError> {
        let index = usize::try_from(self.current_index)
            .map_err(|_| StorageError::Serialization("currentIndex overflow".into()))?;
        Ok(Progress::at(index))
    }
}

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

/// Encode the full question list.
///
/// # Errors
///
/// Returns `StorageError::Serialization` if JSON encoding fails.
pub fn encode_questions(questions: &[Question]) -> Result<String, StorageError> {
    let records: Vec<QuestionRecord> = questions.iter().map(QuestionRecord::from_question).collect();
    serde_json::to_string(&records).map_err(ser)
}

/// Decode a question list payload.
///
/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON or invalid entries.
pub fn decode_questions(payload: &str) -> Result<Vec<Question>, StorageError> {
    let records: Vec<QuestionRecord> = serde_json::from_str(payload).map_err(ser)?;
    records.into_iter().map(QuestionRecord::into_question).collect()
}

/// # Errors
///
/// Returns `StorageError::Serialization` if JSON encoding fails.
pub fn encode_progress(progress: &Progress) -> Result<String, StorageError> {
    serde_json::to_string(&ProgressRecord::from_progress(progress)).map_err(ser)
}

/// # Errors
///
/// Returns `StorageError::Serialization` for malformed JSON or a negative index.
pub fn decode_progress(payload: &str) -> Result<Progress, StorageError> {
    let record: ProgressRecord = serde_json::from_str(payload).map_err(ser)?;
    record.into_progress()
}

#[cfg(test)]
mod tests {
    use super::*;
    use escape_core::model::QuestionDraft;

    #[test]
    fn question_payload_uses_flat_field_names() {
        let question = QuestionDraft::new("q", "a", "h").validate().unwrap();
        let payload = encode_questions(std::slice::from_ref(&question)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();
        assert_eq!(value[0]["id"], question.id().as_str());
        assert_eq!(value[0]["prompt"], "q");
        assert_eq!(value[0]["answer"], "a");
        assert_eq!(value[0]["hint"], "h");
    }

    #[test]
    fn missing_hint_decodes_as_empty() {
        let questions =
            decode_questions(r#"[{"id":"x1","prompt":"p","answer":"a"}]"#).unwrap();
        assert_eq!(questions[0].hint(), None);
    }

    #[test]
    fn null_hint_decodes_as_empty() {
        let questions =
            decode_questions(r#"[{"id":"x1","prompt":"p","answer":"a","hint":null}]"#).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].hint(), None);
        assert_eq!(questions[0].hint_raw(), "");
    }

    #[test]
    fn blank_id_is_rejected_as_malformed() {
        let err = decode_questions(r#"[{"id":"  ","prompt":"p","answer":"a"}]"#).unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[test]
    fn blank_answer_is_rejected_as_malformed() {
        let err = decode_questions(r#"[{"id":"x1","prompt":"p","answer":"  "}]"#).unwrap_err();
        assert!(matches!(err, StorageError::Serialization(_)));
    }

    #[test]
    fn progress_payload_is_camel_case() {
        let payload = encode_progress(&Progress::at(2)).unwrap();
        assert_eq!(payload, r#"{"currentIndex":2}"#);
        assert_eq!(decode_progress(&payload).unwrap(), Progress::at(2));
    }

    #[test]
    fn negative_progress_is_malformed() {
        assert!(decode_progress(r#"{"currentIndex":-1}"#).is_err());
        assert!(decode_progress("not json").is_err());
    }
}
