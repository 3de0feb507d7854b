use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question answer cannot be empty")]
    EmptyAnswer,

    #[error("duplicate question id: {0}")]
    DuplicateId(QuestionId),
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Raw, untrimmed form input for a new question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionDraft {
    pub prompt: String,
    pub answer: String,
    pub hint: String,
}

impl QuestionDraft {
    #[must_use]
    pub fn new(
        prompt: impl Into<String>,
        answer: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
            hint: hint.into(),
        }
    }

    /// Trim every field and build a `Question` with a freshly generated id.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyPrompt` or `QuestionError::EmptyAnswer`
    /// when the respective field is empty after trimming.
    pub fn validate(self) -> Result<Question, QuestionError> {
        Question::from_persisted(
            QuestionId::generate(),
            self.prompt.trim(),
            self.answer.trim(),
            self.hint.trim(),
        )
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A single puzzle entry: prompt, expected answer and an optional hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    answer: String,
    hint: String,
}

impl Question {
    /// Rehydrate a question from persisted fields.
    ///
    /// Fields are stored as given; only the non-empty rule is enforced.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the prompt or answer is blank.
    pub fn from_persisted(
        id: QuestionId,
        prompt: impl Into<String>,
        answer: impl Into<String>,
        hint: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        let prompt = prompt.into();
        let answer = answer.into();
        if prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if answer.trim().is_empty() {
            return Err(QuestionError::EmptyAnswer);
        }
        Ok(Self {
            id,
            prompt,
            answer,
            hint: hint.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// The hint, or `None` when it was left blank.
    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        if self.hint.is_empty() {
            None
        } else {
            Some(&self.hint)
        }
    }

    /// The hint exactly as stored, empty string included.
    #[must_use]
    pub fn hint_raw(&self) -> &str {
        &self.hint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_trims_all_fields() {
        let question = QuestionDraft::new(" q ", " a ", " h ").validate().unwrap();
        assert_eq!(question.prompt(), "q");
        assert_eq!(question.answer(), "a");
        assert_eq!(question.hint(), Some("h"));
    }

    #[test]
    fn validate_rejects_blank_prompt() {
        let err = QuestionDraft::new("", "x", "").validate().unwrap_err();
        assert_eq!(err, QuestionError::EmptyPrompt);

        let err = QuestionDraft::new("   ", "x", "").validate().unwrap_err();
        assert_eq!(err, QuestionError::EmptyPrompt);
    }

    #[test]
    fn validate_rejects_blank_answer() {
        let err = QuestionDraft::new("x", "", "").validate().unwrap_err();
        assert_eq!(err, QuestionError::EmptyAnswer);
    }

    #[test]
    fn blank_hint_reads_as_none() {
        let question = QuestionDraft::new("q", "a", "   ").validate().unwrap();
        assert_eq!(question.hint(), None);
        assert_eq!(question.hint_raw(), "");
    }

    #[test]
    fn validate_generates_fresh_ids() {
        let a = QuestionDraft::new("q", "a", "").validate().unwrap();
        let b = QuestionDraft::new("q", "a", "").validate().unwrap();
        assert_ne!(a.id(), b.id());
    }
}
