use crate::model::progress::Progress;
use crate::model::question_set::QuestionSet;

/// Where a player stands in the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    /// No questions exist; input is inert.
    Disabled,
    /// Waiting for the answer to the question at this position.
    AwaitingAnswer(usize),
    /// Every question has been solved.
    Completed,
}

impl PlayState {
    #[must_use]
    pub fn of(questions: &QuestionSet, progress: &Progress) -> Self {
        let len = questions.len();
        if len == 0 {
            return Self::Disabled;
        }
        let index = progress.current_index();
        if index >= len {
            Self::Completed
        } else {
            Self::AwaitingAnswer(index)
        }
    }

    #[must_use]
    pub fn accepts_answers(&self) -> bool {
        matches!(self, Self::AwaitingAnswer(_))
    }
}

/// Result of checking a submitted attempt against the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evaluation {
    /// Nothing to answer (empty store or run already complete).
    Ignored,
    Correct,
    Incorrect,
}

/// Case-insensitive comparison with surrounding whitespace removed on both sides.
#[must_use]
pub fn answers_match(attempt: &str, answer: &str) -> bool {
    attempt.trim().to_lowercase() == answer.trim().to_lowercase()
}

/// Check `attempt` against the question the progress cursor points at.
///
/// Pure: neither the set nor the progress is changed.
#[must_use]
pub fn evaluate(questions: &QuestionSet, progress: &Progress, attempt: &str) -> Evaluation {
    let PlayState::AwaitingAnswer(index) = PlayState::of(questions, progress) else {
        return Evaluation::Ignored;
    };
    let Some(current) = questions.get(index) else {
        return Evaluation::Ignored;
    };
    if answers_match(attempt, current.answer()) {
        Evaluation::Correct
    } else {
        Evaluation::Incorrect
    }
}
