//! Render-ready views of the room state.

use escape_core::model::{PlayState, Progress, QuestionId, QuestionSet};

use crate::flavor::FeedbackKind;
use crate::room::{RoomEvent, RoomSnapshot};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminItemView {
    pub id: QuestionId,
    pub badge: String,
    pub prompt: String,
    pub answer_label: String,
    pub hint_label: Option<String>,
}

/// The admin list: count plus one row per question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminListView {
    pub count_label: String,
    pub items: Vec<AdminItemView>,
}

impl AdminListView {
    pub const EMPTY_MESSAGE: &'static str = "No questions configured.";

    #[must_use]
    pub fn build(questions: &QuestionSet) -> Self {
        let items = questions
            .iter()
            .enumerate()
            .map(|(index, question)| AdminItemView {
                id: question.id().clone(),
                badge: (index + 1).to_string(),
                prompt: question.prompt().to_string(),
                answer_label: format!("Answer: {}", question.answer()),
                hint_label: question.hint().map(|hint| format!("Hint: {hint}")),
            })
            .collect();
        Self {
            count_label: format!("{} loaded", questions.len()),
            items,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// What the player panel should show.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerView {
    Empty,
    Active {
        prompt: String,
        hint: Option<String>,
        label: String,
        fraction: f64,
    },
    Complete {
        total: usize,
    },
}

impl PlayerView {
    pub const WAITING_PROMPT: &'static str = "Waiting for the control room...";
    pub const EMPTY_LABEL: &'static str = "No questions yet";

    #[must_use]
    pub fn build(questions: &QuestionSet, progress: &Progress) -> Self {
        let total = questions.len();
        match PlayState::of(questions, progress) {
            PlayState::Disabled => Self::Empty,
            PlayState::Completed => Self::Complete { total },
            PlayState::AwaitingAnswer(index) => {
                let Some(current) = questions.get(index) else {
                    return Self::Empty;
                };
                Self::Active {
                    prompt: current.prompt().to_string(),
                    hint: current.hint().map(str::to_string),
                    label: format!("Puzzle {} of {}", index + 1, total),
                    fraction: progress_fraction(index, total),
                }
            }
        }
    }

    #[must_use]
    pub fn from_snapshot(snapshot: &RoomSnapshot) -> Self {
        Self::build(&snapshot.questions, &snapshot.progress)
    }

    #[must_use]
    pub fn accepts_input(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    /// Share of puzzles solved, in `[0, 1]`.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        match self {
            Self::Empty => 0.0,
            Self::Active { fraction, .. } => *fraction,
            Self::Complete { .. } => 1.0,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn progress_fraction(solved: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (solved.min(total) as f64) / (total as f64)
}

/// Feedback line shown under the answer form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackView {
    pub kind: FeedbackKind,
    pub text: String,
}

impl FeedbackView {
    /// Feedback for an answer event; `None` for everything else.
    #[must_use]
    pub fn from_event(event: &RoomEvent) -> Option<Self> {
        match event {
            RoomEvent::AnswerAccepted { flavor, .. } => Some(Self {
                kind: FeedbackKind::Success,
                text: (*flavor).to_string(),
            }),
            RoomEvent::AnswerRejected { flavor } => Some(Self {
                kind: FeedbackKind::Failure,
                text: (*flavor).to_string(),
            }),
            _ => None,
        }
    }

    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self.kind {
            FeedbackKind::Success => "feedback success",
            FeedbackKind::Failure => "feedback error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use escape_core::model::QuestionDraft;

    #[test]
    fn admin_list_numbers_items_and_labels_hints() {
        let mut set = QuestionSet::new();
        set.push(QuestionDraft::new("First?", "one", "").validate().unwrap())
            .unwrap();
        set.push(QuestionDraft::new("Second?", "two", "think").validate().unwrap())
            .unwrap();

        let view = AdminListView::build(&set);
        assert_eq!(view.count_label, "2 loaded");
        assert_eq!(view.items[0].badge, "1");
        assert_eq!(view.items[0].answer_label, "Answer: one");
        assert_eq!(view.items[0].hint_label, None);
        assert_eq!(view.items[1].hint_label.as_deref(), Some("Hint: think"));
    }

    #[test]
    fn empty_admin_list() {
        let view = AdminListView::build(&QuestionSet::new());
        assert_eq!(view.count_label, "0 loaded");
        assert!(view.is_empty());
    }

    #[test]
    fn player_view_labels_current_puzzle() {
        let set = QuestionSet::defaults();
        let view = PlayerView::build(&set, &Progress::at(1));
        match &view {
            PlayerView::Active {
                prompt,
                hint,
                label,
                fraction,
            } => {
                assert_eq!(prompt, set.get(1).unwrap().prompt());
                assert_eq!(hint.as_deref(), Some("It's assigned by name."));
                assert_eq!(label, "Puzzle 2 of 3");
                assert!((fraction - 1.0 / 3.0).abs() < f64::EPSILON);
            }
            other => panic!("unexpected view {other:?}"),
        }
        assert!(view.accepts_input());
    }

    #[test]
    fn player_view_empty_and_complete() {
        let empty = PlayerView::build(&QuestionSet::new(), &Progress::new());
        assert_eq!(empty, PlayerView::Empty);
        assert!(!empty.accepts_input());
        assert!(empty.fraction().abs() < f64::EPSILON);

        let done = PlayerView::build(&QuestionSet::defaults(), &Progress::at(3));
        assert_eq!(done, PlayerView::Complete { total: 3 });
        assert!((done.fraction() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn feedback_follows_answer_events() {
        let ok = FeedbackView::from_event(&RoomEvent::AnswerAccepted {
            flavor: "yes",
            new_index: 1,
            completed: false,
        })
        .unwrap();
        assert_eq!(ok.css_class(), "feedback success");

        let bad = FeedbackView::from_event(&RoomEvent::AnswerRejected { flavor: "no" }).unwrap();
        assert_eq!(bad.kind, FeedbackKind::Failure);
        assert_eq!(bad.css_class(), "feedback error");

        assert!(FeedbackView::from_event(&RoomEvent::RunReset).is_none());
    }
}
