use crate::model::ids::QuestionId;
use crate::model::question::Question;

/// Static shape of a built-in question. Ids are assigned when copied out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultQuestion {
    pub prompt: &'static str,
    pub answer: &'static str,
    pub hint: &'static str,
}

/// Sample puzzles used for first-run seeding and for "restore defaults".
pub const DEFAULT_QUESTIONS: [DefaultQuestion; 3] = [
    DefaultQuestion {
        prompt: "A sprint review reveals a blocker across three squads. Which Jira artifact helps you visualize cross-team dependencies?",
        answer: "program board",
        hint: "Think PI Planning.",
    },
    DefaultQuestion {
        prompt: "Your retrospective action items lack owners. Which Jira field must never stay empty if you expect accountability?",
        answer: "assignee",
        hint: "It's assigned by name.",
    },
    DefaultQuestion {
        prompt: "To exit this room you must sum the story points of tickets ESC-101 (3), ESC-102 (5), ESC-103 (8).",
        answer: "16",
        hint: "Just add the Fibonacci trio.",
    },
];

/// Fresh copies of the default set, each with a newly generated id.
#[must_use]
pub fn default_questions() -> Vec<Question> {
    DEFAULT_QUESTIONS
        .iter()
        .filter_map(|entry| {
            Question::from_persisted(
                QuestionId::generate(),
                entry.prompt,
                entry.answer,
                entry.hint,
            )
            .ok()
        })
        .collect()
}
