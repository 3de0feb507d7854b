//! Cosmetic feedback lines shown after an answer attempt.

use rand::Rng;
use rand::seq::IndexedRandom;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackKind {
    Success,
    Failure,
}

impl FeedbackKind {
    #[must_use]
    pub fn lines(self) -> &'static [&'static str] {
        match self {
            FeedbackKind::Success => &SUCCESS_LINES,
            FeedbackKind::Failure => &FAILURE_LINES,
        }
    }
}

pub const SUCCESS_LINES: [&str; 3] = [
    "Lock released. Move forward!",
    "Ticket closed flawlessly.",
    "Door slide open\u{2014}next mission awaits.",
];

pub const FAILURE_LINES: [&str; 3] = [
    "Access denied. Recalibrate.",
    "Not quite\u{2014}revisit the backlog.",
    "System rejects the input. Try again.",
];

/// Pick a line for `kind` uniformly at random.
///
/// The choice never affects game state; pass a seeded rng for repeatable output.
pub fn pick_flavor<R: Rng>(kind: FeedbackKind, rng: &mut R) -> &'static str {
    kind.lines().choose(rng).copied().unwrap_or_default()
}
