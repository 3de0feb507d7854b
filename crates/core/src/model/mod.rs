mod defaults;
mod ids;
mod play;
mod progress;
mod question;
mod question_set;

pub use defaults::{DEFAULT_QUESTIONS, DefaultQuestion, default_questions};
pub use ids::{ParseIdError, QuestionId};
pub use play::{Evaluation, PlayState, answers_match, evaluate};
pub use progress::Progress;
pub use question::{Question, QuestionDraft, QuestionError};
pub use question_set::QuestionSet;
