#![forbid(unsafe_code)]

pub mod error;
pub mod flavor;
pub mod progress_tracker;
pub mod question_store;
pub mod room;
pub mod view;

pub use error::RoomError;
pub use flavor::{FAILURE_LINES, FeedbackKind, SUCCESS_LINES, pick_flavor};
pub use progress_tracker::ProgressTracker;
pub use question_store::QuestionStore;
pub use room::{Command, Confirmation, EscapeRoom, RoomEvent, RoomSnapshot};
pub use view::{AdminItemView, AdminListView, FeedbackView, PlayerView};
