mod admin;
mod celebration;
mod player;

pub use admin::AdminPanel;
pub use celebration::{ConfettiPiece, SuccessOverlay, burst};
pub use player::PlayerPanel;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
