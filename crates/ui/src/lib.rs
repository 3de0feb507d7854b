pub mod app;
pub mod context;
pub mod views;

pub use app::{App, RoomShell};
pub use context::{AppContext, RoomSignals, build_app_context};
