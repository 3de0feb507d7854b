use std::sync::Arc;

use dioxus::prelude::*;
use escape_core::model::PlayState;
use services::{Command, EscapeRoom, FeedbackView, RoomError, RoomEvent, RoomSnapshot};
use tokio::sync::Mutex;

/// Shared handle to the room, provided by the composition root (`crates/app`).
#[derive(Clone)]
pub struct AppContext {
    room: Arc<Mutex<EscapeRoom>>,
    initial: RoomSnapshot,
}

impl AppContext {
    #[must_use]
    pub fn new(room: EscapeRoom) -> Self {
        let initial = room.snapshot();
        Self {
            room: Arc::new(Mutex::new(room)),
            initial,
        }
    }

    /// State as it was when the room was opened; the first render uses it.
    #[must_use]
    pub fn initial_snapshot(&self) -> RoomSnapshot {
        self.initial.clone()
    }

    /// Run one command to completion and return the event with the state after it.
    ///
    /// # Errors
    ///
    /// Propagates the room's error; state is unchanged in that case.
    pub async fn dispatch(&self, command: Command) -> Result<(RoomEvent, RoomSnapshot), RoomError> {
        let mut room = self.room.lock().await;
        let event = room.dispatch(command).await?;
        Ok((event, room.snapshot()))
    }
}

/// Build an `AppContext` around an opened room.
#[must_use]
pub fn build_app_context(room: EscapeRoom) -> AppContext {
    AppContext::new(room)
}

/// Reactive state shared by both panels.
#[derive(Clone, Copy, PartialEq)]
pub struct RoomSignals {
    pub snapshot: Signal<RoomSnapshot>,
    pub feedback: Signal<Option<FeedbackView>>,
    pub celebrating: Signal<bool>,
    pub error: Signal<Option<String>>,
}

impl RoomSignals {
    /// Must be called while a component is rendering.
    #[must_use]
    pub fn new(initial: RoomSnapshot) -> Self {
        let celebrating = initial.play_state() == PlayState::Completed;
        Self {
            snapshot: Signal::new(initial),
            feedback: Signal::new(None),
            celebrating: Signal::new(celebrating),
            error: Signal::new(None),
        }
    }

    /// Spawn `command` against the room; `on_event` runs after the signals update.
    pub fn dispatch(
        self,
        ctx: AppContext,
        command: Command,
        on_event: impl FnOnce(&RoomEvent) + 'static,
    ) {
        let mut signals = self;
        spawn(async move {
            match ctx.dispatch(command).await {
                Ok((event, snapshot)) => {
                    signals.apply(&event, snapshot);
                    on_event(&event);
                }
                Err(err) => {
                    log::error!("room command failed: {err}");
                    signals.error.set(Some(err.to_string()));
                }
            }
        });
    }

    fn apply(&mut self, event: &RoomEvent, snapshot: RoomSnapshot) {
        self.snapshot.set(snapshot);
        self.error.set(None);
        match event {
            RoomEvent::AnswerAccepted {
                completed: true, ..
            } => {
                self.feedback.set(None);
                self.celebrating.set(true);
            }
            RoomEvent::AnswerAccepted { .. } | RoomEvent::AnswerRejected { .. } => {
                self.feedback.set(FeedbackView::from_event(event));
            }
            RoomEvent::RunReset | RoomEvent::DefaultsRestored => {
                self.feedback.set(None);
                self.celebrating.set(false);
            }
            _ => {}
        }
    }
}
