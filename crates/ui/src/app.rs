use dioxus::prelude::*;

use crate::context::{AppContext, RoomSignals};
use crate::views::{AdminPanel, PlayerPanel, SuccessOverlay};

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Escape Room" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                RoomShell {}
            }
        }
    }
}

/// Both panels plus the completion overlay, sharing one set of room signals.
#[component]
pub fn RoomShell() -> Element {
    let ctx = use_context::<AppContext>();
    let signals = use_context_provider(|| RoomSignals::new(ctx.initial_snapshot()));
    let celebrating = (signals.celebrating)();
    let error = signals.error.read().clone();

    rsx! {
        main { class: "room",
            AdminPanel {}
            PlayerPanel {}
        }
        if let Some(message) = error {
            p { class: "storage-error", "{message}" }
        }
        if celebrating {
            SuccessOverlay {}
        }
    }
}
