use dioxus::prelude::*;
use services::{Command, PlayerView, RoomEvent};

use crate::context::{AppContext, RoomSignals};

#[component]
pub fn PlayerPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let signals = use_context::<RoomSignals>();
    let mut attempt = use_signal(String::new);

    let view = PlayerView::from_snapshot(&signals.snapshot.read());
    let enabled = view.accepts_input();
    let (prompt, hint, label) = match &view {
        PlayerView::Empty => (
            PlayerView::WAITING_PROMPT.to_string(),
            None,
            PlayerView::EMPTY_LABEL.to_string(),
        ),
        PlayerView::Active {
            prompt,
            hint,
            label,
            ..
        } => (prompt.clone(), hint.clone(), label.clone()),
        PlayerView::Complete { total } => (
            "Every lock is open.".to_string(),
            None,
            format!("Puzzle {total} of {total}"),
        ),
    };
    let bar_style = format!("width: {:.0}%;", view.fraction() * 100.0);
    let feedback = signals.feedback.read().clone();

    let submit = use_callback(move |()| {
        if !enabled {
            return;
        }
        signals.dispatch(
            ctx.clone(),
            Command::SubmitAnswer(attempt()),
            move |event| {
                if matches!(event, RoomEvent::AnswerAccepted { .. }) {
                    let mut attempt = attempt;
                    attempt.set(String::new());
                }
            },
        );
    });

    rsx! {
        section { class: "panel player-panel",
            header { class: "panel-header",
                h2 { "Escape" }
                span { class: "progress-label", "{label}" }
            }
            div { class: "progress-track",
                div { class: "progress-bar", style: "{bar_style}" }
            }

            p { class: "current-question", "{prompt}" }
            if let Some(hint) = hint {
                p { class: "current-hint", "Hint: {hint}" }
            }

            div { class: "answer-form",
                input {
                    r#type: "text",
                    name: "attempt",
                    placeholder: "Type your answer",
                    disabled: !enabled,
                    value: "{attempt}",
                    oninput: move |evt| attempt.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            submit.call(());
                        }
                    },
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: !enabled,
                    onclick: move |_| submit.call(()),
                    "Unlock"
                }
            }

            if let Some(feedback) = feedback {
                p { class: feedback.css_class(), "{feedback.text}" }
            }
        }
    }
}
