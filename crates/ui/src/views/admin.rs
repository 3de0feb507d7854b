use dioxus::prelude::*;
use escape_core::model::QuestionDraft;
use services::{AdminItemView, AdminListView, Command, Confirmation, RoomEvent};

use crate::context::{AppContext, RoomSignals};

const RESTORE_PROMPT: &str = "Replace current riddles with the default set?";

#[component]
pub fn AdminPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let signals = use_context::<RoomSignals>();
    let mut prompt = use_signal(String::new);
    let mut answer = use_signal(String::new);
    let mut hint = use_signal(String::new);
    let rejection = use_signal(|| None::<String>);
    let mut confirming = use_signal(|| false);

    let list = AdminListView::build(&signals.snapshot.read().questions);
    let empty_message = AdminListView::EMPTY_MESSAGE;

    let ctx_for_add = ctx.clone();
    let on_add = move |_: MouseEvent| {
        let draft = QuestionDraft::new(prompt(), answer(), hint());
        signals.dispatch(
            ctx_for_add.clone(),
            Command::AddQuestion(draft),
            move |event| {
                let mut rejection = rejection;
                match event {
                    RoomEvent::QuestionAdded(_) => {
                        let (mut prompt, mut answer, mut hint) = (prompt, answer, hint);
                        prompt.set(String::new());
                        answer.set(String::new());
                        hint.set(String::new());
                        rejection.set(None);
                    }
                    RoomEvent::QuestionRejected(reason) => rejection.set(Some(reason.to_string())),
                    _ => {}
                }
            },
        );
    };

    let ctx_for_restore = ctx.clone();
    let on_restore = move |_: MouseEvent| {
        confirming.set(false);
        signals.dispatch(
            ctx_for_restore.clone(),
            Command::RestoreDefaults(Confirmation::Granted),
            |_| {},
        );
    };

    rsx! {
        section { class: "panel admin-panel",
            header { class: "panel-header",
                h2 { "Control room" }
                span { class: "count", "{list.count_label}" }
            }

            div { class: "question-form",
                input {
                    r#type: "text",
                    name: "question",
                    placeholder: "Riddle or question",
                    value: "{prompt}",
                    oninput: move |evt| prompt.set(evt.value()),
                }
                input {
                    r#type: "text",
                    name: "answer",
                    placeholder: "Expected answer",
                    value: "{answer}",
                    oninput: move |evt| answer.set(evt.value()),
                }
                input {
                    r#type: "text",
                    name: "hint",
                    placeholder: "Hint (optional)",
                    value: "{hint}",
                    oninput: move |evt| hint.set(evt.value()),
                }
                button { class: "btn btn-primary", r#type: "button", onclick: on_add, "Add question" }
                if let Some(reason) = rejection() {
                    p { class: "form-error", "{reason}" }
                }
            }

            ul { class: "questions",
                if list.is_empty() {
                    li { class: "muted", "{empty_message}" }
                }
                for item in list.items.iter().cloned() {
                    QuestionRow { key: "{item.id}", item }
                }
            }

            button {
                class: "btn btn-danger",
                r#type: "button",
                onclick: move |_| confirming.set(true),
                "Restore defaults"
            }

            if confirming() {
                div { class: "modal-overlay",
                    div { class: "modal", role: "dialog",
                        p { "{RESTORE_PROMPT}" }
                        div { class: "modal-actions",
                            button {
                                class: "btn",
                                r#type: "button",
                                onclick: move |_| confirming.set(false),
                                "Cancel"
                            }
                            button {
                                class: "btn btn-danger",
                                r#type: "button",
                                onclick: on_restore,
                                "Replace"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn QuestionRow(item: AdminItemView) -> Element {
    let ctx = use_context::<AppContext>();
    let signals = use_context::<RoomSignals>();
    let id = item.id.clone();

    rsx! {
        li { class: "question-item",
            span { class: "badge", "{item.badge}" }
            div { class: "question-copy",
                strong { "{item.prompt}" }
                span { class: "tiny", "{item.answer_label}" }
                if let Some(hint) = item.hint_label.as_ref() {
                    span { class: "tiny", "{hint}" }
                }
            }
            button {
                class: "btn btn-ghost",
                r#type: "button",
                onclick: move |_| {
                    signals.dispatch(ctx.clone(), Command::DeleteQuestion(id.clone()), |_| {});
                },
                "Delete"
            }
        }
    }
}
