use escape_core::model::{Progress, QuestionSet};
use storage::repository::{ProgressRepository, QuestionRepository, Storage};

use super::test_harness::setup_view_harness;

#[tokio::test(flavor = "current_thread")]
async fn first_render_leaves_seeded_defaults_in_storage() {
    let mut harness = setup_view_harness(Storage::in_memory()).await;
    harness.rebuild();
    let html = harness.render();

    let persisted = harness
        .storage
        .questions
        .load_questions()
        .await
        .expect("load")
        .expect("seeded");
    assert_eq!(persisted.len(), 3);
    assert!(html.contains(persisted[0].prompt()), "{html}");
    assert_eq!(
        harness.storage.progress.load_progress().await.expect("load"),
        None
    );
}

async fn render(storage: Storage) -> String {
    let mut harness = setup_view_harness(storage).await;
    harness.rebuild();
    harness.render()
}

#[tokio::test(flavor = "current_thread")]
async fn fresh_room_renders_defaults_and_first_puzzle() {
    let html = render(Storage::in_memory()).await;

    for expected in [
        "3 loaded",
        "Puzzle 1 of 3",
        "Hint: Think PI Planning.",
        "Answer: program board",
        "Restore defaults",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(!html.contains("Play again"));
    assert!(!html.contains("feedback"));
}

#[tokio::test(flavor = "current_thread")]
async fn empty_store_shows_waiting_state() {
    let storage = Storage::in_memory();
    storage.questions.save_questions(&[]).await.expect("save");

    let html = render(storage).await;
    for expected in [
        "0 loaded",
        "No questions configured.",
        "Waiting for the control room...",
        "No questions yet",
    ] {
        assert!(html.contains(expected), "missing {expected} in {html}");
    }
    assert!(html.contains("disabled"), "answer form should be disabled: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn mid_run_shows_progress_bar() {
    let storage = Storage::in_memory();
    let defaults = QuestionSet::defaults();
    storage
        .questions
        .save_questions(defaults.as_slice())
        .await
        .expect("save questions");
    storage
        .progress
        .save_progress(&Progress::at(1))
        .await
        .expect("save progress");

    let html = render(storage).await;
    assert!(html.contains("Puzzle 2 of 3"), "{html}");
    assert!(html.contains("width: 33%"), "{html}");
    assert!(html.contains(defaults.get(1).unwrap().prompt()), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn completed_run_opens_with_success_overlay() {
    let storage = Storage::in_memory();
    storage
        .questions
        .save_questions(QuestionSet::defaults().as_slice())
        .await
        .expect("save questions");
    storage
        .progress
        .save_progress(&Progress::at(3))
        .await
        .expect("save progress");

    let html = render(storage).await;
    assert!(html.contains("Play again"), "{html}");
    assert!(html.contains("confetti-piece"), "{html}");
    assert!(html.contains("Puzzle 3 of 3"), "{html}");
}
