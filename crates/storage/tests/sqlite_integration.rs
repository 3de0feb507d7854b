use escape_core::model::{Progress, QuestionDraft, QuestionSet};
use storage::records::QUESTIONS_KEY;
use storage::repository::{ProgressRepository, QuestionRepository, StorageError};
use storage::sqlite::SqliteRepository;

async fn connect(name: &str) -> SqliteRepository {
    let url = format!("sqlite:file:{name}?mode=memory&cache=shared");
    let repo = SqliteRepository::connect(&url).await.expect("connect");
    repo.migrate().await.expect("migrate");
    repo
}

#[tokio::test]
async fn sqlite_starts_without_records() {
    let repo = connect("memdb_empty").await;
    assert!(repo.load_questions().await.unwrap().is_none());
    assert!(repo.load_progress().await.unwrap().is_none());
}

#[tokio::test]
async fn sqlite_roundtrip_keeps_order_and_hints() {
    let repo = connect("memdb_roundtrip").await;

    let mut set = QuestionSet::defaults();
    set.push(QuestionDraft::new("Extra", "yes", "").validate().unwrap())
        .unwrap();
    repo.save_questions(set.as_slice()).await.unwrap();

    let fetched = repo.load_questions().await.unwrap().expect("stored");
    assert_eq!(fetched.as_slice(), set.as_slice());
    assert_eq!(fetched[3].hint(), None);
}

#[tokio::test]
async fn sqlite_save_overwrites_previous_record() {
    let repo = connect("memdb_overwrite").await;

    repo.save_progress(&Progress::at(2)).await.unwrap();
    repo.save_progress(&Progress::at(0)).await.unwrap();
    assert_eq!(repo.load_progress().await.unwrap(), Some(Progress::at(0)));

    let set = QuestionSet::defaults();
    repo.save_questions(set.as_slice()).await.unwrap();
    repo.save_questions(&set.as_slice()[..1]).await.unwrap();
    assert_eq!(repo.load_questions().await.unwrap().unwrap().len(), 1);
}

#[tokio::test]
async fn sqlite_migrate_is_repeatable() {
    let repo = connect("memdb_migrate_twice").await;
    repo.save_progress(&Progress::at(1)).await.unwrap();
    repo.migrate().await.expect("second migrate");
    assert_eq!(repo.load_progress().await.unwrap(), Some(Progress::at(1)));
}

#[tokio::test]
async fn sqlite_reports_malformed_payloads() {
    let repo = connect("memdb_malformed").await;
    sqlx::query("INSERT INTO records (key, payload, updated_at) VALUES (?1, ?2, '')")
        .bind(QUESTIONS_KEY)
        .bind("[{\"id\": 7}]")
        .execute(repo.pool())
        .await
        .unwrap();

    let err = repo.load_questions().await.unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)));
}
