use quiz_core::model::{AnswerOption, OptionId, Question, QuestionId};
use storage::QuestionRepository;
use storage::bank::default_questions;
use storage::sqlite::SqliteRepository;

async fn connect(name: &str) -> SqliteRepository {
    let url = format!("sqlite:file:{name}?mode=memory&cache=shared");
    let repo = SqliteRepository::connect(&url).await.expect("connect");
    repo.migrate().await.expect("migrate");
    repo
}

#[tokio::test]
async fn sqlite_roundtrip_keeps_question_and_option_order() {
    let repo = connect("memdb_question_order").await;

    let questions = vec![
        Question::new(
            QuestionId::new(20),
            "Second by id, first by position",
            vec![
                AnswerOption::new(OptionId::new(7), "Seven"),
                AnswerOption::new(OptionId::new(3), "Three"),
            ],
        )
        .unwrap(),
        Question::new(
            QuestionId::new(10),
            "Comes after",
            vec![AnswerOption::new(OptionId::new(0), "Zero")],
        )
        .unwrap(),
    ];
    repo.replace_questions(&questions).await.unwrap();

    let fetched = repo.list_questions().await.expect("list");
    assert_eq!(fetched, questions);
}

#[tokio::test]
async fn sqlite_replace_overwrites_previous_bank() {
    let repo = connect("memdb_question_replace").await;

    let bank = default_questions().unwrap();
    repo.replace_questions(&bank).await.unwrap();
    repo.replace_questions(&bank[..2]).await.unwrap();

    let fetched = repo.list_questions().await.unwrap();
    assert_eq!(fetched.len(), 2);
    assert_eq!(fetched[0].title(), bank[0].title());
}

#[tokio::test]
async fn sqlite_migrations_are_idempotent() {
    let repo = connect("memdb_question_migrate").await;
    repo.migrate().await.expect("second migrate");
    assert!(repo.list_questions().await.unwrap().is_empty());
}
