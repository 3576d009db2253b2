// tests/store_tests.rs
//
// Absent-vs-present semantics and document round-trips for both backends.

use quizboard::models::question::{Difficulty, Question};
use quizboard::store::{self, FileStore, MemoryStore, Store};

#[tokio::test]
async fn memory_store_absent_vs_present() {
    let store = MemoryStore::new();

    assert!(store.read("quiz_users").await.unwrap().is_none());

    store.write("quiz_users", "[]").await.unwrap();
    assert_eq!(store.read("quiz_users").await.unwrap().unwrap(), "[]");

    store.write("quiz_users", "[1]").await.unwrap();
    assert_eq!(store.read("quiz_users").await.unwrap().unwrap(), "[1]");

    store.delete("quiz_users").await.unwrap();
    assert!(store.read("quiz_users").await.unwrap().is_none());

    // Deleting an absent key is not an error.
    store.delete("quiz_users").await.unwrap();
}

#[tokio::test]
async fn file_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let store = FileStore::open(dir.path()).await.unwrap();
    assert!(store.read("quiz_questions").await.unwrap().is_none());
    store.write("quiz_questions", "[\"doc\"]").await.unwrap();

    // A second handle over the same directory sees the document.
    let reopened = FileStore::open(dir.path()).await.unwrap();
    assert_eq!(
        reopened.read("quiz_questions").await.unwrap().unwrap(),
        "[\"doc\"]"
    );

    reopened.delete("quiz_questions").await.unwrap();
    assert!(store.read("quiz_questions").await.unwrap().is_none());
    reopened.delete("quiz_questions").await.unwrap();
}

#[tokio::test]
async fn documents_roundtrip_all_fields() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::open(dir.path()).await.unwrap();

    let questions = vec![Question {
        id: "q1".to_string(),
        question: "What is the capital of France?".to_string(),
        options: ["London", "Berlin", "Paris", "Madrid"]
            .map(String::from)
            .to_vec(),
        correct_answer: 2,
        category: "Geography".to_string(),
        difficulty: Difficulty::Hard,
        created_at: chrono::Utc::now(),
    }];

    store::write_document(&store, store::QUESTIONS, &questions)
        .await
        .unwrap();
    let loaded: Vec<Question> = store::read_collection(&store, store::QUESTIONS).await.unwrap();

    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, questions[0].id);
    assert_eq!(loaded[0].options, questions[0].options);
    assert_eq!(loaded[0].correct_answer, 2);
    assert_eq!(loaded[0].difficulty, Difficulty::Hard);
    assert_eq!(loaded[0].created_at, questions[0].created_at);

    // An absent collection reads as empty, not as an error.
    let attempts: Vec<Question> = store::read_collection(&store, store::ATTEMPTS).await.unwrap();
    assert!(attempts.is_empty());
}
