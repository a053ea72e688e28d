//! Storage session behavior

use library_catalog::{config::DatabaseConfig, repository::Repository};

async fn repository() -> Repository {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        ..DatabaseConfig::default()
    };
    let repository = Repository::connect(&config).await.expect("Failed to open database");
    repository.migrate().await.expect("Failed to run migrations");
    repository
}

#[tokio::test]
async fn test_find_or_create_is_idempotent() {
    let repository = repository().await;
    let mut session = repository.begin().await.unwrap();

    let first = session.authors_find_or_create("Octavia E. Butler").await.unwrap();
    let second = session.authors_find_or_create("Octavia E. Butler").await.unwrap();

    assert_eq!(first, second);
    session.commit().await.unwrap();

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors WHERE name = ?")
        .bind("Octavia E. Butler")
        .fetch_one(&repository.pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_uncommitted_session_rolls_back() {
    let repository = repository().await;

    {
        let mut session = repository.begin().await.unwrap();
        let author = session.authors_find_or_create("Kindred").await.unwrap();
        session.books_insert("Parable of the Sower", &author).await.unwrap();
    }

    let mut session = repository.begin().await.unwrap();
    assert!(session.books_list().await.unwrap().is_empty());
    assert!(session.authors_get_by_name("Kindred").await.unwrap().is_none());
}

#[tokio::test]
async fn test_commit_persists() {
    let repository = repository().await;

    let mut session = repository.begin().await.unwrap();
    let author = session.authors_find_or_create("Iain M. Banks").await.unwrap();
    let book = session.books_insert("Excession", &author).await.unwrap();
    session.commit().await.unwrap();

    let mut session = repository.begin().await.unwrap();
    let stored = session.books_get_by_id(book.id).await.unwrap().expect("book stored");
    assert_eq!(stored, book);

    let with_books = session
        .authors_get_with_books("Iain M. Banks")
        .await
        .unwrap()
        .expect("author stored");
    assert_eq!(with_books.books, vec![book]);
}

#[tokio::test]
async fn test_delete_is_no_op_safe() {
    let repository = repository().await;
    let mut session = repository.begin().await.unwrap();

    assert_eq!(session.books_delete(1).await.unwrap(), None);

    let author = session.authors_find_or_create("Ted Chiang").await.unwrap();
    let book = session.books_insert("Exhalation", &author).await.unwrap();
    assert_eq!(session.books_delete(book.id).await.unwrap(), Some(book.clone()));
    assert_eq!(session.books_delete(book.id).await.unwrap(), None);
    session.commit().await.unwrap();

    let mut session = repository.begin().await.unwrap();
    assert!(session.books_get_by_id(book.id).await.unwrap().is_none());
    assert!(session.authors_get_by_name("Ted Chiang").await.unwrap().is_some());
}

#[tokio::test]
async fn test_update_missing_book_is_not_found() {
    let repository = repository().await;
    let mut session = repository.begin().await.unwrap();

    let author = session.authors_find_or_create("Ted Chiang").await.unwrap();
    let mut book = session.books_insert("Exhalation", &author).await.unwrap();
    session.books_delete(book.id).await.unwrap();

    book.title = "Stories of Your Life".to_string();
    assert!(matches!(
        session.books_update(&book).await,
        Err(library_catalog::AppError::NotFound(_))
    ));
}
