//! Library catalog service
//!
//! Each operation runs in its own [`Session`](crate::repository::Session) and
//! commits at most once. Missing books and authors come back as
//! [`AppError::NotFound`], bad payloads as [`AppError::Validation`]; the API
//! layer decides how those outcomes are rendered.

use serde_json::Value;

use crate::{
    error::{AppError, AppResult},
    models::{AuthorWithBooks, Book, BookPayload},
    repository::Repository,
};

#[derive(Clone)]
pub struct LibraryService {
    repository: Repository,
}

impl LibraryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List every book in the catalog
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        let mut session = self.repository.begin().await?;
        let books = session.books_list().await?;
        Ok(books)
    }

    /// Create a book, reusing the author with the same name if there is one
    pub async fn create_book(&self, payload: &Value) -> AppResult<Book> {
        let data = BookPayload::parse(payload)?;

        let mut session = self.repository.begin().await?;
        let author = session.authors_find_or_create(&data.author.name).await?;
        let book = session.books_insert(&data.title, &author).await?;
        session.commit().await?;

        tracing::debug!(book_id = book.id, author_id = author.id, "book created");
        Ok(book)
    }

    /// Get book by ID
    pub async fn get_book(&self, id: i64) -> AppResult<Book> {
        let mut session = self.repository.begin().await?;
        let book = session.books_get_by_id(id).await?;
        book.ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Get an author by exact name with all of its books
    pub async fn get_author(&self, name: &str) -> AppResult<AuthorWithBooks> {
        let mut session = self.repository.begin().await?;
        let author = session.authors_get_with_books(name).await?;
        author.ok_or_else(|| AppError::NotFound(format!("Author {} not found", name)))
    }

    /// Replace title and author of an existing book.
    ///
    /// An unknown id leaves the database untouched, including any author
    /// the lookup would have created.
    pub async fn update_book(&self, id: i64, payload: &Value) -> AppResult<Book> {
        let data = BookPayload::parse(payload)?;

        let mut session = self.repository.begin().await?;
        let author = session.authors_find_or_create(&data.author.name).await?;
        let mut book = session
            .books_get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))?;

        book.title = data.title;
        book.author = author;
        let book = session.books_update(&book).await?;
        session.commit().await?;

        Ok(book)
    }

    /// Delete a book and return it as it was. Its author is kept, even if orphaned.
    pub async fn delete_book(&self, id: i64) -> AppResult<Book> {
        let mut session = self.repository.begin().await?;
        let book = session.books_delete(id).await?;
        session.commit().await?;

        book.ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }
}
