//! Book queries on Session

use sqlx::FromRow;

use super::Session;
use crate::{
    error::{AppError, AppResult},
    models::{author::Author, book::Book},
};

const SELECT_BOOKS: &str = r#"
    SELECT b.id, b.title, b.author_id, a.name AS author_name
    FROM books b
    JOIN authors a ON a.id = b.author_id
"#;

#[derive(FromRow)]
struct BookRow {
    id: i64,
    title: String,
    author_id: i64,
    author_name: String,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            author: Author {
                id: row.author_id,
                name: row.author_name,
            },
        }
    }
}

#[derive(FromRow)]
struct DeletedBookRow {
    id: i64,
    title: String,
    author_id: i64,
}

impl Session {
    /// List all books
    pub async fn books_list(&mut self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, BookRow>(&format!("{SELECT_BOOKS} ORDER BY b.id"))
            .fetch_all(&mut *self.tx)
            .await?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    /// Get book by ID
    pub async fn books_get_by_id(&mut self, id: i64) -> AppResult<Option<Book>> {
        let row = sqlx::query_as::<_, BookRow>(&format!("{SELECT_BOOKS} WHERE b.id = ?"))
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await?;
        Ok(row.map(Book::from))
    }

    /// List books referencing an author
    pub async fn books_list_for_author(&mut self, author_id: i64) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, BookRow>(&format!("{SELECT_BOOKS} WHERE b.author_id = ? ORDER BY b.id"))
            .bind(author_id)
            .fetch_all(&mut *self.tx)
            .await?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    /// Insert a new book
    pub async fn books_insert(&mut self, title: &str, author: &Author) -> AppResult<Book> {
        let result = sqlx::query("INSERT INTO books (title, author_id) VALUES (?, ?)")
            .bind(title)
            .bind(author.id)
            .execute(&mut *self.tx)
            .await?;

        Ok(Book {
            id: result.last_insert_rowid(),
            title: title.to_string(),
            author: author.clone(),
        })
    }

    /// Write title and author of an existing book
    pub async fn books_update(&mut self, book: &Book) -> AppResult<Book> {
        let result = sqlx::query("UPDATE books SET title = ?, author_id = ? WHERE id = ?")
            .bind(&book.title)
            .bind(book.author.id)
            .bind(book.id)
            .execute(&mut *self.tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", book.id)));
        }
        Ok(book.clone())
    }

    /// Delete a book and return it as it was; `None` when there was nothing to delete.
    ///
    /// The delete runs before any read so the session holds the write lock
    /// from its first statement.
    pub async fn books_delete(&mut self, id: i64) -> AppResult<Option<Book>> {
        let deleted = sqlx::query_as::<_, DeletedBookRow>(
            "DELETE FROM books WHERE id = ? RETURNING id, title, author_id",
        )
        .bind(id)
        .fetch_optional(&mut *self.tx)
        .await?;

        let Some(deleted) = deleted else {
            return Ok(None);
        };

        let author = sqlx::query_as::<_, Author>("SELECT id, name FROM authors WHERE id = ?")
            .bind(deleted.author_id)
            .fetch_one(&mut *self.tx)
            .await?;

        Ok(Some(Book {
            id: deleted.id,
            title: deleted.title,
            author,
        }))
    }
}
