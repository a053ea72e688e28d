//! Author queries on Session

use super::Session;
use crate::{
    error::AppResult,
    models::author::{Author, AuthorWithBooks},
};

impl Session {
    /// Get author by exact name
    pub async fn authors_get_by_name(&mut self, name: &str) -> AppResult<Option<Author>> {
        let author = sqlx::query_as::<_, Author>("SELECT id, name FROM authors WHERE name = ?")
            .bind(name)
            .fetch_optional(&mut *self.tx)
            .await?;
        Ok(author)
    }

    /// Get the author named `name`, inserting it first if absent.
    ///
    /// The unique index on `authors.name` turns a concurrent insert of the
    /// same name into a no-op, so both callers end up with the same row.
    pub async fn authors_find_or_create(&mut self, name: &str) -> AppResult<Author> {
        let inserted = sqlx::query("INSERT INTO authors (name) VALUES (?) ON CONFLICT (name) DO NOTHING")
            .bind(name)
            .execute(&mut *self.tx)
            .await?;

        if inserted.rows_affected() > 0 {
            tracing::debug!(author = name, "author created");
        }

        let author = sqlx::query_as::<_, Author>("SELECT id, name FROM authors WHERE name = ?")
            .bind(name)
            .fetch_one(&mut *self.tx)
            .await?;
        Ok(author)
    }

    /// Get author by name together with all of its books
    pub async fn authors_get_with_books(&mut self, name: &str) -> AppResult<Option<AuthorWithBooks>> {
        let Some(author) = self.authors_get_by_name(name).await? else {
            return Ok(None);
        };
        let books = self.books_list_for_author(author.id).await?;
        Ok(Some(AuthorWithBooks { author, books }))
    }
}
