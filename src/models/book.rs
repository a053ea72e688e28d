//! Book model, inbound payload and representations

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::author::{Author, AuthorName};
use crate::error::{AppError, AppResult};

/// Book with its author resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: Author,
}

/// Create / update book request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct BookPayload {
    pub title: String,
    pub author: AuthorName,
}

impl BookPayload {
    /// Parse and validate a raw JSON body.
    ///
    /// The body must be a non-empty object carrying string `title` and
    /// `author.name`; empty strings are fine. Unknown keys, including the
    /// output-only `id`, are rejected.
    pub fn parse(payload: &Value) -> AppResult<Self> {
        let fields = payload
            .as_object()
            .ok_or_else(|| AppError::Validation("payload must be a JSON object".to_string()))?;
        if fields.is_empty() {
            return Err(AppError::Validation("empty payload".to_string()));
        }

        Self::deserialize(payload).map_err(|e| AppError::Validation(e.to_string()))
    }
}

/// Book representation with its author's name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct BookResponse {
    pub id: i64,
    pub title: String,
    pub author: AuthorName,
}

impl From<&Book> for BookResponse {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: AuthorName::from(&book.author),
        }
    }
}

/// Book representation nested under its author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NestedBook {
    pub id: i64,
    pub title: String,
}

impl From<&Book> for NestedBook {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
        }
    }
}
