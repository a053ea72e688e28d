//! Author model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::book::{Book, NestedBook};

/// Author record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: i64,
    pub name: String,
}

/// Author together with every book referencing it
#[derive(Debug, Clone)]
pub struct AuthorWithBooks {
    pub author: Author,
    pub books: Vec<Book>,
}

/// Author as embedded in a book, both on input and output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct AuthorName {
    pub name: String,
}

impl From<&Author> for AuthorName {
    fn from(author: &Author) -> Self {
        Self {
            name: author.name.clone(),
        }
    }
}

/// Author representation with its books (books omit the back-reference)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthorResponse {
    pub id: i64,
    pub name: String,
    pub books: Vec<NestedBook>,
}

impl From<&AuthorWithBooks> for AuthorResponse {
    fn from(value: &AuthorWithBooks) -> Self {
        Self {
            id: value.author.id,
            name: value.author.name.clone(),
            books: value.books.iter().map(NestedBook::from).collect(),
        }
    }
}
