//! Data models for the library catalog

pub mod author;
pub mod book;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};

// Re-export commonly used types
pub use author::{Author, AuthorName, AuthorResponse, AuthorWithBooks};
pub use book::{Book, BookPayload, BookResponse, NestedBook};

/// Serialize an optional representation; an absent entity becomes `{}`
pub fn representation<T: Serialize>(entity: Option<&T>) -> AppResult<Value> {
    match entity {
        Some(entity) => serde_json::to_value(entity).map_err(|e| AppError::Internal(e.to_string())),
        None => Ok(Value::Object(Map::new())),
    }
}
