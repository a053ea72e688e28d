//! Library endpoints: books and their authors

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::{
    error::AppResult,
    models::{AuthorResponse, BookPayload, BookResponse},
    AppState,
};

use super::{respond, LibraryKey};

/// Body of a mutating request; anything that is not JSON reads as `null`
fn body(payload: Option<Json<Value>>) -> Value {
    payload.map(|Json(value)| value).unwrap_or(Value::Null)
}

/// List all books
#[utoipa::path(
    get,
    path = "/library/",
    tag = "library",
    responses(
        (status = 200, description = "All books", body = Vec<BookResponse>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<Vec<BookResponse>>> {
    let books = state.services.library.list_books().await?;
    Ok(Json(books.iter().map(BookResponse::from).collect()))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/library/",
    tag = "library",
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book created (degraded mode), or `{}` for an invalid payload", body = BookResponse),
        (status = 201, description = "Book created (strict mode)", body = BookResponse),
        (status = 422, description = "Invalid payload (strict mode)", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    payload: Option<Json<Value>>,
) -> AppResult<Response> {
    let result = state
        .services
        .library
        .create_book(&body(payload))
        .await
        .map(|book| BookResponse::from(&book));
    respond(state.config.api.response_mode, result, StatusCode::CREATED)
}

/// Get a book by ID, or an author with its books by name
#[utoipa::path(
    get,
    path = "/library/{key}/",
    tag = "library",
    params(("key" = String, Path, description = "Book ID (digits) or author name")),
    responses(
        (status = 200, description = "Book (for an id) or author (for a name); `{}` when absent in degraded mode", body = BookResponse),
        (status = 404, description = "Not found (strict mode)", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_entry(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Response> {
    let mode = state.config.api.response_mode;
    match LibraryKey::parse(&key) {
        LibraryKey::BookId(id) => {
            let result = state
                .services
                .library
                .get_book(id)
                .await
                .map(|book| BookResponse::from(&book));
            respond(mode, result, StatusCode::OK)
        }
        LibraryKey::AuthorName(name) => {
            let result = state
                .services
                .library
                .get_author(&name)
                .await
                .map(|author| AuthorResponse::from(&author));
            respond(mode, result, StatusCode::OK)
        }
    }
}

/// Update a book's title and author
#[utoipa::path(
    patch,
    path = "/library/{key}/",
    tag = "library",
    params(("key" = i64, Path, description = "Book ID")),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Updated book; `{}` for an invalid payload or unknown id in degraded mode", body = BookResponse),
        (status = 404, description = "Book not found (strict mode)", body = crate::error::ErrorResponse),
        (status = 405, description = "Key is not a book ID"),
        (status = 422, description = "Invalid payload (strict mode)", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(key): Path<String>,
    payload: Option<Json<Value>>,
) -> AppResult<Response> {
    let LibraryKey::BookId(id) = LibraryKey::parse(&key) else {
        return Ok(StatusCode::METHOD_NOT_ALLOWED.into_response());
    };
    let result = state
        .services
        .library
        .update_book(id, &body(payload))
        .await
        .map(|book| BookResponse::from(&book));
    respond(state.config.api.response_mode, result, StatusCode::OK)
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/library/{key}/",
    tag = "library",
    params(("key" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Deleted book; `{}` for an unknown id in degraded mode", body = BookResponse),
        (status = 404, description = "Book not found (strict mode)", body = crate::error::ErrorResponse),
        (status = 405, description = "Key is not a book ID")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> AppResult<Response> {
    let LibraryKey::BookId(id) = LibraryKey::parse(&key) else {
        return Ok(StatusCode::METHOD_NOT_ALLOWED.into_response());
    };
    let result = state
        .services
        .library
        .delete_book(id)
        .await
        .map(|book| BookResponse::from(&book));
    respond(state.config.api.response_mode, result, StatusCode::OK)
}
