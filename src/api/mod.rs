//! API handlers for the library catalog endpoints

pub mod health;
pub mod index;
pub mod library;
pub mod openapi;

use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    routing::{any, get},
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::ResponseMode,
    error::{AppError, AppResult},
    models::representation,
    AppState,
};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let routes = Router::new()
        .route("/", get(index::index))
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Library
        .route(
            "/library/",
            get(library::list_books).post(library::create_book),
        )
        .route(
            "/library/:key/",
            get(library::get_entry)
                .patch(library::update_book)
                .delete(library::delete_book),
        )
        .route("/library", any(redirect_with_slash))
        .route("/library/:key", any(redirect_with_slash))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .merge(routes)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Send slashless library paths to their canonical form with a 308, so the
/// method and body survive the redirect
async fn redirect_with_slash(uri: Uri) -> Redirect {
    let location = match uri.query() {
        Some(query) => format!("{}/?{}", uri.path(), query),
        None => format!("{}/", uri.path()),
    };
    Redirect::permanent(&location)
}

/// Path segment under `/library/`: a book id or an author name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryKey {
    BookId(i64),
    AuthorName(String),
}

impl LibraryKey {
    /// All-digit segments that fit an `i64` are ids; anything else is a name
    pub fn parse(segment: &str) -> Self {
        if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(id) = segment.parse::<i64>() {
                return LibraryKey::BookId(id);
            }
        }
        LibraryKey::AuthorName(segment.to_string())
    }
}

/// Render a service outcome according to the configured response mode.
///
/// In degraded mode, validation failures and missing entities answer
/// `200 {}`; in strict mode they go through [`AppError`]'s own mapping.
/// Other errors are never degraded.
pub(crate) fn respond<T: Serialize>(
    mode: ResponseMode,
    result: AppResult<T>,
    success: StatusCode,
) -> AppResult<Response> {
    match result {
        Ok(value) => {
            let status = match mode {
                ResponseMode::Degraded => StatusCode::OK,
                ResponseMode::Strict => success,
            };
            Ok((status, Json(value)).into_response())
        }
        Err(err) if err.is_degradable() => {
            match &err {
                AppError::Validation(reason) => {
                    tracing::debug!(%reason, "invalid book payload")
                }
                other => tracing::debug!(reason = %other, "entity not found"),
            }
            match mode {
                ResponseMode::Degraded => {
                    Ok(Json(representation::<T>(None)?).into_response())
                }
                ResponseMode::Strict => Err(err),
            }
        }
        Err(err) => Err(err),
    }
}
