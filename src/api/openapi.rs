//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, library};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library Catalog API",
        version = "1.0.0",
        description = "Authors and books over a JSON API"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Library
        library::list_books,
        library::create_book,
        library::get_entry,
        library::update_book,
        library::delete_book,
    ),
    components(
        schemas(
            crate::models::book::BookPayload,
            crate::models::book::BookResponse,
            crate::models::book::NestedBook,
            crate::models::author::AuthorName,
            crate::models::author::AuthorResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "library", description = "Books and authors")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
