//! Landing page

use axum::response::Html;

/// Static HTML page describing the API
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../templates/index.html"))
}
