//! Shared test server

use library_catalog::{
    api::create_router,
    config::ResponseMode,
    repository::Repository,
    AppConfig, AppState,
};
use reqwest::Client;
use serde_json::Value;
use tempfile::TempDir;

pub struct TestServer {
    pub base_url: String,
    pub client: Client,
    pub state: AppState,
    // Keeps the database file alive for file-backed servers
    _dir: Option<TempDir>,
}

impl TestServer {
    /// Serve over an in-memory database (single connection)
    pub async fn spawn(mode: ResponseMode) -> Self {
        let mut config = AppConfig::default();
        config.database.url = "sqlite::memory:".to_string();
        config.api.response_mode = mode;

        Self::start(config, None).await
    }

    /// Serve over a database file in a fresh temporary directory, with a
    /// pool of several connections so requests really run side by side
    pub async fn spawn_on_file(mode: ResponseMode) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut config = AppConfig::default();
        config.database.url = format!("sqlite://{}", dir.path().join("library.db").display());
        config.database.max_connections = 5;
        config.api.response_mode = mode;

        Self::start(config, Some(dir)).await
    }

    async fn start(config: AppConfig, dir: Option<TempDir>) -> Self {
        let repository = Repository::connect(&config.database)
            .await
            .expect("Failed to open database");
        repository.migrate().await.expect("Failed to run migrations");

        let state = AppState::new(config, repository);
        let app = create_router(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("No local address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server failed");
        });

        Self {
            base_url: format!("http://{}", addr),
            client: Client::new(),
            state,
            _dir: dir,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str) -> (u16, Value) {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send request");
        let status = response.status().as_u16();
        (status, response.json().await.expect("Failed to parse response"))
    }

    pub async fn post(&self, path: &str, body: &Value) -> (u16, Value) {
        let response = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send request");
        let status = response.status().as_u16();
        (status, response.json().await.expect("Failed to parse response"))
    }

    pub async fn patch(&self, path: &str, body: &Value) -> (u16, Value) {
        let response = self
            .client
            .patch(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to send request");
        let status = response.status().as_u16();
        (status, response.json().await.expect("Failed to parse response"))
    }

    pub async fn delete(&self, path: &str) -> (u16, Value) {
        let response = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .expect("Failed to send request");
        let status = response.status().as_u16();
        (status, response.json().await.expect("Failed to parse response"))
    }

    pub async fn author_count(&self, name: &str) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM authors WHERE name = ?")
            .bind(name)
            .fetch_one(&self.state.repository.pool)
            .await
            .expect("Failed to count authors")
    }

    pub async fn book_count(&self) -> usize {
        let mut session = self.state.repository.begin().await.expect("Failed to begin");
        let books = session.books_list().await.expect("Failed to list books");
        books.len()
    }
}
