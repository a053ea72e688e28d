//! Library API tests with distinct status codes for invalid input and missing entities

use library_catalog::config::ResponseMode;
use serde_json::json;

use crate::common::TestServer;

#[tokio::test]
async fn test_create_is_201() {
    let server = TestServer::spawn(ResponseMode::Strict).await;

    let (status, body) = server
        .post("/library/", &json!({"title": "Dune", "author": {"name": "Frank Herbert"}}))
        .await;
    assert_eq!(status, 201);
    assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn test_invalid_payload_is_422() {
    let server = TestServer::spawn(ResponseMode::Strict).await;

    let (status, body) = server.post("/library/", &json!({})).await;
    assert_eq!(status, 422);
    assert_eq!(body["error"], "BadValue");
    assert!(body["message"].is_string());
    assert_eq!(server.book_count().await, 0);
}

#[tokio::test]
async fn test_missing_entities_are_404() {
    let server = TestServer::spawn(ResponseMode::Strict).await;

    let (status, body) = server.get("/library/5/").await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "NoSuchData");

    let (status, _) = server.get("/library/Nobody/").await;
    assert_eq!(status, 404);

    let (status, _) = server
        .patch("/library/5/", &json!({"title": "Dune", "author": {"name": "Frank Herbert"}}))
        .await;
    assert_eq!(status, 404);
    assert_eq!(server.author_count("Frank Herbert").await, 0);

    let (status, _) = server.delete("/library/5/").await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_successful_reads_are_200() {
    let server = TestServer::spawn(ResponseMode::Strict).await;
    server
        .post("/library/", &json!({"title": "Dune", "author": {"name": "Frank Herbert"}}))
        .await;

    let (status, _) = server.get("/library/1/").await;
    assert_eq!(status, 200);

    let (status, body) = server.get("/library/Frank%20Herbert/").await;
    assert_eq!(status, 200);
    assert_eq!(body["books"].as_array().unwrap().len(), 1);

    let (status, _) = server.delete("/library/1/").await;
    assert_eq!(status, 200);
}
