//! HTTP API tests against the router, no socket.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use tokenshrink::server::{Server, ServerConfig};

fn app() -> Router {
    Server::new(ServerConfig::default().without_logging()).router()
}

async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn repeated_prompt() -> String {
    "It is important to test this carefully. ".repeat(8)
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(app(), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], tokenshrink::VERSION);
}

#[tokio::test]
async fn test_compress_returns_contract_shape() {
    let (status, body) = send(
        app(),
        "POST",
        "/compress",
        Some(json!({"text": repeated_prompt(), "domain": "auto"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let compressed = body["compressed"].as_str().unwrap();
    let rosetta = body["rosetta"].as_str().unwrap();
    assert!(compressed.starts_with("[DECODE]"));
    assert!(rosetta.contains("P1="));
    assert!(body["stats"]["tokensSaved"].as_u64().unwrap() > 0);
    assert_eq!(body["stats"]["tooShort"], false);
    assert_eq!(body["stats"]["tokenizer"], "built-in");
}

#[tokio::test]
async fn test_compress_missing_text() {
    let (status, body) = send(app(), "POST", "/compress", Some(json!({"domain": "code"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Text is required");
}

#[tokio::test]
async fn test_compress_validation_errors() {
    let (status, body) = send(app(), "POST", "/compress", Some(json!({"text": "   "}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Text cannot be empty");

    let (status, body) = send(
        app(),
        "POST",
        "/compress",
        Some(json!({"text": "only five words right here"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Text must be at least 10 words");
}

#[tokio::test]
async fn test_compress_plan_limit() {
    let app = Server::new(ServerConfig::default().without_logging().with_max_words(20)).router();
    let text = vec!["word"; 25].join(" ");
    let (status, body) = send(app, "POST", "/compress", Some(json!({"text": text}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Text exceeds your plan limit of 20 words per submission (got 25)"
    );
}

#[tokio::test]
async fn test_compress_under_word_floor_is_too_short() {
    let text = "Please make sure the function returns the right value every time.";
    let (status, body) = send(app(), "POST", "/compress", Some(json!({"text": text}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["compressed"], text);
    assert_eq!(body["rosetta"], "");
    assert_eq!(body["stats"]["tooShort"], true);
}

#[tokio::test]
async fn test_compress_invalid_strategy() {
    let (status, body) = send(
        app(),
        "POST",
        "/compress",
        Some(json!({"text": repeated_prompt(), "strategy": "magic"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid strategy: magic");
}

#[tokio::test]
async fn test_decompress_roundtrip_through_api() {
    let (_, compressed) = send(
        app(),
        "POST",
        "/compress",
        Some(json!({"text": repeated_prompt()})),
    )
    .await;

    let (status, body) = send(
        app(),
        "POST",
        "/decompress",
        Some(json!({"text": compressed["compressed"]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["decompressed"]
        .as_str()
        .unwrap()
        .contains("test this carefully."));
    assert!(body.get("note").is_none());
}

#[tokio::test]
async fn test_decompress_without_header() {
    let (status, body) = send(
        app(),
        "POST",
        "/decompress",
        Some(json!({"text": "plain text"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["decompressed"], "plain text");
    assert_eq!(body["note"], tokenshrink::codec::NO_HEADER_NOTE);

    let (status, body) = send(app(), "POST", "/decompress", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Text is required");
}

#[tokio::test]
async fn test_status_counts_usage() {
    let server = Server::new(ServerConfig::default().without_logging());

    send(
        server.router(),
        "POST",
        "/compress",
        Some(json!({"text": repeated_prompt()})),
    )
    .await;
    send(server.router(), "POST", "/compress", Some(json!({}))).await;
    send(
        server.router(),
        "POST",
        "/decompress",
        Some(json!({"text": "x"})),
    )
    .await;

    let (status, body) = send(server.router(), "GET", "/status", None).await;
    assert_eq!(status, StatusCode::OK);
    let usage = &body["usage"];
    assert_eq!(usage["compressions"], 1);
    assert_eq!(usage["compressed"], 1);
    assert_eq!(usage["wordsProcessed"], 56);
    assert_eq!(usage["decompressions"], 1);
    assert_eq!(usage["rejected"], 1);
    assert!(usage["tokensSaved"].as_u64().unwrap() > 0);
}
