use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use officio::application::ports::{LlmClient, LlmClientError};
use officio::infrastructure::llm::OpenAiClient;
use officio::presentation::config::LlmSettings;

#[derive(Clone, Default)]
struct Captured {
    body: Arc<Mutex<Option<Value>>>,
    authorization: Arc<Mutex<Option<String>>>,
}

async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}/v1")
}

fn settings(base_url: String, request_timeout_secs: u64) -> LlmSettings {
    LlmSettings {
        api_key: "sk-test".to_string(),
        base_url,
        chat_model: "gpt-4o-mini".to_string(),
        temperature: 0.2,
        max_tokens: None,
        request_timeout_secs,
    }
}

fn client_for(base_url: String) -> OpenAiClient {
    OpenAiClient::from_settings(&settings(base_url, 5)).unwrap()
}

async fn respond_with(status: StatusCode, body: Value) -> String {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(move || async move { (status, Json(body)) }),
    );
    spawn_server(router).await
}

async fn record_and_answer(
    State(captured): State<Captured>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    *captured.body.lock().unwrap() = Some(body);
    *captured.authorization.lock().unwrap() = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    Json(json!({
        "choices": [{ "message": { "role": "assistant", "content": "Antwort" } }]
    }))
}

#[tokio::test]
async fn given_successful_completion_when_calling_then_sends_two_messages_and_returns_content() {
    let captured = Captured::default();
    let router = Router::new()
        .route("/v1/chat/completions", post(record_and_answer))
        .with_state(captured.clone());
    let client = client_for(spawn_server(router).await);

    let result = client.complete("Systemrolle", "Benutzerprompt").await.unwrap();

    assert_eq!(result, "Antwort");

    let body = captured.body.lock().unwrap().clone().unwrap();
    assert_eq!(body["model"], "gpt-4o-mini");
    assert!((body["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
    assert!(body.get("max_tokens").is_none());
    assert_eq!(body["messages"][0]["role"], "system");
    assert_eq!(body["messages"][0]["content"], "Systemrolle");
    assert_eq!(body["messages"][1]["role"], "user");
    assert_eq!(body["messages"][1]["content"], "Benutzerprompt");
    assert_eq!(body["messages"].as_array().unwrap().len(), 2);

    assert_eq!(
        captured.authorization.lock().unwrap().as_deref(),
        Some("Bearer sk-test")
    );
}

#[tokio::test]
async fn given_rate_limit_status_when_calling_then_returns_rate_limited() {
    let base_url = respond_with(
        StatusCode::TOO_MANY_REQUESTS,
        json!({ "error": { "message": "Rate limit reached" } }),
    )
    .await;

    let result = client_for(base_url).complete("s", "u").await;

    assert!(matches!(result, Err(LlmClientError::RateLimited)));
}

#[tokio::test]
async fn given_unauthorized_status_when_calling_then_returns_provider_error_with_status() {
    let base_url = respond_with(
        StatusCode::UNAUTHORIZED,
        json!({ "error": { "message": "Incorrect API key provided" } }),
    )
    .await;

    let result = client_for(base_url).complete("s", "u").await;

    match result {
        Err(e @ LlmClientError::ApiRequestFailed { status: 401, .. }) => {
            assert!(e.is_provider_error());
        }
        other => panic!("expected 401 api error, got {other:?}"),
    }
}

#[tokio::test]
async fn given_empty_choices_when_calling_then_returns_invalid_response() {
    let base_url = respond_with(StatusCode::OK, json!({ "choices": [] })).await;

    let result = client_for(base_url).complete("s", "u").await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
}

#[tokio::test]
async fn given_null_content_when_calling_then_returns_invalid_response() {
    let base_url = respond_with(
        StatusCode::OK,
        json!({ "choices": [{ "message": { "role": "assistant", "content": null } }] }),
    )
    .await;

    let result = client_for(base_url).complete("s", "u").await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
}

#[tokio::test]
async fn given_unexpected_body_shape_when_calling_then_returns_invalid_response() {
    let base_url = respond_with(StatusCode::OK, json!({ "unexpected": true })).await;

    let result = client_for(base_url).complete("s", "u").await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
}

#[tokio::test]
async fn given_slow_provider_when_calling_then_returns_timeout() {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(json!({ "choices": [] }))
        }),
    );
    let base_url = spawn_server(router).await;
    let client = OpenAiClient::from_settings(&settings(base_url, 1)).unwrap();

    let result = client.complete("s", "u").await;

    assert!(matches!(result, Err(LlmClientError::Timeout)));
}

#[tokio::test]
async fn given_unreachable_endpoint_when_calling_then_returns_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = client_for(format!("http://{addr}/v1")).complete("s", "u").await;

    match result {
        Err(e @ LlmClientError::Transport(_)) => assert!(!e.is_provider_error()),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[test]
fn given_llm_settings_when_debug_printing_then_hides_api_key() {
    let rendered = format!("{:?}", settings("http://localhost".to_string(), 5));

    assert!(!rendered.contains("sk-test"));
    assert!(rendered.contains("[REDACTED]"));
}
