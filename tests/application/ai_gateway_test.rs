use std::sync::Arc;

use officio::application::ports::LlmClientError;
use officio::application::services::AiGateway;
use officio::domain::AiOutcome;

use crate::helpers::MockLlmClient;

async fn complete_with(client: MockLlmClient) -> AiOutcome {
    AiGateway::new(Arc::new(client))
        .complete("System", "Prompt")
        .await
}

#[tokio::test]
async fn given_padded_completion_when_calling_then_returns_trimmed_text() {
    let outcome = complete_with(MockLlmClient::answering("  Zusammenfassung.\n\n")).await;

    assert_eq!(outcome, AiOutcome::Completed("Zusammenfassung.".to_string()));
}

#[tokio::test]
async fn given_failed_call_when_calling_then_outcome_is_not_completed() {
    let outcome = complete_with(MockLlmClient::failing(|| LlmClientError::RateLimited)).await;

    assert!(!outcome.is_completed());
}

#[tokio::test]
async fn given_system_role_and_prompt_when_calling_then_forwards_both_once() {
    let client = Arc::new(MockLlmClient::answering("ok"));
    let gateway = AiGateway::new(Arc::clone(&client));

    gateway.complete("Rolle", "Aufgabe").await;

    assert_eq!(client.call_count(), 1);
    assert_eq!(client.last_system_role().as_deref(), Some("Rolle"));
    assert_eq!(client.last_user_prompt().as_deref(), Some("Aufgabe"));
}

#[tokio::test]
async fn given_rate_limit_when_calling_then_returns_provider_failure() {
    let outcome = complete_with(MockLlmClient::failing(|| LlmClientError::RateLimited)).await;

    assert_eq!(outcome, AiOutcome::ProviderFailed);
}

#[tokio::test]
async fn given_auth_rejection_when_calling_then_returns_provider_failure() {
    let outcome = complete_with(MockLlmClient::failing(|| {
        LlmClientError::ApiRequestFailed {
            status: 401,
            message: "Incorrect API key provided: sk-abc".to_string(),
        }
    }))
    .await;

    assert_eq!(outcome, AiOutcome::ProviderFailed);
    assert!(!outcome.into_message().contains("sk-abc"));
}

#[tokio::test]
async fn given_timeout_when_calling_then_returns_provider_failure() {
    let outcome = complete_with(MockLlmClient::failing(|| LlmClientError::Timeout)).await;

    assert_eq!(outcome, AiOutcome::ProviderFailed);
}

#[tokio::test]
async fn given_connection_failure_when_calling_then_returns_internal_failure() {
    let outcome = complete_with(MockLlmClient::failing(|| {
        LlmClientError::Transport("connection refused".to_string())
    }))
    .await;

    assert_eq!(outcome, AiOutcome::InternalFailed);
}

#[tokio::test]
async fn given_undecodable_response_when_calling_then_returns_internal_failure() {
    let outcome = complete_with(MockLlmClient::failing(|| {
        LlmClientError::InvalidResponse("expected value at line 1".to_string())
    }))
    .await;

    assert_eq!(
        outcome.into_message(),
        "❌ Interner Serverfehler bei der KI."
    );
}
