use async_trait::async_trait;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(
        &self,
        system_role: &str,
        user_prompt: &str,
    ) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed with status {status}: {message}")]
    ApiRequestFailed { status: u16, message: String },
    #[error("rate limited")]
    RateLimited,
    #[error("request timed out")]
    Timeout,
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl LlmClientError {
    /// Errors reported by the provider itself, as opposed to failures on our side of the wire.
    pub fn is_provider_error(&self) -> bool {
        matches!(
            self,
            Self::ApiRequestFailed { .. } | Self::RateLimited | Self::Timeout
        )
    }
}
