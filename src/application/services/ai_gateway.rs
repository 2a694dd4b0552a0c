use std::sync::Arc;

use crate::application::ports::LlmClient;
use crate::domain::AiOutcome;
use crate::infrastructure::observability::sanitize_prompt;

/// Single point through which every completion request leaves the service.
pub struct AiGateway<L>
where
    L: LlmClient + ?Sized,
{
    llm_client: Arc<L>,
}

impl<L> AiGateway<L>
where
    L: LlmClient + ?Sized,
{
    pub fn new(llm_client: Arc<L>) -> Self {
        Self { llm_client }
    }

    /// Sends one system/user message pair and collapses any failure into a
    /// caller-safe outcome. Error details only reach the logs.
    #[tracing::instrument(skip_all, fields(prompt_chars = user_prompt.chars().count()))]
    pub async fn complete(&self, system_role: &str, user_prompt: &str) -> AiOutcome {
        tracing::debug!(prompt = %sanitize_prompt(user_prompt), "Sending completion request");

        let outcome = match self.llm_client.complete(system_role, user_prompt).await {
            Ok(text) => AiOutcome::Completed(text.trim().to_string()),
            Err(e) if e.is_provider_error() => {
                tracing::error!(error = %e, "LLM provider rejected the request");
                AiOutcome::ProviderFailed
            }
            Err(e) => {
                tracing::error!(error = %e, "Unexpected failure while calling the LLM");
                AiOutcome::InternalFailed
            }
        };

        tracing::info!(completed = outcome.is_completed(), "Completion finished");
        outcome
    }
}
