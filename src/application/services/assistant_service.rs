use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError, LlmClient};
use crate::domain::{
    ContentType, Document, EmailReplyTask, NO_READABLE_TEXT_MESSAGE, SummaryTask, TranslateTask,
    UNSUPPORTED_FILE_MESSAGE,
};

use super::ai_gateway::AiGateway;
use super::instruction_parser::parse_directives;
use super::prompt_composer::{
    SYSTEM_ROLE, compose_email_reply, compose_summary, compose_translation,
};

/// Runs one office task end to end: extraction, prompt composition and the
/// completion call. Every method yields the text placed in the response.
pub struct AssistantService<F, L>
where
    F: FileLoader + ?Sized,
    L: LlmClient + ?Sized,
{
    file_loader: Arc<F>,
    gateway: AiGateway<L>,
}

impl<F, L> AssistantService<F, L>
where
    F: FileLoader + ?Sized,
    L: LlmClient + ?Sized,
{
    pub fn new(file_loader: Arc<F>, llm_client: Arc<L>) -> Self {
        Self {
            file_loader,
            gateway: AiGateway::new(llm_client),
        }
    }

    pub async fn summarize(&self, task: &SummaryTask) -> String {
        let directives = task
            .focus
            .as_deref()
            .map(parse_directives)
            .unwrap_or_default();
        tracing::debug!(directives = ?directives, "Derived summary directives");

        let prompt = compose_summary(task, &directives);
        self.gateway.complete(SYSTEM_ROLE, &prompt).await.into_message()
    }

    #[tracing::instrument(skip(self, data, focus), fields(bytes = data.len()))]
    pub async fn summarize_file(
        &self,
        data: &[u8],
        filename: &str,
        focus: Option<String>,
    ) -> Result<String, AssistantError> {
        let Some(content_type) = ContentType::from_filename(filename) else {
            tracing::warn!("Unsupported file type");
            return Ok(UNSUPPORTED_FILE_MESSAGE.to_string());
        };

        let document = Document::new(filename.to_string(), content_type, data.len() as u64);

        let text = match self.file_loader.extract_text(data, &document).await {
            Ok(text) if text.trim().is_empty() => {
                tracing::warn!("Extraction produced only whitespace");
                return Ok(NO_READABLE_TEXT_MESSAGE.to_string());
            }
            Ok(text) => text,
            Err(FileLoaderError::UnsupportedContentType(mime)) => {
                tracing::warn!(mime = %mime, "No extractor registered for content type");
                return Ok(UNSUPPORTED_FILE_MESSAGE.to_string());
            }
            Err(FileLoaderError::NoTextFound(_)) => {
                tracing::warn!("Document contains no readable text");
                return Ok(NO_READABLE_TEXT_MESSAGE.to_string());
            }
            Err(e) => return Err(AssistantError::Extraction(e)),
        };

        tracing::info!(chars = text.chars().count(), "Document text extracted");

        Ok(self.summarize(&SummaryTask { text, focus }).await)
    }

    pub async fn email_reply(&self, task: &EmailReplyTask) -> String {
        let prompt = compose_email_reply(task);
        self.gateway.complete(SYSTEM_ROLE, &prompt).await.into_message()
    }

    pub async fn translate(&self, task: &TranslateTask) -> String {
        let prompt = compose_translation(task);
        self.gateway.complete(SYSTEM_ROLE, &prompt).await.into_message()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("file extraction: {0}")]
    Extraction(#[from] FileLoaderError),
    #[error("upload: {0}")]
    Upload(String),
}
