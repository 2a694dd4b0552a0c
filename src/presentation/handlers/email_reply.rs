use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::domain::{EmailReplyTask, TaskKind};
use crate::presentation::state::AppState;

use super::task_response::run_task;

#[derive(Debug, Deserialize)]
pub struct EmailReplyRequest {
    pub original_email: String,
    pub keywords: String,
    pub style: String,
}

impl From<EmailReplyRequest> for EmailReplyTask {
    fn from(request: EmailReplyRequest) -> Self {
        Self {
            original_email: request.original_email,
            keywords: request.keywords,
            style: request.style,
        }
    }
}

#[tracing::instrument(skip(state, request))]
pub async fn email_reply_handler<F, L>(
    State(state): State<AppState<F, L>>,
    Json(request): Json<EmailReplyRequest>,
) -> impl IntoResponse
where
    F: FileLoader + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    tracing::info!("Email reply request");

    let task = EmailReplyTask::from(request);
    run_task(TaskKind::EmailReply, async {
        Ok(state.assistant_service.email_reply(&task).await)
    })
    .await
}
