use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::domain::{SummaryTask, TaskKind};
use crate::presentation::state::AppState;

use super::task_response::run_task;

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    #[serde(default)]
    pub focus: Option<String>,
}

impl From<SummarizeRequest> for SummaryTask {
    fn from(request: SummarizeRequest) -> Self {
        Self {
            text: request.text,
            focus: request.focus,
        }
    }
}

#[tracing::instrument(skip(state, request))]
pub async fn summarize_handler<F, L>(
    State(state): State<AppState<F, L>>,
    Json(request): Json<SummarizeRequest>,
) -> impl IntoResponse
where
    F: FileLoader + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    tracing::info!(chars = request.text.chars().count(), "Summarize request");

    let task = SummaryTask::from(request);
    run_task(TaskKind::Summarize, async {
        Ok(state.assistant_service.summarize(&task).await)
    })
    .await
}
