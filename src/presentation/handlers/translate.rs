use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::domain::{TaskKind, TranslateTask};
use crate::presentation::state::AppState;

use super::task_response::run_task;

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub target_lang: String,
    pub style: String,
    #[serde(default)]
    pub context: Option<String>,
}

impl From<TranslateRequest> for TranslateTask {
    fn from(request: TranslateRequest) -> Self {
        Self {
            text: request.text,
            target_lang: request.target_lang,
            style: request.style,
            context: request.context,
        }
    }
}

#[tracing::instrument(skip(state, request), fields(target_lang = %request.target_lang))]
pub async fn translate_handler<F, L>(
    State(state): State<AppState<F, L>>,
    Json(request): Json<TranslateRequest>,
) -> impl IntoResponse
where
    F: FileLoader + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    tracing::info!(chars = request.text.chars().count(), "Translate request");

    let task = TranslateTask::from(request);
    run_task(TaskKind::Translate, async {
        Ok(state.assistant_service.translate(&task).await)
    })
    .await
}
