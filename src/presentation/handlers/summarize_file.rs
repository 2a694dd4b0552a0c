use axum::Json;
use axum::body::Bytes;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::AssistantError;
use crate::domain::{MISSING_FILE_MESSAGE, TaskKind};
use crate::presentation::state::AppState;

use super::task_response::{TaskResponse, run_task};

const FILE_FIELD: &str = "file";
const FOCUS_FIELD: &str = "focus";

struct Upload {
    filename: String,
    data: Bytes,
    focus: Option<String>,
}

/// Collects the `file` and optional `focus` fields, in whatever order they arrive.
async fn read_upload(multipart: &mut Multipart) -> Result<Option<Upload>, MultipartError> {
    let mut file: Option<(String, Bytes)> = None;
    let mut focus = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(FILE_FIELD) => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await?;
                file = Some((filename, data));
            }
            Some(FOCUS_FIELD) => {
                focus = Some(field.text().await?);
            }
            other => {
                tracing::debug!(field = ?other, "Ignoring unknown multipart field");
            }
        }
    }

    Ok(file.map(|(filename, data)| Upload {
        filename,
        data,
        focus,
    }))
}

#[tracing::instrument(skip(state, multipart))]
pub async fn summarize_file_handler<F, L>(
    State(state): State<AppState<F, L>>,
    mut multipart: Multipart,
) -> Response
where
    F: FileLoader + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let kind = TaskKind::SummarizeFile;

    let upload = match read_upload(&mut multipart).await {
        Ok(Some(upload)) => upload,
        Ok(None) => {
            tracing::warn!("Summarize-file request without a file");
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(TaskResponse::new(MISSING_FILE_MESSAGE)),
            )
                .into_response();
        }
        Err(e) => {
            let error = AssistantError::Upload(e.to_string());
            return run_task(kind, async { Err::<String, _>(error) })
                .await
                .into_response();
        }
    };

    tracing::info!(
        filename = %upload.filename,
        bytes = upload.data.len(),
        "Summarize-file request"
    );

    run_task(kind, async {
        state
            .assistant_service
            .summarize_file(&upload.data, &upload.filename, upload.focus.clone())
            .await
    })
    .await
    .into_response()
}
