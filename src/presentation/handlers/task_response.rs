use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use axum::Json;
use futures::FutureExt;
use serde::Serialize;

use crate::application::services::AssistantError;
use crate::domain::TaskKind;

/// Body of every task endpoint. Failures differ from successes only by text.
#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub result: String,
}

impl TaskResponse {
    pub fn new(result: impl Into<String>) -> Self {
        Self {
            result: result.into(),
        }
    }
}

/// Awaits a task and turns any error or panic into the task's generic
/// failure text. Details go to the log only.
pub(super) async fn run_task<Fut>(kind: TaskKind, task: Fut) -> Json<TaskResponse>
where
    Fut: Future<Output = Result<String, AssistantError>>,
{
    let result = match AssertUnwindSafe(task).catch_unwind().await {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => {
            tracing::error!(task = %kind, error = %e, "Task failed");
            kind.failure_message().to_string()
        }
        Err(payload) => {
            tracing::error!(task = %kind, panic = %panic_message(payload.as_ref()), "Task panicked");
            kind.failure_message().to_string()
        }
    };

    Json(TaskResponse::new(result))
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}
