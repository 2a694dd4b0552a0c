use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::AssistantService;

pub struct AppState<F, L>
where
    F: FileLoader + ?Sized,
    L: LlmClient + ?Sized,
{
    pub assistant_service: Arc<AssistantService<F, L>>,
}

impl<F, L> AppState<F, L>
where
    F: FileLoader + ?Sized,
    L: LlmClient + ?Sized,
{
    pub fn new(assistant_service: Arc<AssistantService<F, L>>) -> Self {
        Self { assistant_service }
    }
}

impl<F, L> Clone for AppState<F, L>
where
    F: FileLoader + ?Sized,
    L: LlmClient + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            assistant_service: Arc::clone(&self.assistant_service),
        }
    }
}
