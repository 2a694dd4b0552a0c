use std::time::Duration;

use crate::application::ports::FileLoaderError;

pub(super) const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Runs a parser on the blocking pool, bounded by [`EXTRACTION_TIMEOUT`].
pub(super) async fn run_blocking<T, F>(parse: F) -> Result<T, FileLoaderError>
where
    F: FnOnce() -> Result<T, FileLoaderError> + Send + 'static,
    T: Send + 'static,
{
    tokio::time::timeout(EXTRACTION_TIMEOUT, tokio::task::spawn_blocking(parse))
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))?
}
