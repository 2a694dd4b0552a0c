use async_trait::async_trait;

use crate::domain::Document;

/// Turns an uploaded office document into plain text.
///
/// `NoTextFound` is reserved for documents that parse cleanly but carry no
/// text (scanned PDFs, empty Word files); callers answer those differently
/// from broken uploads.
#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("no extractor for {0}")]
    UnsupportedContentType(String),
    #[error("{0} has no readable text")]
    NoTextFound(String),
    #[error("could not read document: {0}")]
    ExtractionFailed(String),
}
