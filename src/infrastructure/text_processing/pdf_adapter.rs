use std::io::Write;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document};

use super::blocking_extraction::run_blocking;
use super::text_sanitizer::sanitize_extracted_text;

#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Returns the sanitized text of every page that has any, in page order.
    fn extract_pages(data: &[u8]) -> Result<Vec<String>, FileLoaderError> {
        let suffix = format!(".{}", ContentType::Pdf.extension());
        let mut temp_file = tempfile::Builder::new().suffix(&suffix).tempfile().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to create temp file: {e}"))
        })?;

        temp_file.write_all(data).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to write temp file: {e}"))
        })?;

        let mut doc = PdfDocument::open(temp_file.path())
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let page_results = (0..page_count).map(|page_index| doc.extract_text(page_index));

        collect_page_texts(page_results)
    }
}

/// Sanitizes page texts in order and drops empty pages. Unreadable pages are
/// skipped, unless no page could be read at all.
pub fn collect_page_texts<E>(
    page_results: impl IntoIterator<Item = Result<String, E>>,
) -> Result<Vec<String>, FileLoaderError>
where
    E: std::fmt::Display,
{
    let mut pages = Vec::new();
    let mut read = 0usize;
    let mut failed = 0usize;

    for (page_index, result) in page_results.into_iter().enumerate() {
        let raw = match result {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(page = page_index + 1, error = %e, "Skipping unreadable page");
                failed += 1;
                continue;
            }
        };
        read += 1;

        let text = sanitize_extracted_text(&raw);
        if !text.is_empty() {
            pages.push(text);
        }
    }

    if read == 0 && failed > 0 {
        return Err(FileLoaderError::ExtractionFailed(format!(
            "none of {failed} pages could be read"
        )));
    }

    Ok(pages)
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename, bytes = document.size_bytes))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.content_type != ContentType::Pdf {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let bytes = data.to_vec();
        let pages = run_blocking(move || Self::extract_pages(&bytes)).await?;

        tracing::info!(page_count = pages.len(), "PDF text extraction complete");

        if pages.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(pages.join("\n"))
    }
}
