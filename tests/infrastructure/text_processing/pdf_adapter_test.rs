use officio::application::ports::{FileLoader, FileLoaderError};
use officio::domain::{ContentType, Document};
use officio::infrastructure::text_processing::{PdfAdapter, collect_page_texts};

use crate::helpers::pdf_with_pages;

fn pdf_document(data: &[u8]) -> Document {
    Document::new("bericht.pdf".to_string(), ContentType::Pdf, data.len() as u64)
}

#[tokio::test]
async fn given_pages_with_empty_middle_when_extracting_then_joins_remaining_pages_in_order() {
    let data = pdf_with_pages(&["Erste", "", "Dritte"]);

    let text = PdfAdapter::new()
        .extract_text(&data, &pdf_document(&data))
        .await
        .unwrap();

    assert_eq!(text, "Erste\nDritte");
}

#[tokio::test]
async fn given_only_blank_pages_when_extracting_then_returns_no_text_found() {
    let data = pdf_with_pages(&["", ""]);

    let result = PdfAdapter::new()
        .extract_text(&data, &pdf_document(&data))
        .await;

    assert!(matches!(result, Err(FileLoaderError::NoTextFound(_))));
}

#[test]
fn given_some_unreadable_pages_when_collecting_then_skips_them() {
    let pages = vec![
        Ok("Seite  eins".to_string()),
        Err("broken content stream"),
        Ok("   ".to_string()),
        Ok("Seite drei".to_string()),
    ];

    let texts = collect_page_texts(pages).unwrap();

    assert_eq!(texts, vec!["Seite eins", "Seite drei"]);
}

#[test]
fn given_every_page_unreadable_when_collecting_then_returns_extraction_failed() {
    let pages: Vec<Result<String, &str>> = vec![Err("bad font"), Err("bad stream")];

    let result = collect_page_texts(pages);

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[test]
fn given_no_pages_when_collecting_then_returns_empty_list() {
    let pages: Vec<Result<String, &str>> = Vec::new();

    assert!(collect_page_texts(pages).unwrap().is_empty());
}

#[tokio::test]
async fn given_corrupt_bytes_when_extracting_pdf_then_returns_extraction_failed() {
    let adapter = PdfAdapter::new();
    let garbage = b"not a pdf at all";
    let document = Document::new(
        "corrupt.pdf".to_string(),
        ContentType::Pdf,
        garbage.len() as u64,
    );

    let result = adapter.extract_text(garbage, &document).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_docx_content_type_when_extracting_pdf_then_returns_unsupported() {
    let adapter = PdfAdapter::new();
    let data = b"PK\x03\x04";
    let document = Document::new(
        "brief.docx".to_string(),
        ContentType::Docx,
        data.len() as u64,
    );

    let result = adapter.extract_text(data, &document).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}
