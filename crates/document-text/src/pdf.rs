use std::panic::catch_unwind;

use shared_types::{DocumentFormat, ExtractedText, ExtractionError};

/// Extract all page text from PDF bytes
pub fn extract_pdf(bytes: &[u8]) -> Result<ExtractedText, ExtractionError> {
    if bytes.len() < 4 || &bytes[0..4] != b"%PDF" {
        return Err(ExtractionError::Pdf("missing %PDF header".to_string()));
    }

    // The parser panics on some malformed streams instead of returning an error
    let parsed = catch_unwind(|| -> Result<(String, u32), ExtractionError> {
        let document = pdf_extract::Document::load_mem(bytes).map_err(|e| pdf_error(&e.to_string()))?;
        let page_count = document.get_pages().len() as u32;
        let text =
            pdf_extract::extract_text_from_mem(bytes).map_err(|e| pdf_error(&e.to_string()))?;
        Ok((text, page_count))
    })
    .map_err(|_| ExtractionError::Pdf("malformed PDF content".to_string()))?;

    let (text, page_count) = parsed?;
    Ok(ExtractedText::new(&text, page_count, DocumentFormat::Pdf))
}

fn pdf_error(message: &str) -> ExtractionError {
    let lower = message.to_lowercase();
    if lower.contains("encrypted") || lower.contains("password") {
        ExtractionError::Pdf(format!("document is password protected ({})", message))
    } else {
        ExtractionError::Pdf(message.to_string())
    }
}
