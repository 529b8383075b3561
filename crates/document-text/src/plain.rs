use shared_types::{DocumentFormat, ExtractedText, ExtractionError};

/// Decode a UTF-8 text file. Invalid UTF-8 is an error, not lossy.
pub fn extract_plain_text(bytes: &[u8]) -> Result<ExtractedText, ExtractionError> {
    let text =
        std::str::from_utf8(bytes).map_err(|e| ExtractionError::PlainText(e.to_string()))?;
    Ok(ExtractedText::new(text, 1, DocumentFormat::Txt))
}
