//! Document text extraction
//!
//! Turns uploaded PDF, Word and plain-text files into the text the
//! compliance engine screens. Extraction is blocking and CPU bound; the
//! server runs it on a blocking pool.

pub mod pdf;
pub mod plain;
pub mod word;

use shared_types::{DocumentFormat, ExtractedText, ExtractionError, TextExtractor};
use tracing::debug;

pub use pdf::extract_pdf;
pub use plain::extract_plain_text;
pub use word::extract_word;

/// Routes each supported format to its extractor
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentTextExtractor;

impl DocumentTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for DocumentTextExtractor {
    fn extract(
        &self,
        bytes: &[u8],
        format: DocumentFormat,
    ) -> Result<ExtractedText, ExtractionError> {
        debug!("Extracting {} bytes as {}", bytes.len(), format.as_str());

        match format {
            DocumentFormat::Pdf => extract_pdf(bytes),
            // Legacy .doc uploads go through the OOXML reader as well
            DocumentFormat::Doc | DocumentFormat::Docx => extract_word(bytes),
            DocumentFormat::Txt => extract_plain_text(bytes),
        }
    }
}

/// Detect the format from the filename, then extract
pub fn extract_file(filename: &str, bytes: &[u8]) -> Result<ExtractedText, ExtractionError> {
    let format = DocumentFormat::from_filename(filename)?;
    DocumentTextExtractor::new().extract(bytes, format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_plain_text() {
        let extracted = extract_file("ad.txt", b"Net of fees returns").unwrap();
        assert_eq!(extracted.format, DocumentFormat::Txt);
        assert_eq!(extracted.word_count, 4);
    }

    #[test]
    fn test_rejects_unknown_extension() {
        let err = extract_file("deck.key", b"whatever").unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_legacy_doc_is_read_as_ooxml() {
        let err = DocumentTextExtractor::new()
            .extract(b"\xD0\xCF\x11\xE0 binary word", DocumentFormat::Doc)
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Word(_)));
    }
}
