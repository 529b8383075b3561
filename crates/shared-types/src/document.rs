//! Contract between the compliance engine and document text extraction

use thiserror::Error;

/// Input formats accepted for screening
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Doc,
    Docx,
    Txt,
}

impl DocumentFormat {
    /// Map a file extension (with or without the leading dot) to a format
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.trim_start_matches('.').to_lowercase().as_str() {
            "pdf" => Some(DocumentFormat::Pdf),
            "doc" => Some(DocumentFormat::Doc),
            "docx" => Some(DocumentFormat::Docx),
            "txt" => Some(DocumentFormat::Txt),
            _ => None,
        }
    }

    /// Detect the format from a filename's extension
    pub fn from_filename(filename: &str) -> Result<Self, ExtractionError> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        Self::from_extension(extension)
            .ok_or_else(|| ExtractionError::UnsupportedFormat(format!(".{}", extension)))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Doc => "doc",
            DocumentFormat::Docx => "docx",
            DocumentFormat::Txt => "txt",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to extract PDF text: {0}")]
    Pdf(String),

    #[error("Failed to extract Word document text: {0}")]
    Word(String),

    #[error("Failed to extract text file: {0}")]
    PlainText(String),
}

/// Plain text pulled out of an uploaded document
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedText {
    pub text: String,
    pub page_count: u32,
    pub word_count: usize,
    pub format: DocumentFormat,
}

impl ExtractedText {
    /// Trims the text and counts whitespace-separated words
    pub fn new(text: &str, page_count: u32, format: DocumentFormat) -> Self {
        Self {
            word_count: text.split_whitespace().count(),
            text: text.trim().to_string(),
            page_count,
            format,
        }
    }

    pub fn stats(&self) -> DocumentStats {
        DocumentStats {
            page_count: self.page_count,
            word_count: self.word_count,
            format: Some(self.format),
            error: None,
        }
    }
}

/// Extraction metadata reported alongside an analysis
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DocumentStats {
    pub page_count: u32,
    pub word_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<DocumentFormat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DocumentStats {
    pub fn failed(error: &ExtractionError) -> Self {
        Self {
            error: Some(error.to_string()),
            ..Self::default()
        }
    }
}

/// Converts raw document bytes into text.
///
/// Implementations are blocking; async callers should run them on a
/// blocking pool.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8], format: DocumentFormat)
        -> Result<ExtractedText, ExtractionError>;
}
