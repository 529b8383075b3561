pub mod document;
pub mod types;

pub use document::{DocumentFormat, DocumentStats, ExtractedText, ExtractionError, TextExtractor};
pub use types::{AnalysisResult, ComplianceStatus, DocumentType, Finding, Location, RuleType, Severity};
