//! Screening of investment adviser marketing materials against the SEC
//! marketing rule.
//!
//! The engine normalizes document text, runs one checker per rule category,
//! then scores the findings and derives remediation advice. It holds only the
//! compiled [`RuleCatalog`] and is safe to share across threads.

pub mod aggregate;
pub mod catalog;
pub mod error;
pub mod normalize;
pub mod patterns;
pub mod recommendations;
pub mod rules;
pub mod scoring;

use shared_types::{
    AnalysisResult, ComplianceStatus, DocumentFormat, DocumentStats, ExtractedText,
    ExtractionError, Finding, RuleType, Severity, TextExtractor,
};
use tracing::{info, warn};

pub use aggregate::{CheckReport, CheckerFailure};
pub use catalog::RuleCatalog;
pub use error::EngineError;
pub use normalize::normalize_text;

const RETRY_UPLOAD: &str = "Please try uploading the document again";
const UPLOAD_VALID_DOCUMENT: &str = "Upload a valid PDF, Word, or text document";

pub struct ComplianceEngine {
    catalog: RuleCatalog,
}

impl ComplianceEngine {
    /// Compile the standard catalog
    pub fn new() -> Result<Self, EngineError> {
        Ok(Self::with_catalog(RuleCatalog::compile()?))
    }

    pub fn with_catalog(catalog: RuleCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// Findings for already-normalized text, without scoring
    pub fn check_text(&self, normalized: &str) -> Vec<Finding> {
        aggregate::run_checks(normalized, &self.catalog).findings
    }

    /// Extract `bytes` and analyze the result
    pub fn analyze<E>(&self, extractor: &E, bytes: &[u8], format: DocumentFormat) -> AnalysisResult
    where
        E: TextExtractor + ?Sized,
    {
        self.analyze_extraction(extractor.extract(bytes, format))
    }

    /// Analyze the outcome of an extraction. Failed extractions bypass the
    /// checkers entirely.
    pub fn analyze_extraction(
        &self,
        extracted: Result<ExtractedText, ExtractionError>,
    ) -> AnalysisResult {
        match extracted {
            Ok(extracted) => {
                let stats = extracted.stats();
                self.analyze_text(&extracted.text, stats)
            }
            Err(err) => {
                warn!(error = %err, "text extraction failed");
                extraction_failure(&err)
            }
        }
    }

    /// Normalize raw text and analyze it, passing `stats` through
    pub fn analyze_text(&self, raw_text: &str, stats: DocumentStats) -> AnalysisResult {
        let normalized = normalize_text(raw_text);
        let report = aggregate::run_checks(&normalized, &self.catalog);
        let result = build_result(report, stats);

        info!(
            score = result.overall_score,
            status = ?result.compliance_status,
            findings = result.findings.len(),
            "analysis complete"
        );

        result
    }
}

fn build_result(report: CheckReport, stats: DocumentStats) -> AnalysisResult {
    if !report.is_complete() {
        let mut findings = report.findings;
        findings.extend(report.failures.iter().map(|failure| Finding {
            rule_type: RuleType::AnalysisError,
            severity: Severity::High,
            description: format!(
                "Analysis failed: {} checker: {}",
                failure.category, failure.message
            ),
            location: None,
            suggestion: "Please try again or contact support".to_string(),
        }));

        return AnalysisResult {
            overall_score: 0,
            compliance_status: ComplianceStatus::Error,
            findings,
            recommendations: vec![RETRY_UPLOAD.to_string()],
            document_stats: stats,
        };
    }

    let (overall_score, compliance_status) = scoring::score_findings(&report.findings);
    let recommendations = recommendations::generate_recommendations(&report.findings);

    AnalysisResult {
        overall_score,
        compliance_status,
        findings: report.findings,
        recommendations,
        document_stats: stats,
    }
}

fn extraction_failure(err: &ExtractionError) -> AnalysisResult {
    AnalysisResult {
        overall_score: 0,
        compliance_status: ComplianceStatus::Error,
        findings: vec![Finding {
            rule_type: RuleType::ExtractionError,
            severity: Severity::High,
            description: err.to_string(),
            location: None,
            suggestion: "Please upload a valid document file".to_string(),
        }],
        recommendations: vec![UPLOAD_VALID_DOCUMENT.to_string()],
        document_stats: DocumentStats::failed(err),
    }
}
