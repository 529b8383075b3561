use crate::document::DocumentStats;

/// Rule category a finding belongs to.
///
/// The first six variants are the marketing-rule categories, declared in the
/// order reports list them. The last two are synthetic and only appear when
/// extraction or analysis fails.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    PerformanceAdvertising,
    HypotheticalPerformance,
    TestimonialsEndorsements,
    Substantiation,
    AntiFraud,
    ThirdPartyRatings,
    ExtractionError,
    AnalysisError,
}

impl RuleType {
    /// Compliance categories in report order
    pub const CATEGORIES: [RuleType; 6] = [
        RuleType::PerformanceAdvertising,
        RuleType::HypotheticalPerformance,
        RuleType::TestimonialsEndorsements,
        RuleType::Substantiation,
        RuleType::AntiFraud,
        RuleType::ThirdPartyRatings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleType::PerformanceAdvertising => "performance_advertising",
            RuleType::HypotheticalPerformance => "hypothetical_performance",
            RuleType::TestimonialsEndorsements => "testimonials_endorsements",
            RuleType::Substantiation => "substantiation",
            RuleType::AntiFraud => "anti_fraud",
            RuleType::ThirdPartyRatings => "third_party_ratings",
            RuleType::ExtractionError => "extraction_error",
            RuleType::AnalysisError => "analysis_error",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "performance_advertising" => Some(RuleType::PerformanceAdvertising),
            "hypothetical_performance" => Some(RuleType::HypotheticalPerformance),
            "testimonials_endorsements" => Some(RuleType::TestimonialsEndorsements),
            "substantiation" => Some(RuleType::Substantiation),
            "anti_fraud" => Some(RuleType::AntiFraud),
            "third_party_ratings" => Some(RuleType::ThirdPartyRatings),
            "extraction_error" => Some(RuleType::ExtractionError),
            "analysis_error" => Some(RuleType::AnalysisError),
            _ => None,
        }
    }

    /// True for the six marketing-rule categories
    pub fn is_category(&self) -> bool {
        !matches!(self, RuleType::ExtractionError | RuleType::AnalysisError)
    }
}

impl std::fmt::Display for RuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    /// Points deducted from the compliance score for one finding
    pub fn deduction(&self) -> u32 {
        match self {
            Severity::High => 25,
            Severity::Medium => 10,
            Severity::Low => 5,
        }
    }
}

/// Where in the document a finding applies
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    /// Text window around the first match, e.g. `...offers guaranteed returns...`
    Snippet(String),
    /// Fixed description for findings about absent text
    Label(String),
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Finding {
    pub rule_type: RuleType,
    pub severity: Severity,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    pub suggestion: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    NeedsReview,
    NonCompliant,
    Error,
}

impl ComplianceStatus {
    /// Status band for a score; never yields `Error`
    pub fn from_score(score: u32) -> Self {
        if score >= 85 {
            ComplianceStatus::Compliant
        } else if score >= 70 {
            ComplianceStatus::NeedsReview
        } else {
            ComplianceStatus::NonCompliant
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnalysisResult {
    pub overall_score: u32,
    pub compliance_status: ComplianceStatus,
    pub findings: Vec<Finding>,
    pub recommendations: Vec<String>,
    pub document_stats: DocumentStats,
}

/// Kind of marketing material submitted for review
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    #[default]
    Advertisement,
    Rfp,
    Rfi,
    Other,
}

impl DocumentType {
    /// Unrecognised names map to `Other`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "" | "advertisement" => DocumentType::Advertisement,
            "rfp" => DocumentType::Rfp,
            "rfi" => DocumentType::Rfi,
            _ => DocumentType::Other,
        }
    }
}
