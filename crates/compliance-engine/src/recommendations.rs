//! Remediation advice derived from which categories produced findings

use std::collections::BTreeSet;

use shared_types::{Finding, RuleType};

pub const COUNSEL_REVIEW: &str = "Consult with compliance counsel to review all marketing materials";
pub const KEEP_RECORDS: &str =
    "Maintain proper documentation and records for all marketing materials";

/// Advisory for one category; `None` for the synthetic error types
pub fn category_advisory(rule_type: RuleType) -> Option<&'static str> {
    let advisory = match rule_type {
        RuleType::PerformanceAdvertising => {
            "Review performance advertising to ensure proper time periods (1, 5, 10 years, \
             inception) and required disclosures"
        }
        RuleType::HypotheticalPerformance => {
            "Add clear hypothetical performance warnings including risks and limitations"
        }
        RuleType::TestimonialsEndorsements => {
            "Include required testimonial disclosures: compensation, conflicts of interest, \
             client status"
        }
        RuleType::Substantiation => {
            "Remove unsubstantiated claims or provide proper evidence and documentation"
        }
        RuleType::AntiFraud => {
            "Remove potentially misleading statements and add appropriate risk disclosures"
        }
        RuleType::ThirdPartyRatings => {
            "Add third-party rating disclosures: date, period, source, compensation"
        }
        RuleType::ExtractionError | RuleType::AnalysisError => return None,
    };
    Some(advisory)
}

/// One advisory per distinct category in report order, then the two general
/// recommendations. Empty when there are no findings.
pub fn generate_recommendations(findings: &[Finding]) -> Vec<String> {
    if findings.is_empty() {
        return Vec::new();
    }

    // RuleType orders by report order
    let categories: BTreeSet<RuleType> = findings.iter().map(|f| f.rule_type).collect();

    categories
        .into_iter()
        .filter_map(category_advisory)
        .chain([COUNSEL_REVIEW, KEEP_RECORDS])
        .map(str::to_string)
        .collect()
}
