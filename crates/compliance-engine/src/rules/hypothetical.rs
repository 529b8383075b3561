use shared_types::{Finding, RuleType, Severity};

use crate::catalog::HypotheticalPerformanceRules;
use crate::patterns::{any_match, find_pattern_context};

/// Check projected or expected performance for the required warnings.
///
/// Any single warning anywhere in the text satisfies every projection.
pub fn check_hypothetical_performance(
    text: &str,
    rules: &HypotheticalPerformanceRules,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    for pattern in &rules.prohibited_without_disclosure {
        if pattern.is_match(text) && !any_match(text, &rules.required_warnings) {
            findings.push(Finding {
                rule_type: RuleType::HypotheticalPerformance,
                severity: Severity::High,
                description: format!(
                    "Hypothetical performance without required warnings: {}",
                    pattern.source()
                ),
                location: Some(find_pattern_context(text, pattern)),
                suggestion: "Add clear disclosure that this is hypothetical performance, \
                             includes risks and limitations"
                    .to_string(),
            });
        }
    }

    findings
}
