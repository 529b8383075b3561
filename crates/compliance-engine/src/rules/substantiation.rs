use shared_types::{Finding, RuleType, Severity};

use crate::catalog::SubstantiationRules;
use crate::patterns::find_pattern_context;

/// Check for claims that cannot be substantiated or need supporting evidence
pub fn check_substantiation(text: &str, rules: &SubstantiationRules) -> Vec<Finding> {
    let mut findings = Vec::new();

    for pattern in &rules.unsubstantiated_claims {
        if pattern.is_match(text) {
            findings.push(Finding {
                rule_type: RuleType::Substantiation,
                severity: Severity::High,
                description: format!("Unsubstantiated claim detected: {}", pattern.source()),
                location: Some(find_pattern_context(text, pattern)),
                suggestion: "Remove unsubstantiated claims or provide proper evidence and \
                             disclaimers"
                    .to_string(),
            });
        }
    }

    for pattern in &rules.requires_evidence {
        if pattern.is_match(text) {
            findings.push(Finding {
                rule_type: RuleType::Substantiation,
                severity: Severity::Medium,
                description: format!("Claim requiring substantiation: {}", pattern.source()),
                location: Some(find_pattern_context(text, pattern)),
                suggestion: "Provide evidence source, date, and methodology for this \
                             ranking/award claim"
                    .to_string(),
            });
        }
    }

    findings
}
