use shared_types::{Finding, Location, RuleType, Severity};

use crate::catalog::PerformanceAdvertisingRules;
use crate::patterns::{contains_any_keyword, find_pattern_context, missing_patterns};

/// Check performance advertising for cherry-picking and missing disclosures
pub fn check_performance_advertising(
    text: &str,
    rules: &PerformanceAdvertisingRules,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    for pattern in &rules.prohibited_patterns {
        if pattern.is_match(text) {
            findings.push(Finding {
                rule_type: RuleType::PerformanceAdvertising,
                severity: Severity::High,
                description: format!("Potential cherry-picking detected: {}", pattern.source()),
                location: Some(find_pattern_context(text, pattern)),
                suggestion: "Remove selective time period language and present standardized \
                             time periods (1, 5, 10 years, inception)"
                    .to_string(),
            });
        }
    }

    // Disclosures are only required once performance is discussed, and one
    // finding covers every missing disclosure
    if contains_any_keyword(text, rules.performance_keywords)
        && !missing_patterns(text, &rules.required_disclosures).is_empty()
    {
        findings.push(Finding {
            rule_type: RuleType::PerformanceAdvertising,
            severity: Severity::Medium,
            description: "Missing required performance disclosures".to_string(),
            location: Some(Location::Label("Throughout document".to_string())),
            suggestion: "Add disclosures about net fees, past performance not guaranteeing \
                         future results, and risk warnings"
                .to_string(),
        });
    }

    findings
}
