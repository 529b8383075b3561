use shared_types::{Finding, RuleType, Severity};

use crate::catalog::AntiFraudRules;
use crate::patterns::find_pattern_context;

/// Check for misleading statements. Omission indicators are not consulted.
pub fn check_anti_fraud(text: &str, rules: &AntiFraudRules) -> Vec<Finding> {
    rules
        .misleading_patterns
        .iter()
        .filter(|pattern| pattern.is_match(text))
        .map(|pattern| Finding {
            rule_type: RuleType::AntiFraud,
            severity: Severity::High,
            description: format!("Potentially misleading statement: {}", pattern.source()),
            location: Some(find_pattern_context(text, pattern)),
            suggestion: "Remove misleading language and add appropriate risk disclosures"
                .to_string(),
        })
        .collect()
}
