use shared_types::{Finding, RuleType, Severity};

use crate::catalog::TestimonialsEndorsementsRules;
use crate::patterns::{find_pattern_context, missing_patterns};

/// Check testimonials and endorsements for the required disclosures.
///
/// Emits one finding per triggering indicator, not per missing disclosure.
pub fn check_testimonials_endorsements(
    text: &str,
    rules: &TestimonialsEndorsementsRules,
) -> Vec<Finding> {
    let mut findings = Vec::new();

    for indicator in &rules.client_indicators {
        if !indicator.is_match(text) {
            continue;
        }

        if !missing_patterns(text, &rules.required_disclosures).is_empty() {
            findings.push(Finding {
                rule_type: RuleType::TestimonialsEndorsements,
                severity: Severity::High,
                description: "Testimonial/endorsement missing required disclosures".to_string(),
                location: Some(find_pattern_context(text, indicator)),
                suggestion: "Add disclosures about compensation, conflicts of interest, and \
                             client/investor status"
                    .to_string(),
            });
        }
    }

    findings
}
