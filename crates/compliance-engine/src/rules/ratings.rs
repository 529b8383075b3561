use shared_types::{Finding, Location, RuleType, Severity};

use crate::catalog::ThirdPartyRatingsRules;
use crate::patterns::{contains_any_keyword, missing_patterns};

/// Check third-party ratings and awards for the required disclosures.
///
/// At most one finding, located by a fixed label.
pub fn check_third_party_ratings(text: &str, rules: &ThirdPartyRatingsRules) -> Vec<Finding> {
    if !contains_any_keyword(text, rules.rating_indicators)
        || missing_patterns(text, &rules.required_disclosures).is_empty()
    {
        return Vec::new();
    }

    vec![Finding {
        rule_type: RuleType::ThirdPartyRatings,
        severity: Severity::Medium,
        description: "Third-party rating missing required disclosures".to_string(),
        location: Some(Location::Label("Rating/award mentions".to_string())),
        suggestion: "Add disclosures about rating date, period, source identity, and any \
                     compensation provided"
            .to_string(),
    }]
}
