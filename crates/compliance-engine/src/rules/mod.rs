//! Category checkers
//!
//! One pure function per compliance category. Each reads only its own
//! category's rules and emits findings in pattern order.

pub mod anti_fraud;
pub mod hypothetical;
pub mod performance;
pub mod ratings;
pub mod substantiation;
pub mod testimonials;

use shared_types::Finding;

use crate::catalog::CategoryRules;

pub use anti_fraud::check_anti_fraud;
pub use hypothetical::check_hypothetical_performance;
pub use performance::check_performance_advertising;
pub use ratings::check_third_party_ratings;
pub use substantiation::check_substantiation;
pub use testimonials::check_testimonials_endorsements;

/// Run the checker that belongs to `rules`
pub fn check_category(text: &str, rules: &CategoryRules) -> Vec<Finding> {
    match rules {
        CategoryRules::PerformanceAdvertising(r) => check_performance_advertising(text, r),
        CategoryRules::HypotheticalPerformance(r) => check_hypothetical_performance(text, r),
        CategoryRules::TestimonialsEndorsements(r) => check_testimonials_endorsements(text, r),
        CategoryRules::Substantiation(r) => check_substantiation(text, r),
        CategoryRules::AntiFraud(r) => check_anti_fraud(text, r),
        CategoryRules::ThirdPartyRatings(r) => check_third_party_ratings(text, r),
    }
}
