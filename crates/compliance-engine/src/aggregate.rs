//! Runs every category checker behind its own failure boundary and collects
//! the findings in report order.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use shared_types::{Finding, RuleType};
use tracing::{debug, warn};

use crate::catalog::{CategoryRules, RuleCatalog};
use crate::rules::check_category;

/// A checker that did not complete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerFailure {
    pub category: RuleType,
    pub message: String,
}

/// Findings from the checkers that completed, plus the ones that did not
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckReport {
    pub findings: Vec<Finding>,
    pub failures: Vec<CheckerFailure>,
}

impl CheckReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run all categories of `catalog` over normalized text
pub fn run_checks(text: &str, catalog: &RuleCatalog) -> CheckReport {
    run_checks_with(text, catalog, check_category)
}

/// Same as [`run_checks`] with a caller-supplied checker
pub fn run_checks_with<F>(text: &str, catalog: &RuleCatalog, checker: F) -> CheckReport
where
    F: Fn(&str, &CategoryRules) -> Vec<Finding>,
{
    let mut report = CheckReport::default();

    for category in RuleType::CATEGORIES {
        let Some(rules) = catalog.get(category) else {
            report.failures.push(CheckerFailure {
                category,
                message: "no rules loaded for category".to_string(),
            });
            continue;
        };

        match run_isolated(|| checker(text, rules)) {
            Ok(findings) => {
                debug!(category = %category, count = findings.len(), "checker finished");
                report.findings.extend(findings);
            }
            Err(message) => {
                warn!(category = %category, error = %message, "checker failed");
                report.failures.push(CheckerFailure { category, message });
            }
        }
    }

    report
}

/// Call `f`, turning an unwinding panic into an error message
pub fn run_isolated<F>(f: F) -> Result<Vec<Finding>, String>
where
    F: FnOnce() -> Vec<Finding>,
{
    catch_unwind(AssertUnwindSafe(f)).map_err(|payload| panic_message(payload.as_ref()))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "checker panicked".to_string()
    }
}
