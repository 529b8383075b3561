use shared_types::{ComplianceStatus, Finding};

pub const PERFECT_SCORE: u32 = 100;

/// Score findings by severity deduction and band the result.
///
/// Deductions are summed without a cap and the score is floored at zero.
pub fn score_findings(findings: &[Finding]) -> (u32, ComplianceStatus) {
    let deductions: u32 = findings.iter().map(|f| f.severity.deduction()).sum();
    let score = PERFECT_SCORE.saturating_sub(deductions);
    (score, ComplianceStatus::from_score(score))
}
