//! Marketing rule catalog
//!
//! Pattern tables for each compliance category under the adviser marketing
//! rule (SEC Rule 206(4)-1). Patterns are matched case-insensitively against
//! normalized document text. Gap tokens such as `.{0,30}` let a phrase
//! tolerate intervening words; their widths are part of each rule's meaning
//! and must not be tightened.

use regex::{Regex, RegexBuilder};
use serde::Serialize;
use shared_types::RuleType;

use crate::error::EngineError;

/// Standardized reporting periods expected alongside performance figures
pub const REQUIRED_PERIODS: &[&str] = &["1-year", "5-year", "10-year", "inception"];

/// Language suggesting cherry-picked time periods or results
pub const PERFORMANCE_PROHIBITED: &[&str] = &[
    r"cherry.?pick",
    r"select(?:ed|ive).{0,50}period",
    r"best.{0,30}performance",
    r"handpicked.{0,30}returns?",
];

/// Disclosures required once performance is presented
pub const PERFORMANCE_DISCLOSURES: &[&str] = &[
    r"net.{0,20}fees?",
    r"past.{0,30}performance.{0,30}not.{0,30}guarantee",
    r"hypothetical.{0,30}performance",
    r"risk.{0,30}disclaimer",
];

/// Plain substrings that mark a document as presenting performance
pub const PERFORMANCE_KEYWORDS: &[&str] = &["return", "performance", "gain", "profit", "yield"];

pub const HYPOTHETICAL_WARNINGS: &[&str] = &[
    r"hypothetical",
    r"not.{0,30}actual.{0,30}results?",
    r"risk.{0,30}loss",
    r"limitations?",
];

pub const HYPOTHETICAL_PROHIBITED: &[&str] = &[
    r"projected.{0,30}returns?",
    r"expected.{0,30}performance",
    r"estimated.{0,30}gains?",
];

pub const TESTIMONIAL_DISCLOSURES: &[&str] = &[
    r"compensation.{0,30}provided",
    r"conflicts?.{0,30}of.{0,30}interest",
    r"client.{0,30}(?:or|/|and).{0,30}investor",
    r"material.{0,30}conflicts?",
];

pub const CLIENT_INDICATORS: &[&str] = &[
    r"client.{0,30}testimonial",
    r"customer.{0,30}review",
    r"investor.{0,30}feedback",
];

pub const UNSUBSTANTIATED_CLAIMS: &[&str] = &[
    r"guaranteed.{0,30}returns?",
    r"risk.?free",
    r"always.{0,30}profitable",
    r"never.{0,30}lose",
    r"best.{0,30}in.{0,30}(?:industry|market|class)",
];

pub const REQUIRES_EVIDENCE: &[&str] = &[
    r"#1.{0,30}(?:ranked|rated|performing)",
    r"top.{0,30}\d+.{0,30}(?:advisor|firm|manager)",
    r"award.?winning",
    r"highest.{0,30}(?:rated|ranked)",
];

pub const MISLEADING_PATTERNS: &[&str] = &[
    r"guaranteed.{0,30}profit",
    r"no.{0,30}risk",
    r"certain.{0,30}returns?",
    r"foolproof.{0,30}strategy",
];

/// Mitigating language. Declared with the anti-fraud rules but not consulted
/// by any checker yet.
pub const OMISSION_INDICATORS: &[&str] = &[
    r"results.{0,30}may.{0,30}vary",
    r"individual.{0,30}results.{0,30}differ",
    r"consult.{0,30}financial.{0,30}advisor",
];

pub const RATING_INDICATORS: &[&str] = &["rated", "ranking", "award", "recognition", "honor"];

pub const RATING_DISCLOSURES: &[&str] = &[
    r"rating.{0,30}date",
    r"period.{0,30}based.{0,30}on",
    r"third.?party.{0,30}(?:identity|source)",
    r"compensation.{0,30}provided",
];

/// A compiled rule pattern that remembers its source text.
///
/// Findings quote the source, so it is kept verbatim.
#[derive(Debug, Clone)]
pub struct RulePattern {
    source: &'static str,
    regex: Regex,
}

impl RulePattern {
    pub fn compile(source: &'static str) -> Result<Self, EngineError> {
        let regex = RegexBuilder::new(source)
            .case_insensitive(true)
            .build()
            .map_err(|e| EngineError::InvalidPattern {
                pattern: source.to_string(),
                source: e,
            })?;

        Ok(Self { source, regex })
    }

    pub fn source(&self) -> &'static str {
        self.source
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

fn compile_all(sources: &[&'static str]) -> Result<Vec<RulePattern>, EngineError> {
    sources.iter().copied().map(RulePattern::compile).collect()
}

#[derive(Debug, Clone)]
pub struct PerformanceAdvertisingRules {
    pub required_periods: &'static [&'static str],
    pub prohibited_patterns: Vec<RulePattern>,
    pub required_disclosures: Vec<RulePattern>,
    pub performance_keywords: &'static [&'static str],
}

#[derive(Debug, Clone)]
pub struct HypotheticalPerformanceRules {
    pub required_warnings: Vec<RulePattern>,
    pub prohibited_without_disclosure: Vec<RulePattern>,
}

#[derive(Debug, Clone)]
pub struct TestimonialsEndorsementsRules {
    pub required_disclosures: Vec<RulePattern>,
    pub client_indicators: Vec<RulePattern>,
}

#[derive(Debug, Clone)]
pub struct SubstantiationRules {
    pub unsubstantiated_claims: Vec<RulePattern>,
    pub requires_evidence: Vec<RulePattern>,
}

#[derive(Debug, Clone)]
pub struct AntiFraudRules {
    pub misleading_patterns: Vec<RulePattern>,
    pub omission_indicators: Vec<RulePattern>,
}

#[derive(Debug, Clone)]
pub struct ThirdPartyRatingsRules {
    pub rating_indicators: &'static [&'static str],
    pub required_disclosures: Vec<RulePattern>,
}

impl PerformanceAdvertisingRules {
    pub fn standard() -> Result<Self, EngineError> {
        Ok(Self {
            required_periods: REQUIRED_PERIODS,
            prohibited_patterns: compile_all(PERFORMANCE_PROHIBITED)?,
            required_disclosures: compile_all(PERFORMANCE_DISCLOSURES)?,
            performance_keywords: PERFORMANCE_KEYWORDS,
        })
    }
}

impl HypotheticalPerformanceRules {
    pub fn standard() -> Result<Self, EngineError> {
        Ok(Self {
            required_warnings: compile_all(HYPOTHETICAL_WARNINGS)?,
            prohibited_without_disclosure: compile_all(HYPOTHETICAL_PROHIBITED)?,
        })
    }
}

impl TestimonialsEndorsementsRules {
    pub fn standard() -> Result<Self, EngineError> {
        Ok(Self {
            required_disclosures: compile_all(TESTIMONIAL_DISCLOSURES)?,
            client_indicators: compile_all(CLIENT_INDICATORS)?,
        })
    }
}

impl SubstantiationRules {
    pub fn standard() -> Result<Self, EngineError> {
        Ok(Self {
            unsubstantiated_claims: compile_all(UNSUBSTANTIATED_CLAIMS)?,
            requires_evidence: compile_all(REQUIRES_EVIDENCE)?,
        })
    }
}

impl AntiFraudRules {
    pub fn standard() -> Result<Self, EngineError> {
        Ok(Self {
            misleading_patterns: compile_all(MISLEADING_PATTERNS)?,
            omission_indicators: compile_all(OMISSION_INDICATORS)?,
        })
    }
}

impl ThirdPartyRatingsRules {
    pub fn standard() -> Result<Self, EngineError> {
        Ok(Self {
            rating_indicators: RATING_INDICATORS,
            required_disclosures: compile_all(RATING_DISCLOSURES)?,
        })
    }
}

/// Rules for one category. Each variant carries only the pattern groups
/// its checker reads.
#[derive(Debug, Clone)]
pub enum CategoryRules {
    PerformanceAdvertising(PerformanceAdvertisingRules),
    HypotheticalPerformance(HypotheticalPerformanceRules),
    TestimonialsEndorsements(TestimonialsEndorsementsRules),
    Substantiation(SubstantiationRules),
    AntiFraud(AntiFraudRules),
    ThirdPartyRatings(ThirdPartyRatingsRules),
}

/// How a pattern group's entries are matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Regex,
    Keyword,
}

/// One named pattern group, as exposed by the rules listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternGroup {
    pub role: &'static str,
    pub kind: MatchKind,
    pub patterns: Vec<&'static str>,
}

impl PatternGroup {
    fn regex(role: &'static str, patterns: &[RulePattern]) -> Self {
        Self {
            role,
            kind: MatchKind::Regex,
            patterns: patterns.iter().map(RulePattern::source).collect(),
        }
    }

    fn keyword(role: &'static str, keywords: &'static [&'static str]) -> Self {
        Self {
            role,
            kind: MatchKind::Keyword,
            patterns: keywords.to_vec(),
        }
    }
}

impl CategoryRules {
    pub fn rule_type(&self) -> RuleType {
        match self {
            CategoryRules::PerformanceAdvertising(_) => RuleType::PerformanceAdvertising,
            CategoryRules::HypotheticalPerformance(_) => RuleType::HypotheticalPerformance,
            CategoryRules::TestimonialsEndorsements(_) => RuleType::TestimonialsEndorsements,
            CategoryRules::Substantiation(_) => RuleType::Substantiation,
            CategoryRules::AntiFraud(_) => RuleType::AntiFraud,
            CategoryRules::ThirdPartyRatings(_) => RuleType::ThirdPartyRatings,
        }
    }

    pub fn pattern_groups(&self) -> Vec<PatternGroup> {
        match self {
            CategoryRules::PerformanceAdvertising(r) => vec![
                PatternGroup::keyword("required_periods", r.required_periods),
                PatternGroup::regex("prohibited_patterns", &r.prohibited_patterns),
                PatternGroup::regex("required_disclosures", &r.required_disclosures),
                PatternGroup::keyword("performance_keywords", r.performance_keywords),
            ],
            CategoryRules::HypotheticalPerformance(r) => vec![
                PatternGroup::regex("required_warnings", &r.required_warnings),
                PatternGroup::regex(
                    "prohibited_without_disclosure",
                    &r.prohibited_without_disclosure,
                ),
            ],
            CategoryRules::TestimonialsEndorsements(r) => vec![
                PatternGroup::regex("required_disclosures", &r.required_disclosures),
                PatternGroup::regex("client_indicators", &r.client_indicators),
            ],
            CategoryRules::Substantiation(r) => vec![
                PatternGroup::regex("unsubstantiated_claims", &r.unsubstantiated_claims),
                PatternGroup::regex("requires_evidence", &r.requires_evidence),
            ],
            CategoryRules::AntiFraud(r) => vec![
                PatternGroup::regex("misleading_patterns", &r.misleading_patterns),
                PatternGroup::regex("omission_indicators", &r.omission_indicators),
            ],
            CategoryRules::ThirdPartyRatings(r) => vec![
                PatternGroup::keyword("rating_indicators", r.rating_indicators),
                PatternGroup::regex("required_disclosures", &r.required_disclosures),
            ],
        }
    }
}

/// The compiled ruleset, one entry per category in report order.
///
/// Build once at startup and share by reference; it is read-only.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    categories: Vec<CategoryRules>,
}

impl RuleCatalog {
    /// Ruleset revision, reported with the rules listing
    pub const VERSION: &'static str = "206(4)-1/2024.1";

    pub fn compile() -> Result<Self, EngineError> {
        let categories = vec![
            CategoryRules::PerformanceAdvertising(PerformanceAdvertisingRules::standard()?),
            CategoryRules::HypotheticalPerformance(HypotheticalPerformanceRules::standard()?),
            CategoryRules::TestimonialsEndorsements(TestimonialsEndorsementsRules::standard()?),
            CategoryRules::Substantiation(SubstantiationRules::standard()?),
            CategoryRules::AntiFraud(AntiFraudRules::standard()?),
            CategoryRules::ThirdPartyRatings(ThirdPartyRatingsRules::standard()?),
        ];

        Ok(Self { categories })
    }

    /// Rules for a category; `None` for the synthetic error rule types
    pub fn get(&self, rule_type: RuleType) -> Option<&CategoryRules> {
        self.categories.iter().find(|c| c.rule_type() == rule_type)
    }

    /// Look up a category by its string key, e.g. `anti_fraud`
    pub fn get_category(&self, name: &str) -> Option<&CategoryRules> {
        RuleType::from_name(name).and_then(|rule_type| self.get(rule_type))
    }

    /// Categories in report order
    pub fn iter(&self) -> impl Iterator<Item = &CategoryRules> {
        self.categories.iter()
    }
}
