use regex::{Regex, RegexBuilder};
use vigil_core::{RuleCategory, RuleError};

pub use vigil_core::RuleScope;

/// Compiled runtime form of a rule's pattern.
///
/// `Run` covers what a backreference such as `(.)\1{3,}` would express;
/// the regex engine is linear-time and has no backreferences.
#[derive(Debug, Clone)]
pub enum RuleMatcher {
    Regex(Regex),
    /// A run of at least `min_run` identical characters (digits only if set).
    Run { min_run: usize, digits_only: bool },
    /// Any of the literals occurs as a substring.
    AnyOf(Vec<String>),
}

impl RuleMatcher {
    /// Number of occurrences in `text`. Zero means no match.
    pub fn occurrences(&self, text: &str) -> usize {
        match self {
            Self::Regex(re) => re.find_iter(text).count(),
            Self::Run {
                min_run,
                digits_only,
            } => count_runs(text, *min_run, *digits_only),
            Self::AnyOf(literals) => literals
                .iter()
                .map(|lit| text.matches(lit.as_str()).count())
                .sum(),
        }
    }
}

/// Count maximal runs of one repeated character that are at least `min_run` long.
fn count_runs(text: &str, min_run: usize, digits_only: bool) -> usize {
    let mut count = 0;
    let mut prev: Option<char> = None;
    let mut run = 0usize;

    for c in text.chars() {
        if Some(c) == prev {
            run += 1;
        } else {
            prev = Some(c);
            run = 1;
        }
        let eligible = !digits_only || c.is_ascii_digit();
        // Count each run once, at the moment it reaches the minimum.
        if eligible && run == min_run {
            count += 1;
        }
    }
    count
}

/// A weighted detection rule. Immutable once built.
#[derive(Debug, Clone)]
pub struct Rule {
    pub id: String,
    pub matcher: RuleMatcher,
    /// Signed score contribution. Per occurrence, except for categories that
    /// count once (see [`Rule::counts_once`]).
    pub weight: i32,
    pub category: RuleCategory,
    pub scope: RuleScope,
}

impl Rule {
    /// Compile a case-insensitive regex rule.
    pub fn regex(
        id: impl Into<String>,
        pattern: &str,
        weight: i32,
        category: RuleCategory,
        scope: RuleScope,
    ) -> Result<Self, RuleError> {
        let id = id.into();
        let re = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| RuleError::InvalidPattern {
                rule_id: id.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            id,
            matcher: RuleMatcher::Regex(re),
            weight,
            category,
            scope,
        })
    }

    /// Whole-word rule for a literal term (e.g. a profanity entry).
    pub fn word(
        id: impl Into<String>,
        term: &str,
        weight: i32,
        category: RuleCategory,
        scope: RuleScope,
    ) -> Result<Self, RuleError> {
        let term = term.trim();
        let id = id.into();
        if term.is_empty() {
            return Err(RuleError::InvalidPattern {
                rule_id: id,
                reason: "empty term".to_string(),
            });
        }
        let pattern = format!(r"\b{}\b", regex::escape(&term.to_lowercase()));
        Self::regex(id, &pattern, weight, category, scope)
    }

    pub fn run(
        id: impl Into<String>,
        min_run: usize,
        digits_only: bool,
        weight: i32,
        category: RuleCategory,
        scope: RuleScope,
    ) -> Result<Self, RuleError> {
        let id = id.into();
        if min_run < 2 {
            return Err(RuleError::InvalidPattern {
                rule_id: id,
                reason: format!("run length must be at least 2, got {min_run}"),
            });
        }
        Ok(Self {
            id,
            matcher: RuleMatcher::Run {
                min_run,
                digits_only,
            },
            weight,
            category,
            scope,
        })
    }

    pub fn any_of(
        id: impl Into<String>,
        literals: &[&str],
        weight: i32,
        category: RuleCategory,
        scope: RuleScope,
    ) -> Result<Self, RuleError> {
        let id = id.into();
        if literals.is_empty() || literals.iter().any(|l| l.is_empty()) {
            return Err(RuleError::InvalidPattern {
                rule_id: id,
                reason: "literal set must be non-empty and contain no empty entries".to_string(),
            });
        }
        Ok(Self {
            id,
            matcher: RuleMatcher::AnyOf(literals.iter().map(|l| l.to_lowercase()).collect()),
            weight,
            category,
            scope,
        })
    }

    /// Whether this rule's category contributes its weight once when flagged,
    /// rather than once per occurrence.
    pub fn counts_once(&self) -> bool {
        counts_once(self.category)
    }
}

/// Categories that are flag-like: one hit is as bad as many.
pub fn counts_once(category: RuleCategory) -> bool {
    matches!(category, RuleCategory::SqlInjection | RuleCategory::Xss)
}
