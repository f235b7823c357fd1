use vigil_core::constants::PROFANITY_HIT_RISK;
use vigil_core::{RuleCategory, RuleError};

use crate::rule::{Rule, RuleScope};

/// Plain profanity terms; each becomes a whole-word rule.
pub const PROFANITY_TERMS: &[&str] = &[
    "spam", "scam", "fake", "fraud", "hate", "stupid", "idiot", "moron", "damn", "hell",
];

/// Obfuscated spellings that a word list can't express.
const OBFUSCATED_PATTERNS: &[(&str, &str)] = &[
    ("profanity:f_word", r"\bf[u*]ck\w*"),
    ("profanity:s_word", r"\bsh[i*]t\w*"),
    ("profanity:d_word", r"\bd\*mn\b"),
];

/// Compile the obfuscated patterns followed by one rule per term.
pub fn rules<'a>(terms: impl IntoIterator<Item = &'a str>) -> Result<Vec<Rule>, RuleError> {
    let mut rules = OBFUSCATED_PATTERNS
        .iter()
        .map(|(id, pattern)| {
            Rule::regex(
                *id,
                pattern,
                PROFANITY_HIT_RISK,
                RuleCategory::Profanity,
                RuleScope::Text,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;
    for term in terms {
        rules.push(term_rule(term)?);
    }
    Ok(rules)
}

/// Whole-word rule for a single profanity term.
pub fn term_rule(term: &str) -> Result<Rule, RuleError> {
    Rule::word(
        format!("profanity:{}", term.trim().to_lowercase()),
        term,
        PROFANITY_HIT_RISK,
        RuleCategory::Profanity,
        RuleScope::Text,
    )
}
