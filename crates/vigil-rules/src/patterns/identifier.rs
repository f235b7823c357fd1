//! Rules for short identifiers: email local parts and person names.
//! Evaluated against lower-cased input.

use vigil_core::{RuleCategory, RuleError};

use crate::rule::{Rule, RuleScope};

/// Id of the long-digit-run rule. Name validation penalizes digits on its own
/// and skips this rule.
pub const DIGIT_RUN_RULE_ID: &str = "identifier:digit_run";

const SUSPICIOUS_WEIGHT: i32 = -10;
const DIGIT_RUN_WEIGHT: i32 = vigil_core::constants::EMAIL_DIGIT_RUN_PENALTY;

const SUSPICIOUS_PATTERNS: &[(&str, &str)] = &[
    ("identifier:simple_alnum", r"^[a-z]+\d+$"),
    ("identifier:generic_account", r"^(?:test|admin|user)\d*$"),
    ("identifier:keyboard_mash", r"^[qwerty]+$"),
    ("identifier:vowels_only", r"^[aeiou]+$"),
    ("identifier:consonants_only", r"^[bcdfghj-np-tv-z]+$"),
];

pub fn rules() -> Result<Vec<Rule>, RuleError> {
    let mut rules = SUSPICIOUS_PATTERNS
        .iter()
        .map(|(id, pattern)| {
            Rule::regex(
                *id,
                pattern,
                SUSPICIOUS_WEIGHT,
                RuleCategory::SuspiciousIdentifier,
                RuleScope::Identifier,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;

    rules.push(Rule::run(
        "identifier:repeated_chars",
        4,
        false,
        SUSPICIOUS_WEIGHT,
        RuleCategory::Repetition,
        RuleScope::Identifier,
    )?);
    rules.push(Rule::regex(
        DIGIT_RUN_RULE_ID,
        &format!(
            r"\d{{{},}}",
            vigil_core::constants::EMAIL_DIGIT_RUN_LENGTH
        ),
        DIGIT_RUN_WEIGHT,
        RuleCategory::SuspiciousIdentifier,
        RuleScope::Identifier,
    )?);
    Ok(rules)
}
