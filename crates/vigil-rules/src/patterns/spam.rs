use vigil_core::constants::PUNCTUATION_BURST_RISK;
use vigil_core::{RuleCategory, RuleError};

use crate::rule::{Rule, RuleScope};

/// Spam terms, matched by substring. Each distinct hit adds risk once spam is flagged.
pub const SPAM_TERMS: &[&str] = &[
    "free",
    "win",
    "cash",
    "money",
    "prize",
    "urgent",
    "limited time",
    "click here",
    "buy now",
    "guarantee",
    "no risk",
    "act now",
];

pub fn rules() -> Result<Vec<Rule>, RuleError> {
    Ok(vec![Rule::regex(
        "spam:punctuation_burst",
        r"[!?]{2,}",
        PUNCTUATION_BURST_RISK,
        RuleCategory::Spam,
        RuleScope::Text,
    )?])
}
