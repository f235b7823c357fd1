//! Rules evaluated against normalized phone digits.

use vigil_core::constants::{
    PHONE_REPEATED_DIGIT_PENALTY, PHONE_REPEATED_DIGIT_RUN, PHONE_SEQUENTIAL_DIGIT_PENALTY,
};
use vigil_core::{RuleCategory, RuleError};

use crate::rule::{Rule, RuleScope};

const SEQUENCES: &[&str] = &["0123456789", "1234567890", "9876543210", "0987654321"];

pub fn rules() -> Result<Vec<Rule>, RuleError> {
    Ok(vec![
        Rule::run(
            "phone:repeated_digits",
            PHONE_REPEATED_DIGIT_RUN,
            true,
            PHONE_REPEATED_DIGIT_PENALTY,
            RuleCategory::Repetition,
            RuleScope::Phone,
        )?,
        Rule::any_of(
            "phone:sequential_digits",
            SEQUENCES,
            PHONE_SEQUENTIAL_DIGIT_PENALTY,
            RuleCategory::Repetition,
            RuleScope::Phone,
        )?,
    ])
}
