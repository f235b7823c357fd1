//! Built-in rule tables and word lists.
//!
//! Each submodule owns one concern; [`builtin_rules`] compiles them all in a
//! fixed order so rule iteration is deterministic.

pub mod domains;
pub mod identifier;
pub mod injection;
pub mod phone;
pub mod profanity;
pub mod sentiment;
pub mod spam;

use vigil_core::RuleError;

use crate::rule::Rule;

/// Compile every built-in rule: injection, spam, profanity, identifier, phone.
pub fn builtin_rules() -> Result<Vec<Rule>, RuleError> {
    let mut rules = injection::rules()?;
    rules.extend(spam::rules()?);
    rules.extend(profanity::rules(profanity::PROFANITY_TERMS.iter().copied())?);
    rules.extend(identifier::rules()?);
    rules.extend(phone::rules()?);
    Ok(rules)
}
