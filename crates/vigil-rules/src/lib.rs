//! # vigil-rules
//!
//! Weighted pattern rules and keyword lists, compiled once into an immutable
//! [`RuleSet`] and evaluated by the [`PatternMatcher`].
//! Built-in tables cover SQL injection, XSS, spam, profanity, suspicious
//! identifiers and digit/character repetition.

pub mod matcher;
pub mod patterns;
pub mod rule;
pub mod rule_set;

pub use matcher::{KeywordHits, MatchReport, PatternMatcher, RuleMatch};
pub use rule::{Rule, RuleMatcher, RuleScope};
pub use rule_set::{KeywordList, RuleSet};
