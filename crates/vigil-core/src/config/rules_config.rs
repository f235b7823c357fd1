use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::{RuleCategory, RuleScope};

/// A user-supplied pattern rule, compiled when the rule set is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomRuleConfig {
    pub id: String,
    pub pattern: String,
    pub weight: i32,
    pub category: RuleCategory,
    /// Where the rule is evaluated. Defaults from the category when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<RuleScope>,
}

/// Rule-set extensions and keyword thresholds.
///
/// Everything here is additive: the built-in tables are always loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub extra_spam_terms: Vec<String>,
    pub extra_profanity_terms: Vec<String>,
    /// Appended after the built-in trusted domains (suggestion tie-break order).
    pub extra_trusted_domains: Vec<String>,
    /// Misspelled domain -> corrected domain.
    pub extra_typos: BTreeMap<String, String>,
    pub custom_rules: Vec<CustomRuleConfig>,
    /// Distinct SQL keywords needed before SQL injection is flagged.
    pub sql_keyword_min_hits: usize,
    /// Distinct spam terms needed before spam is flagged.
    pub spam_keyword_min_hits: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            extra_spam_terms: Vec::new(),
            extra_profanity_terms: Vec::new(),
            extra_trusted_domains: Vec::new(),
            extra_typos: BTreeMap::new(),
            custom_rules: Vec::new(),
            sql_keyword_min_hits: defaults::DEFAULT_SQL_KEYWORD_MIN_HITS,
            spam_keyword_min_hits: defaults::DEFAULT_SPAM_KEYWORD_MIN_HITS,
        }
    }
}
