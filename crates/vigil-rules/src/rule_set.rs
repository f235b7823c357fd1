//! The immutable, precompiled rule collection shared by every validation.

use std::collections::{HashMap, HashSet};

use vigil_core::config::RulesConfig;
use vigil_core::constants::{SPAM_TERM_RISK, SQL_INJECTION_RISK};
use vigil_core::{RuleCategory, RuleError};

use crate::patterns::{self, domains, injection, sentiment, spam};
use crate::rule::{Rule, RuleScope};

/// Terms counted by case-insensitive substring containment.
#[derive(Debug, Clone)]
pub struct KeywordList {
    pub category: RuleCategory,
    terms: Vec<String>,
    /// Distinct hits needed before the category is flagged.
    pub min_hits: usize,
    /// Contribution once flagged: once for flag-like categories, else per distinct hit.
    pub weight: i32,
}

impl KeywordList {
    fn new(
        category: RuleCategory,
        terms: impl IntoIterator<Item = String>,
        min_hits: usize,
        weight: i32,
    ) -> Result<Self, RuleError> {
        let mut seen = HashSet::new();
        let mut list = Vec::new();
        for term in terms {
            let term = term.trim().to_lowercase();
            if term.is_empty() {
                return Err(RuleError::EmptyKeyword {
                    list: category.to_string(),
                });
            }
            if seen.insert(term.clone()) {
                list.push(term);
            }
        }
        Ok(Self {
            category,
            terms: list,
            // A zero minimum would flag every input.
            min_hits: min_hits.max(1),
            weight,
        })
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Terms contained in `lowered`, in list order.
    ///
    /// A term only counts if at least one of its occurrences lies outside
    /// every occurrence of a longer term, so `execute` is one hit, not two.
    pub fn hits<'a>(&'a self, lowered: &str) -> Vec<&'a str> {
        let spans: Vec<(usize, usize, usize)> = self
            .terms
            .iter()
            .enumerate()
            .flat_map(|(i, term)| {
                lowered
                    .match_indices(term.as_str())
                    .map(move |(start, m)| (i, start, start + m.len()))
            })
            .collect();

        let nested = |&(i, start, end): &(usize, usize, usize)| {
            spans.iter().any(|&(j, outer_start, outer_end)| {
                j != i
                    && outer_start <= start
                    && end <= outer_end
                    && outer_end - outer_start > end - start
            })
        };

        self.terms
            .iter()
            .enumerate()
            .filter(|(i, _)| spans.iter().any(|span| span.0 == *i && !nested(span)))
            .map(|(_, term)| term.as_str())
            .collect()
    }
}

/// Ordered rules, keyword lists, sentiment words and the domain reference data.
///
/// Built once; read-only afterwards. Share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
    keyword_lists: Vec<KeywordList>,
    positive_words: HashSet<String>,
    negative_words: HashSet<String>,
    trusted_domains: Vec<String>,
    domain_typos: HashMap<String, String>,
    recognized_tlds: HashSet<String>,
}

impl RuleSet {
    /// The built-in rule set with default keyword thresholds.
    pub fn builtin() -> Result<Self, RuleError> {
        Self::from_config(&RulesConfig::default())
    }

    /// Built-in tables extended by `config`. Fails on any invalid pattern,
    /// duplicate rule id, or empty keyword.
    pub fn from_config(config: &RulesConfig) -> Result<Self, RuleError> {
        let mut rules = patterns::builtin_rules()?;

        for term in &config.extra_profanity_terms {
            let rule = patterns::profanity::term_rule(term)?;
            // Re-listing a built-in term is harmless.
            if !rules.iter().any(|r| r.id == rule.id) {
                rules.push(rule);
            }
        }
        for custom in &config.custom_rules {
            rules.push(Rule::regex(
                custom.id.clone(),
                &custom.pattern,
                custom.weight,
                custom.category,
                custom
                    .scope
                    .unwrap_or_else(|| RuleScope::default_for(custom.category)),
            )?);
        }
        check_unique_ids(&rules)?;

        let keyword_lists = vec![
            KeywordList::new(
                RuleCategory::SqlInjection,
                owned(injection::SQL_KEYWORDS),
                config.sql_keyword_min_hits,
                SQL_INJECTION_RISK,
            )?,
            KeywordList::new(
                RuleCategory::Spam,
                owned(spam::SPAM_TERMS).chain(config.extra_spam_terms.iter().cloned()),
                config.spam_keyword_min_hits,
                SPAM_TERM_RISK,
            )?,
        ];

        let mut trusted_domains: Vec<String> = Vec::new();
        for domain in owned(domains::TRUSTED_DOMAINS).chain(config.extra_trusted_domains.iter().cloned()) {
            let domain = domain.trim().to_lowercase();
            if domain.is_empty() {
                return Err(RuleError::EmptyKeyword {
                    list: "trusted_domains".to_string(),
                });
            }
            if !trusted_domains.contains(&domain) {
                trusted_domains.push(domain);
            }
        }
        if trusted_domains.is_empty() {
            return Err(RuleError::NoTrustedDomains);
        }

        let mut domain_typos: HashMap<String, String> = domains::DOMAIN_TYPOS
            .iter()
            .map(|(typo, fixed)| (typo.to_string(), fixed.to_string()))
            .collect();
        for (typo, fixed) in &config.extra_typos {
            domain_typos.insert(typo.trim().to_lowercase(), fixed.trim().to_lowercase());
        }

        let rule_set = Self {
            rules,
            keyword_lists,
            positive_words: owned(sentiment::POSITIVE_WORDS).collect(),
            negative_words: owned(sentiment::NEGATIVE_WORDS).collect(),
            trusted_domains,
            domain_typos,
            recognized_tlds: owned(domains::RECOGNIZED_TLDS).collect(),
        };

        tracing::debug!(
            event = "rule_set_built",
            rules = rule_set.rules.len(),
            keyword_lists = rule_set.keyword_lists.len(),
            trusted_domains = rule_set.trusted_domains.len(),
            "rule set built"
        );
        Ok(rule_set)
    }

    /// All rules in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn rules_in(&self, scope: RuleScope) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(move |r| r.scope == scope)
    }

    pub fn rule(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    pub fn keyword_lists(&self) -> &[KeywordList] {
        &self.keyword_lists
    }

    pub fn keyword_list(&self, category: RuleCategory) -> Option<&KeywordList> {
        self.keyword_lists.iter().find(|k| k.category == category)
    }

    pub fn is_positive_word(&self, token: &str) -> bool {
        self.positive_words.contains(token)
    }

    pub fn is_negative_word(&self, token: &str) -> bool {
        self.negative_words.contains(token)
    }

    /// Canonical domains in declared order.
    pub fn trusted_domains(&self) -> &[String] {
        &self.trusted_domains
    }

    pub fn is_trusted_domain(&self, domain: &str) -> bool {
        self.trusted_domains.iter().any(|d| d == domain)
    }

    /// Exact-match correction for a known misspelled domain.
    pub fn typo_correction(&self, domain: &str) -> Option<&str> {
        self.domain_typos.get(domain).map(String::as_str)
    }

    pub fn is_recognized_tld(&self, tld: &str) -> bool {
        self.recognized_tlds.contains(tld)
    }
}

fn owned(items: &'static [&'static str]) -> impl Iterator<Item = String> {
    items.iter().map(|s| s.to_string())
}

fn check_unique_ids(rules: &[Rule]) -> Result<(), RuleError> {
    let mut seen = HashSet::new();
    for rule in rules {
        if !seen.insert(rule.id.as_str()) {
            return Err(RuleError::DuplicateRuleId {
                rule_id: rule.id.clone(),
            });
        }
    }
    Ok(())
}
