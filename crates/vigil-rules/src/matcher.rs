//! Evaluates a [`RuleSet`] against normalized text.
//!
//! Every applicable rule is checked; nothing short-circuits, so every signal
//! reaches scoring. Matching never compiles anything.

use std::sync::Arc;

use vigil_core::RuleCategory;

use crate::rule::{counts_once, Rule, RuleScope};
use crate::rule_set::{KeywordList, RuleSet};

/// A rule that matched, with how often.
#[derive(Debug, Clone)]
pub struct RuleMatch<'a> {
    pub rule: &'a Rule,
    pub occurrences: usize,
}

impl RuleMatch<'_> {
    /// Score contribution of this match on its own.
    pub fn weight(&self) -> i32 {
        if self.rule.counts_once() {
            self.rule.weight
        } else {
            self.rule.weight.saturating_mul(self.occurrences as i32)
        }
    }
}

/// Distinct keyword-list entries found in the text.
#[derive(Debug, Clone)]
pub struct KeywordHits<'a> {
    pub list: &'a KeywordList,
    pub hits: Vec<&'a str>,
}

impl KeywordHits<'_> {
    /// Whether enough distinct terms hit to flag the list's category.
    pub fn is_flagged(&self) -> bool {
        self.hits.len() >= self.list.min_hits
    }

    /// Contribution once flagged, zero otherwise.
    pub fn weight(&self) -> i32 {
        if !self.is_flagged() {
            0
        } else if counts_once(self.list.category) {
            self.list.weight
        } else {
            self.list.weight.saturating_mul(self.hits.len() as i32)
        }
    }
}

/// Everything one scan found.
#[derive(Debug, Clone, Default)]
pub struct MatchReport<'a> {
    matches: Vec<RuleMatch<'a>>,
    keywords: Vec<KeywordHits<'a>>,
}

impl<'a> MatchReport<'a> {
    /// Matched rules, in rule-set order.
    pub fn matches(&self) -> &[RuleMatch<'a>] {
        &self.matches
    }

    pub fn matches_in(&self, category: RuleCategory) -> impl Iterator<Item = &RuleMatch<'a>> {
        self.matches
            .iter()
            .filter(move |m| m.rule.category == category)
    }

    pub fn matched(&self, rule_id: &str) -> bool {
        self.matches.iter().any(|m| m.rule.id == rule_id)
    }

    pub fn keywords(&self, category: RuleCategory) -> Option<&KeywordHits<'a>> {
        self.keywords.iter().find(|k| k.list.category == category)
    }

    /// Distinct keyword hits for `category` (the keyword hit count).
    pub fn keyword_hit_count(&self, category: RuleCategory) -> usize {
        self.keywords(category).map_or(0, |k| k.hits.len())
    }

    /// Total rule occurrences in `category`.
    pub fn hit_count(&self, category: RuleCategory) -> usize {
        self.matches_in(category).map(|m| m.occurrences).sum()
    }

    /// A category is flagged when any of its rules matched or its keyword
    /// list reached the configured minimum.
    pub fn is_flagged(&self, category: RuleCategory) -> bool {
        self.matches_in(category).next().is_some()
            || self.keywords(category).is_some_and(KeywordHits::is_flagged)
    }

    pub fn flagged_categories(&self) -> Vec<RuleCategory> {
        RuleCategory::ALL
            .into_iter()
            .filter(|c| self.is_flagged(*c))
            .collect()
    }

    /// Combined contribution of a category. Flag-like categories count once
    /// (their largest weight); the rest add every occurrence and keyword hit.
    pub fn category_weight(&self, category: RuleCategory) -> i32 {
        let keyword_weight = self.keywords(category).map_or(0, KeywordHits::weight);
        if counts_once(category) {
            self.matches_in(category)
                .map(RuleMatch::weight)
                .chain(std::iter::once(keyword_weight))
                .filter(|w| *w != 0)
                .max_by_key(|w| w.abs())
                .unwrap_or(0)
        } else {
            self.matches_in(category)
                .map(RuleMatch::weight)
                .fold(keyword_weight, i32::saturating_add)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty() && self.keywords.iter().all(|k| k.hits.is_empty())
    }
}

/// Stateless evaluator over a shared rule set.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    rule_set: Arc<RuleSet>,
}

impl PatternMatcher {
    pub fn new(rule_set: Arc<RuleSet>) -> Self {
        Self { rule_set }
    }

    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    /// Evaluate every rule and keyword list.
    pub fn scan(&self, text: &str) -> MatchReport<'_> {
        let lowered = text.to_lowercase();
        MatchReport {
            matches: collect_matches(self.rule_set.rules().iter(), &lowered),
            keywords: self.keyword_hits(&lowered),
        }
    }

    /// Evaluate the rules of one scope. Keyword lists apply to text only.
    pub fn scan_scope(&self, text: &str, scope: RuleScope) -> MatchReport<'_> {
        let lowered = text.to_lowercase();
        let keywords = if scope == RuleScope::Text {
            self.keyword_hits(&lowered)
        } else {
            Vec::new()
        };
        MatchReport {
            matches: collect_matches(self.rule_set.rules_in(scope), &lowered),
            keywords,
        }
    }

    /// Evaluate only the given categories within a scope.
    pub fn scan_categories(
        &self,
        text: &str,
        scope: RuleScope,
        categories: &[RuleCategory],
    ) -> MatchReport<'_> {
        let lowered = text.to_lowercase();
        let rules = self
            .rule_set
            .rules_in(scope)
            .filter(|r| categories.contains(&r.category));
        let keywords = if scope == RuleScope::Text {
            self.keyword_hits(&lowered)
                .into_iter()
                .filter(|k| categories.contains(&k.list.category))
                .collect()
        } else {
            Vec::new()
        };
        MatchReport {
            matches: collect_matches(rules, &lowered),
            keywords,
        }
    }

    fn keyword_hits<'a>(&'a self, lowered: &str) -> Vec<KeywordHits<'a>> {
        self.rule_set
            .keyword_lists()
            .iter()
            .map(|list| KeywordHits {
                list,
                hits: list.hits(lowered),
            })
            .collect()
    }
}

fn collect_matches<'a>(rules: impl Iterator<Item = &'a Rule>, lowered: &str) -> Vec<RuleMatch<'a>> {
    rules
        .filter_map(|rule| {
            let occurrences = rule.matcher.occurrences(lowered);
            (occurrences > 0).then_some(RuleMatch { rule, occurrences })
        })
        .collect()
}
