//! Free-text moderation. Risk starts at zero and every flagged concern adds to it.

use vigil_core::constants::{
    EXCESSIVE_LINKS_RISK, MAX_LINKS, MODERATION_APPROVAL_THRESHOLD, NEGATIVE_SENTIMENT_RISK,
    SHOUTING_RATIO, SHOUTING_RISK, STRONG_NEGATIVE_CONFIDENCE,
};
use vigil_core::{FieldKind, RuleCategory, SentimentLabel, ValidationResult};
use vigil_rules::{MatchReport, PatternMatcher, RuleScope};
use vigil_scoring::text_stats::{link_count, uppercase_ratio};
use vigil_scoring::{ScoreAccumulator, SentimentHeuristic, Signal};

use super::{annotate, Verdict};

pub struct ContentModerator {
    matcher: PatternMatcher,
    sentiment: SentimentHeuristic,
}

impl ContentModerator {
    pub fn new(matcher: PatternMatcher, sentiment: SentimentHeuristic) -> Self {
        Self { matcher, sentiment }
    }

    pub fn check(&self, text: &str) -> Verdict {
        let report = self.matcher.scan_scope(text, RuleScope::Text);
        let sentiment = self
            .sentiment
            .analyze_with_profanity(text, report.hit_count(RuleCategory::Profanity));

        let mut signals = category_signals(&report);
        signals.push(Signal::new(
            "Excessive capitalization",
            SHOUTING_RISK,
            uppercase_ratio(text) > SHOUTING_RATIO,
        ));
        signals.push(Signal::new(
            "Too many links",
            EXCESSIVE_LINKS_RISK,
            link_count(text) > MAX_LINKS,
        ));
        signals.push(Signal::new(
            "Strongly negative tone",
            NEGATIVE_SENTIMENT_RISK,
            sentiment.label == SentimentLabel::Negative
                && sentiment.confidence.value() > STRONG_NEGATIVE_CONFIDENCE,
        ));

        let breakdown = ScoreAccumulator::explain(0, &signals);
        let mut result = ValidationResult::from_risk(
            FieldKind::FreeText,
            breakdown.score,
            MODERATION_APPROVAL_THRESHOLD,
        );
        annotate(&mut result, &breakdown, true);
        result.push_insight(format!(
            "Sentiment: {} ({:.0}% confidence)",
            sentiment.label,
            sentiment.confidence.value()
        ));

        if !result.is_approved() {
            let flagged: Vec<&str> = report
                .flagged_categories()
                .into_iter()
                .map(RuleCategory::as_str)
                .collect();
            vigil_observability::events::content_rejected(breakdown.score.value(), &flagged);
        }
        Verdict::recorded(result.with_sentiment(sentiment))
    }
}

/// One signal per rule-driven concern, each carrying its category weight.
fn category_signals(report: &MatchReport<'_>) -> Vec<Signal> {
    let spam_terms = report.keywords(RuleCategory::Spam);
    let spam_term_weight = spam_terms.map_or(0, |k| k.weight());
    let spam_rule_weight: i32 = report.matches_in(RuleCategory::Spam).map(|m| m.weight()).sum();

    vec![
        Signal::new(
            "Possible SQL injection",
            report.category_weight(RuleCategory::SqlInjection),
            report.is_flagged(RuleCategory::SqlInjection),
        ),
        Signal::new(
            "Possible XSS attempt",
            report.category_weight(RuleCategory::Xss),
            report.is_flagged(RuleCategory::Xss),
        ),
        Signal::new(
            format!(
                "Spam keywords detected: {}",
                spam_terms.map(|k| k.hits.join(", ")).unwrap_or_default()
            ),
            spam_term_weight,
            spam_term_weight > 0,
        ),
        Signal::new(
            "Excessive punctuation",
            spam_rule_weight,
            spam_rule_weight > 0,
        ),
        Signal::new(
            format!(
                "Inappropriate language ({} occurrences)",
                report.hit_count(RuleCategory::Profanity)
            ),
            report.category_weight(RuleCategory::Profanity),
            report.is_flagged(RuleCategory::Profanity),
        ),
        // Custom rules may target the identifier categories in text scope.
        Signal::new(
            "Suspicious pattern",
            report.category_weight(RuleCategory::SuspiciousIdentifier)
                + report.category_weight(RuleCategory::Repetition),
            report.is_flagged(RuleCategory::SuspiciousIdentifier)
                || report.is_flagged(RuleCategory::Repetition),
        ),
    ]
}
