//! Word-list sentiment.

use vigil_core::constants::{
    PROFANITY_NEGATIVE_WEIGHT, SENTIMENT_MIN_RATIO, SENTIMENT_NEUTRAL_CONFIDENCE,
    SENTIMENT_RATIO_SCALE,
};
use vigil_core::{RuleCategory, Score, Sentiment, SentimentLabel};
use vigil_rules::{PatternMatcher, RuleScope};

/// Counts positive and negative words; profanity weighs as extra negatives.
#[derive(Debug, Clone)]
pub struct SentimentHeuristic {
    matcher: PatternMatcher,
}

impl SentimentHeuristic {
    pub fn new(matcher: PatternMatcher) -> Self {
        Self { matcher }
    }

    /// Analyze `text`, scanning it for profanity first.
    pub fn analyze(&self, text: &str) -> Sentiment {
        let profanity_hits = self
            .matcher
            .scan_categories(text, RuleScope::Text, &[RuleCategory::Profanity])
            .hit_count(RuleCategory::Profanity);
        self.analyze_with_profanity(text, profanity_hits)
    }

    /// Analyze `text` when the profanity occurrence count is already known.
    pub fn analyze_with_profanity(&self, text: &str, profanity_hits: usize) -> Sentiment {
        let lowered = text.to_lowercase();
        let tokens = tokenize(&lowered);
        if tokens.is_empty() {
            return Sentiment::empty();
        }

        let rules = self.matcher.rule_set();
        let positive_count = tokens.iter().filter(|t| rules.is_positive_word(t)).count();
        let negative_count = tokens.iter().filter(|t| rules.is_negative_word(t)).count()
            + profanity_hits * PROFANITY_NEGATIVE_WEIGHT;

        let token_count = tokens.len();
        let pos_ratio = positive_count as f64 / token_count as f64;
        let neg_ratio = negative_count as f64 / token_count as f64;

        let (label, confidence) = if pos_ratio > neg_ratio && pos_ratio > SENTIMENT_MIN_RATIO {
            (SentimentLabel::Positive, Score::new(pos_ratio * SENTIMENT_RATIO_SCALE))
        } else if neg_ratio > pos_ratio && neg_ratio > SENTIMENT_MIN_RATIO {
            (SentimentLabel::Negative, Score::new(neg_ratio * SENTIMENT_RATIO_SCALE))
        } else {
            (SentimentLabel::Neutral, Score::new(SENTIMENT_NEUTRAL_CONFIDENCE))
        };

        Sentiment {
            label,
            confidence,
            positive_count,
            negative_count,
            token_count,
        }
    }
}

/// Split on runs of non-word characters, the same split as `\W+`.
fn tokenize(lowered: &str) -> Vec<&str> {
    lowered
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
        .collect()
}
