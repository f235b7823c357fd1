use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::SENTIMENT_INAPPROPRIATE_CONFIDENCE;
use crate::models::Score;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        })
    }
}

/// Word-list sentiment verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    pub label: SentimentLabel,
    pub confidence: Score,
    pub positive_count: usize,
    /// Negative words plus the profanity penalty.
    pub negative_count: usize,
    pub token_count: usize,
}

impl Sentiment {
    /// Sentiment of text with no tokens.
    pub fn empty() -> Self {
        Self {
            label: SentimentLabel::Neutral,
            confidence: Score::ZERO,
            positive_count: 0,
            negative_count: 0,
            token_count: 0,
        }
    }

    /// Whether the text is acceptable to publish on sentiment grounds alone.
    pub fn is_appropriate(&self) -> bool {
        self.label != SentimentLabel::Negative
            || self.confidence.value() < SENTIMENT_INAPPROPRIATE_CONFIDENCE
    }
}
