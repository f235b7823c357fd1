use serde::Serialize;

use crate::models::{FieldKind, Score, Sentiment};

/// Unified verdict for one validated value.
///
/// `valid` is derived from the score and the operation's threshold when the
/// result is created and cannot be changed afterwards. For moderation results
/// `valid` means "approved" and `confidence` mirrors `100 - risk_score`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    kind: FieldKind,
    valid: bool,
    confidence: Score,
    #[serde(skip_serializing_if = "Option::is_none")]
    risk_score: Option<Score>,
    issues: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<String>,
    insights: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sentiment: Option<Sentiment>,
}

impl ValidationResult {
    /// Result whose validity is `confidence > threshold`.
    pub fn from_confidence(kind: FieldKind, confidence: Score, threshold: f64) -> Self {
        Self::blank(kind, confidence.value() > threshold, confidence, None)
    }

    /// Moderation result: approved iff `risk < threshold`, confidence mirrors risk.
    pub fn from_risk(kind: FieldKind, risk: Score, threshold: f64) -> Self {
        Self::blank(kind, risk.value() < threshold, risk.inverse(), Some(risk))
    }

    fn blank(kind: FieldKind, valid: bool, confidence: Score, risk_score: Option<Score>) -> Self {
        Self {
            kind,
            valid,
            confidence,
            risk_score,
            issues: Vec::new(),
            suggestion: None,
            insights: Vec::new(),
            formatted: None,
            sentiment: None,
        }
    }

    pub fn with_issue(mut self, issue: impl Into<String>) -> Self {
        self.push_issue(issue);
        self
    }

    pub fn with_insight(mut self, insight: impl Into<String>) -> Self {
        self.push_insight(insight);
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_formatted(mut self, formatted: impl Into<String>) -> Self {
        self.formatted = Some(formatted.into());
        self
    }

    pub fn with_sentiment(mut self, sentiment: Sentiment) -> Self {
        self.sentiment = Some(sentiment);
        self
    }

    pub fn push_issue(&mut self, issue: impl Into<String>) {
        self.issues.push(issue.into());
    }

    pub fn push_insight(&mut self, insight: impl Into<String>) {
        self.insights.push(insight.into());
    }

    pub fn extend_issues<I: IntoIterator<Item = String>>(&mut self, issues: I) {
        self.issues.extend(issues);
    }

    pub fn extend_insights<I: IntoIterator<Item = String>>(&mut self, insights: I) {
        self.insights.extend(insights);
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Alias of `is_valid` for moderation results.
    pub fn is_approved(&self) -> bool {
        self.valid
    }

    pub fn confidence(&self) -> Score {
        self.confidence
    }

    pub fn risk_score(&self) -> Option<Score> {
        self.risk_score
    }

    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    pub fn insights(&self) -> &[String] {
        &self.insights
    }

    pub fn formatted(&self) -> Option<&str> {
        self.formatted.as_deref()
    }

    pub fn sentiment(&self) -> Option<&Sentiment> {
        self.sentiment.as_ref()
    }

    /// Whether any issue mentions `needle`, case-insensitively.
    pub fn has_issue_containing(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.issues
            .iter()
            .any(|issue| issue.to_lowercase().contains(&needle))
    }
}
