//! ValidationOrchestrator: owns the rule set, the validators and the history.

use std::collections::BTreeMap;
use std::sync::Arc;

use rayon::prelude::*;
use vigil_core::traits::{IFieldValidator, IFormatValidator};
use vigil_core::{
    FieldKind, HistoryRecord, Sentiment, StatsReport, ValidationRequest, ValidationResult,
    VigilConfig, VigilError, VigilResult,
};
use vigil_history::HistoryTracker;
use vigil_observability::events;
use vigil_rules::{PatternMatcher, RuleSet};
use vigil_scoring::{SentimentHeuristic, SuggestionEngine};

use crate::format::DefaultFormatValidator;
use crate::validators::{
    ContentModerator, EmailValidator, GenericValidator, NameValidator, PhoneValidator, Verdict,
};

/// Entry point for every validation.
///
/// Scoring is pure over the shared rule set; the history is the only mutable
/// state. The orchestrator is `Send + Sync` and meant to be shared.
pub struct ValidationOrchestrator {
    config: VigilConfig,
    rule_set: Arc<RuleSet>,
    field_overrides: BTreeMap<String, FieldKind>,
    email: EmailValidator,
    phone: PhoneValidator,
    moderation: ContentModerator,
    name: NameValidator,
    generic: GenericValidator,
    sentiment: SentimentHeuristic,
    history: HistoryTracker,
}

impl ValidationOrchestrator {
    /// Build with the default format validator.
    pub fn new(config: VigilConfig) -> VigilResult<Self> {
        Self::with_format_validator(config, Arc::new(DefaultFormatValidator))
    }

    /// Build from built-in defaults.
    pub fn with_defaults() -> VigilResult<Self> {
        Self::new(VigilConfig::default())
    }

    /// Build from a TOML document.
    pub fn from_toml(toml_str: &str) -> VigilResult<Self> {
        let config =
            VigilConfig::from_toml(toml_str).map_err(|e| VigilError::ConfigError(e.to_string()))?;
        Self::new(config)
    }

    /// Build with a caller-supplied email format check.
    pub fn with_format_validator(
        config: VigilConfig,
        format: Arc<dyn IFormatValidator>,
    ) -> VigilResult<Self> {
        let rule_set = Arc::new(RuleSet::from_config(&config.rules)?);
        let history = HistoryTracker::new(config.history.capacity)?;

        let matcher = PatternMatcher::new(Arc::clone(&rule_set));
        let sentiment = SentimentHeuristic::new(matcher.clone());
        let suggestions =
            SuggestionEngine::new(Arc::clone(&rule_set), config.suggestion.max_distance);

        let field_overrides = config
            .fields
            .overrides
            .iter()
            .map(|(name, kind)| (normalize_field_name(name), *kind))
            .collect();

        events::engine_initialized(rule_set.rules().len(), history.capacity());

        Ok(Self {
            email: EmailValidator::new(matcher.clone(), suggestions, format),
            phone: PhoneValidator::new(matcher.clone()),
            moderation: ContentModerator::new(matcher.clone(), sentiment.clone()),
            name: NameValidator::new(matcher),
            generic: GenericValidator,
            sentiment,
            field_overrides,
            history,
            rule_set,
            config,
        })
    }

    /// Validate one value and record the outcome when it counts.
    pub fn validate(&self, request: &ValidationRequest) -> ValidationResult {
        let span = vigil_observability::validation_span!(request.field_kind);
        let _guard = span.enter();

        let raw = request.raw_value.as_str();
        let Verdict { result, recorded } = match request.field_kind {
            FieldKind::Email => self.email.check(raw),
            FieldKind::Phone => self.phone.check(raw),
            FieldKind::FreeText => self.moderation.check(raw),
            FieldKind::Name => self.name.check(raw),
            FieldKind::Generic => self.generic.check(raw),
        };

        if recorded {
            self.history.record(HistoryRecord::from_result(raw, &result));
        }
        let score = result.risk_score().unwrap_or(result.confidence());
        events::validation_completed(
            result.kind(),
            result.is_valid(),
            score.value(),
            result.issues().len(),
        );
        result
    }

    pub fn validate_email(&self, email: &str) -> ValidationResult {
        self.validate(&ValidationRequest::new(FieldKind::Email, email))
    }

    pub fn validate_phone(&self, phone: &str) -> ValidationResult {
        self.validate(&ValidationRequest::new(FieldKind::Phone, phone))
    }

    /// Moderate free text. `is_approved()` is the verdict and `risk_score()` the risk.
    pub fn moderate_content(&self, text: &str) -> ValidationResult {
        self.validate(&ValidationRequest::new(FieldKind::FreeText, text))
    }

    pub fn validate_name(&self, name: &str) -> ValidationResult {
        self.validate(&ValidationRequest::new(FieldKind::Name, name))
    }

    /// Validate a form field, inferring its kind from the field name.
    pub fn validate_field(&self, name: &str, value: &str) -> ValidationResult {
        self.validate(&ValidationRequest::new(self.field_kind(name), value))
    }

    /// Kind a field name maps to. Configured overrides only apply to names the
    /// built-in mapping leaves as `Generic`.
    pub fn field_kind(&self, name: &str) -> FieldKind {
        match FieldKind::from_field_name(name) {
            FieldKind::Generic => self
                .field_overrides
                .get(&normalize_field_name(name))
                .copied()
                .unwrap_or(FieldKind::Generic),
            kind => kind,
        }
    }

    /// Validate every field of a form in parallel, keyed by field name.
    pub fn validate_form(&self, fields: &BTreeMap<String, String>) -> BTreeMap<String, ValidationResult> {
        let span = vigil_observability::form_span!(fields.len());
        let _guard = span.enter();

        let results: BTreeMap<String, ValidationResult> = fields
            .par_iter()
            .map(|(name, value)| (name.clone(), self.validate_field(name, value)))
            .collect();

        let invalid = results.values().filter(|r| !r.is_valid()).count();
        events::form_validated(results.len(), invalid);
        results
    }

    /// Sentiment of `text` without moderating or recording it.
    pub fn analyze_sentiment(&self, text: &str) -> Sentiment {
        self.sentiment.analyze(text)
    }

    pub fn stats(&self) -> StatsReport {
        self.history.stats()
    }

    pub fn history(&self) -> &HistoryTracker {
        &self.history
    }

    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    pub fn config(&self) -> &VigilConfig {
        &self.config
    }
}

impl IFieldValidator for ValidationOrchestrator {
    fn validate(&self, request: &ValidationRequest) -> ValidationResult {
        ValidationOrchestrator::validate(self, request)
    }
}

fn normalize_field_name(name: &str) -> String {
    name.trim().to_lowercase()
}
