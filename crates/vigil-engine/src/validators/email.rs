//! Email: format gate, typo map, then weighted plausibility signals.

use std::sync::Arc;

use vigil_core::constants::{
    EMAIL_BASE_CONFIDENCE, EMAIL_INJECTION_PENALTY, EMAIL_LOW_ENTROPY_PENALTY,
    EMAIL_MAX_SENSIBLE_LENGTH, EMAIL_MIN_SENSIBLE_LENGTH, EMAIL_RECOGNIZED_TLD_BONUS,
    EMAIL_SENSIBLE_LENGTH_BONUS, EMAIL_TRUSTED_DOMAIN_BONUS, EMAIL_TYPO_PENALTY,
    EMAIL_VALID_THRESHOLD, EMAIL_WEAK_DOMAIN_PENALTY,
};
use vigil_core::traits::IFormatValidator;
use vigil_core::{FieldKind, RuleCategory, Score, ValidationResult};
use vigil_rules::{PatternMatcher, RuleScope};
use vigil_scoring::entropy::is_low_entropy;
use vigil_scoring::{ScoreAccumulator, Signal, SuggestionEngine};

use super::{annotate, Verdict};

/// Domains shorter than this are penalized as implausible.
const MIN_DOMAIN_LENGTH: usize = 4;

pub struct EmailValidator {
    matcher: PatternMatcher,
    suggestions: SuggestionEngine,
    format: Arc<dyn IFormatValidator>,
}

impl EmailValidator {
    pub fn new(
        matcher: PatternMatcher,
        suggestions: SuggestionEngine,
        format: Arc<dyn IFormatValidator>,
    ) -> Self {
        Self {
            matcher,
            suggestions,
            format,
        }
    }

    pub fn check(&self, raw: &str) -> Verdict {
        let email = raw.trim();

        let parts = self
            .format
            .check_email(email)
            .and_then(|()| {
                email
                    .rsplit_once('@')
                    .ok_or_else(|| "address has no '@'".to_string())
            });
        let (local, domain) = match parts {
            Ok(parts) => parts,
            Err(reason) => return Verdict::unrecorded(self.malformed(email, &reason)),
        };
        let domain = domain.to_lowercase();
        let rules = self.matcher.rule_set();

        if let Some(fixed) = rules.typo_correction(&domain) {
            let score = ScoreAccumulator::accumulate(
                EMAIL_BASE_CONFIDENCE,
                &[Signal::present("domain typo", EMAIL_TYPO_PENALTY)],
            );
            let result =
                ValidationResult::from_confidence(FieldKind::Email, score, EMAIL_VALID_THRESHOLD)
                    .with_issue("Possible domain typo detected")
                    .with_suggestion(format!("{local}@{fixed}"))
                    .with_insight(format!("Did you mean {fixed}?"));
            return Verdict::unrecorded(result);
        }

        let local_lower = local.to_lowercase();
        let tld = domain.rsplit('.').next().unwrap_or_default();
        let length = email.chars().count();

        let mut signals = vec![
            Signal::new(
                "Recognized top-level domain",
                EMAIL_RECOGNIZED_TLD_BONUS,
                rules.is_recognized_tld(tld),
            ),
            Signal::new(
                "Trusted email provider",
                EMAIL_TRUSTED_DOMAIN_BONUS,
                rules.is_trusted_domain(&domain),
            ),
            Signal::new(
                "Address length looks normal",
                EMAIL_SENSIBLE_LENGTH_BONUS,
                length > EMAIL_MIN_SENSIBLE_LENGTH && length < EMAIL_MAX_SENSIBLE_LENGTH,
            ),
            Signal::new(
                "Local part looks repetitive (low entropy)",
                EMAIL_LOW_ENTROPY_PENALTY,
                is_low_entropy(&local_lower),
            ),
            Signal::new(
                "Domain looks implausible",
                EMAIL_WEAK_DOMAIN_PENALTY,
                domain.len() < MIN_DOMAIN_LENGTH || !domain.contains('.'),
            ),
        ];

        let identifier = self.matcher.scan_scope(&local_lower, RuleScope::Identifier);
        signals.extend(identifier.matches().iter().map(|m| {
            Signal::present(
                format!("Suspicious pattern in local part ({})", m.rule.id),
                m.rule.weight,
            )
        }));

        let injection = self.matcher.scan_categories(
            email,
            RuleScope::Text,
            &[RuleCategory::SqlInjection, RuleCategory::Xss],
        );
        signals.push(Signal::new(
            "Possible injection attempt in address",
            EMAIL_INJECTION_PENALTY,
            injection.is_flagged(RuleCategory::SqlInjection)
                || injection.is_flagged(RuleCategory::Xss),
        ));

        let breakdown = ScoreAccumulator::explain(EMAIL_BASE_CONFIDENCE, &signals);
        let mut result = ValidationResult::from_confidence(
            FieldKind::Email,
            breakdown.score,
            EMAIL_VALID_THRESHOLD,
        );
        annotate(&mut result, &breakdown, false);
        Verdict::recorded(result)
    }

    fn malformed(&self, email: &str, reason: &str) -> ValidationResult {
        let mut result =
            ValidationResult::from_confidence(FieldKind::Email, Score::ZERO, EMAIL_VALID_THRESHOLD)
                .with_issue("Invalid email format")
                .with_insight(reason.to_string());
        if let Some(suggestion) = self.suggestions.suggest(email) {
            result = result.with_suggestion(suggestion);
        }
        result
    }
}
