//! Phone: normalize, classify into a format tier, then subtract pattern penalties.

use vigil_core::constants::{
    PHONE_AREA_CODE_PENALTY, PHONE_INTERNATIONAL_BASE_CONFIDENCE, PHONE_INTERNATIONAL_MAX_DIGITS,
    PHONE_INTERNATIONAL_MIN_DIGITS, PHONE_US_BASE_CONFIDENCE,
    PHONE_US_COUNTRY_CODE_BASE_CONFIDENCE, PHONE_VALID_THRESHOLD,
};
use vigil_core::{FieldKind, Score, ValidationResult};
use vigil_rules::{PatternMatcher, RuleScope};
use vigil_scoring::{ScoreAccumulator, Signal};

use super::{annotate, Verdict};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneFormat {
    /// Ten NANP digits.
    Us,
    /// Eleven digits with a leading country code `1`.
    UsWithCountryCode,
    /// `+` followed by 10 to 15 digits.
    International,
}

impl PhoneFormat {
    fn classify(has_plus: bool, digits: &str) -> Option<Self> {
        match (has_plus, digits.len()) {
            (false, 10) => Some(Self::Us),
            (_, 11) if digits.starts_with('1') => Some(Self::UsWithCountryCode),
            (true, n)
                if (PHONE_INTERNATIONAL_MIN_DIGITS..=PHONE_INTERNATIONAL_MAX_DIGITS)
                    .contains(&n) =>
            {
                Some(Self::International)
            }
            _ => None,
        }
    }

    fn base_confidence(self) -> i32 {
        match self {
            Self::Us => PHONE_US_BASE_CONFIDENCE,
            Self::UsWithCountryCode => PHONE_US_COUNTRY_CODE_BASE_CONFIDENCE,
            Self::International => PHONE_INTERNATIONAL_BASE_CONFIDENCE,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Self::Us => "US format detected",
            Self::UsWithCountryCode => "US format with country code detected",
            Self::International => "International format detected",
        }
    }

    /// The ten NANP digits, if this is a NANP number.
    fn national_number(self, digits: &str) -> Option<&str> {
        match self {
            Self::Us => Some(digits),
            Self::UsWithCountryCode => digits.get(1..),
            Self::International => None,
        }
    }

    fn render(self, digits: &str) -> String {
        match self.national_number(digits) {
            Some(n) if n.len() == 10 => {
                let prefix = if self == Self::UsWithCountryCode { "+1 " } else { "" };
                format!("{prefix}({}) {}-{}", &n[..3], &n[3..6], &n[6..])
            }
            _ => format!("+{digits}"),
        }
    }
}

/// Digits, and whether the value started with `+`.
pub fn normalize(raw: &str) -> (bool, String) {
    let trimmed = raw.trim();
    let digits = trimmed.chars().filter(char::is_ascii_digit).collect();
    (trimmed.starts_with('+'), digits)
}

pub struct PhoneValidator {
    matcher: PatternMatcher,
}

impl PhoneValidator {
    pub fn new(matcher: PatternMatcher) -> Self {
        Self { matcher }
    }

    pub fn check(&self, raw: &str) -> Verdict {
        let (has_plus, digits) = normalize(raw);

        let Some(format) = PhoneFormat::classify(has_plus, &digits) else {
            let result =
                ValidationResult::from_confidence(FieldKind::Phone, Score::ZERO, PHONE_VALID_THRESHOLD)
                    .with_issue("Invalid phone number format")
                    .with_insight(format!("{} digits found", digits.len()));
            return Verdict::unrecorded(result);
        };

        let report = self.matcher.scan_scope(&digits, RuleScope::Phone);
        let mut signals: Vec<Signal> = report
            .matches()
            .iter()
            .map(|m| Signal::present(pattern_issue(&m.rule.id), m.rule.weight))
            .collect();
        let odd_area_code = format
            .national_number(&digits)
            .is_some_and(|n| n.starts_with('0') || n.starts_with('1'));
        signals.push(Signal::new(
            "Area code cannot start with 0 or 1",
            PHONE_AREA_CODE_PENALTY,
            odd_area_code,
        ));

        let breakdown = ScoreAccumulator::explain(format.base_confidence(), &signals);
        let mut result =
            ValidationResult::from_confidence(FieldKind::Phone, breakdown.score, PHONE_VALID_THRESHOLD)
                .with_insight(format.describe());
        annotate(&mut result, &breakdown, false);

        if result.is_valid() {
            let rendered = format.render(&digits);
            result = result
                .with_formatted(rendered.clone())
                .with_suggestion(rendered);
        }
        Verdict::recorded(result)
    }
}

fn pattern_issue(rule_id: &str) -> String {
    match rule_id {
        "phone:repeated_digits" => "Repeated digits detected".to_string(),
        "phone:sequential_digits" => "Sequential digits detected".to_string(),
        other => format!("Suspicious digit pattern ({other})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_tiers() {
        assert_eq!(PhoneFormat::classify(false, "5551234567"), Some(PhoneFormat::Us));
        assert_eq!(
            PhoneFormat::classify(false, "15551234567"),
            Some(PhoneFormat::UsWithCountryCode)
        );
        assert_eq!(
            PhoneFormat::classify(true, "15551234567"),
            Some(PhoneFormat::UsWithCountryCode)
        );
        assert_eq!(
            PhoneFormat::classify(true, "447911123456"),
            Some(PhoneFormat::International)
        );
        assert_eq!(PhoneFormat::classify(false, "447911123456"), None);
        assert_eq!(PhoneFormat::classify(false, "12345"), None);
        assert_eq!(PhoneFormat::classify(true, "1234567890123456"), None);
    }

    #[test]
    fn rendering() {
        assert_eq!(PhoneFormat::Us.render("5551234567"), "(555) 123-4567");
        assert_eq!(
            PhoneFormat::UsWithCountryCode.render("15551234567"),
            "+1 (555) 123-4567"
        );
        assert_eq!(PhoneFormat::International.render("447911123456"), "+447911123456");
    }

    #[test]
    fn normalization_keeps_leading_plus_only() {
        assert_eq!(normalize(" +1 (555) 123-4567 "), (true, "15551234567".to_string()));
        assert_eq!(normalize("555+123"), (false, "555123".to_string()));
    }
}
