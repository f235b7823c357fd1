//! Person names: a naturalness base from letter shape, then penalties.

use vigil_core::constants::{
    NAME_DIGIT_PENALTY, NAME_FULL_NAME_BONUS, NAME_LOW_ENTROPY_PENALTY, NAME_MAX_LENGTH,
    NAME_MIN_LENGTH, NAME_NATURAL_BASE, NAME_NATURAL_RATIO_MAX, NAME_NATURAL_RATIO_MIN,
    NAME_NO_CONSONANT_BASE, NAME_PROFANITY_PENALTY, NAME_UNNATURAL_BASE, NAME_VALID_THRESHOLD,
};
use vigil_core::{FieldKind, RuleCategory, Score, ValidationResult};
use vigil_rules::patterns::identifier::DIGIT_RUN_RULE_ID;
use vigil_rules::{PatternMatcher, RuleScope};
use vigil_scoring::entropy::is_low_entropy;
use vigil_scoring::{ScoreAccumulator, Signal};

use super::{annotate, Verdict};

pub struct NameValidator {
    matcher: PatternMatcher,
}

impl NameValidator {
    pub fn new(matcher: PatternMatcher) -> Self {
        Self { matcher }
    }

    pub fn check(&self, raw: &str) -> Verdict {
        let name = raw.trim();
        let length = name.chars().count();
        if length < NAME_MIN_LENGTH {
            return Verdict::unrecorded(rejected("Name too short"));
        }
        if length > NAME_MAX_LENGTH {
            return Verdict::unrecorded(rejected("Name too long"));
        }

        let lowered = name.to_lowercase();
        let base = naturalness_base(&lowered);

        let identifier = self.matcher.scan_scope(&lowered, RuleScope::Identifier);
        let mut signals: Vec<Signal> = identifier
            .matches()
            .iter()
            .filter(|m| m.rule.id != DIGIT_RUN_RULE_ID)
            .map(|m| {
                Signal::present(
                    format!("Name looks generated ({})", m.rule.id),
                    m.rule.weight,
                )
            })
            .collect();

        let profanity = self.matcher.scan_categories(
            name,
            RuleScope::Text,
            &[RuleCategory::Profanity],
        );
        signals.extend([
            Signal::new(
                "Full name format",
                NAME_FULL_NAME_BONUS,
                is_full_name(name),
            ),
            Signal::new(
                "Name looks repetitive (low entropy)",
                NAME_LOW_ENTROPY_PENALTY,
                is_low_entropy(&lowered),
            ),
            Signal::new(
                "Names typically should not contain numbers",
                NAME_DIGIT_PENALTY,
                name.chars().any(|c| c.is_ascii_digit()),
            ),
            Signal::new(
                "Inappropriate content detected",
                NAME_PROFANITY_PENALTY,
                profanity.is_flagged(RuleCategory::Profanity),
            ),
        ]);

        let breakdown = ScoreAccumulator::explain(base, &signals);
        let mut result =
            ValidationResult::from_confidence(FieldKind::Name, breakdown.score, NAME_VALID_THRESHOLD)
                .with_insight(format!("Name naturalness base: {base}"));
        annotate(&mut result, &breakdown, false);
        Verdict::recorded(result)
    }
}

fn rejected(issue: &str) -> ValidationResult {
    ValidationResult::from_confidence(FieldKind::Name, Score::ZERO, NAME_VALID_THRESHOLD)
        .with_issue(issue)
}

/// Base score from the vowel to consonant ratio of the letters.
fn naturalness_base(lowered: &str) -> i32 {
    let (vowels, consonants) = lowered
        .chars()
        .filter(|c| c.is_alphabetic())
        .fold((0usize, 0usize), |(v, c), ch| {
            if matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u') {
                (v + 1, c)
            } else {
                (v, c + 1)
            }
        });
    if consonants == 0 {
        return NAME_NO_CONSONANT_BASE;
    }
    let ratio = vowels as f64 / consonants as f64;
    if (NAME_NATURAL_RATIO_MIN..=NAME_NATURAL_RATIO_MAX).contains(&ratio) {
        NAME_NATURAL_BASE
    } else {
        NAME_UNNATURAL_BASE
    }
}

/// Two or more whitespace-separated words made of letters, `'` and `-`.
fn is_full_name(name: &str) -> bool {
    let mut words = 0;
    for word in name.split_whitespace() {
        let letters_only = word
            .chars()
            .all(|c| c.is_alphabetic() || c == '\'' || c == '-');
        if !letters_only || !word.chars().next().is_some_and(char::is_alphabetic) {
            return false;
        }
        words += 1;
    }
    words >= 2
}
