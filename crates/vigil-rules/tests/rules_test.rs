use std::sync::Arc;

use vigil_core::config::{CustomRuleConfig, RulesConfig};
use vigil_core::{RuleCategory, RuleError};
use vigil_rules::{PatternMatcher, RuleScope, RuleSet};

fn matcher() -> PatternMatcher {
    PatternMatcher::new(Arc::new(RuleSet::builtin().unwrap()))
}

// ── Construction ─────────────────────────────────────────────────────────

#[test]
fn builtin_rule_set_compiles_every_category() {
    let rules = RuleSet::builtin().unwrap();
    for category in RuleCategory::ALL {
        assert!(
            rules.rules().iter().any(|r| r.category == category),
            "no built-in rule for {category}"
        );
    }
    assert_eq!(rules.trusted_domains()[0], "gmail.com");
    assert!(rules.keyword_list(RuleCategory::SqlInjection).is_some());
    assert!(rules.keyword_list(RuleCategory::Spam).is_some());
}

#[test]
fn invalid_custom_pattern_fails_construction() {
    let config = RulesConfig {
        custom_rules: vec![CustomRuleConfig {
            id: "custom:broken".into(),
            pattern: "([a-z".into(),
            weight: 5,
            category: RuleCategory::Spam,
            scope: None,
        }],
        ..Default::default()
    };
    let err = RuleSet::from_config(&config).unwrap_err();
    assert!(matches!(err, RuleError::InvalidPattern { ref rule_id, .. } if rule_id == "custom:broken"));
}

#[test]
fn duplicate_custom_rule_id_fails_construction() {
    let config = RulesConfig {
        custom_rules: vec![CustomRuleConfig {
            id: "xss:script_tag".into(),
            pattern: "<svg".into(),
            weight: 35,
            category: RuleCategory::Xss,
            scope: None,
        }],
        ..Default::default()
    };
    assert!(matches!(
        RuleSet::from_config(&config),
        Err(RuleError::DuplicateRuleId { .. })
    ));
}

#[test]
fn empty_spam_term_fails_construction() {
    let config = RulesConfig {
        extra_spam_terms: vec!["  ".into()],
        ..Default::default()
    };
    assert!(matches!(
        RuleSet::from_config(&config),
        Err(RuleError::EmptyKeyword { .. })
    ));
}

#[test]
fn config_extensions_are_applied() {
    let mut config = RulesConfig {
        extra_spam_terms: vec!["crypto giveaway".into()],
        extra_profanity_terms: vec!["darn".into(), "damn".into()],
        extra_trusted_domains: vec!["proton.me".into(), "gmail.com".into()],
        ..Default::default()
    };
    config
        .extra_typos
        .insert("protn.me".into(), "proton.me".into());
    let rules = RuleSet::from_config(&config).unwrap();

    assert!(rules.rule("profanity:darn").is_some());
    assert_eq!(rules.trusted_domains().last().map(String::as_str), Some("proton.me"));
    assert_eq!(
        rules.trusted_domains().iter().filter(|d| *d == "gmail.com").count(),
        1
    );
    assert_eq!(rules.typo_correction("protn.me"), Some("proton.me"));
    assert_eq!(rules.typo_correction("gmial.com"), Some("gmail.com"));
}

// ── Matching ─────────────────────────────────────────────────────────────

#[test]
fn matching_is_case_insensitive() {
    let m = matcher();
    let report = m.scan_scope("<SCRIPT>ALERT(1)</SCRIPT>", RuleScope::Text);
    assert!(report.is_flagged(RuleCategory::Xss));
    assert!(report.matched("xss:script_tag"));
    assert!(report.matched("xss:alert_call"));
}

#[test]
fn all_rules_evaluated_without_short_circuit() {
    let m = matcher();
    let report = m.scan_scope(
        "<script>eval(x)</script> union select * from users; -- damn",
        RuleScope::Text,
    );
    // Several categories and several rules per category all report.
    assert!(report.is_flagged(RuleCategory::Xss));
    assert!(report.is_flagged(RuleCategory::SqlInjection));
    assert!(report.is_flagged(RuleCategory::Profanity));
    assert!(report.matched("sql:union_select"));
    assert!(report.matched("sql:select_from"));
    assert!(report.matched("sql:comment_terminator"));
    assert!(report.matched("xss:eval_call"));
}

#[test]
fn single_sql_keyword_does_not_flag() {
    let m = matcher();
    let report = m.scan_scope("Please update my address", RuleScope::Text);
    assert_eq!(report.keyword_hit_count(RuleCategory::SqlInjection), 1);
    assert!(!report.is_flagged(RuleCategory::SqlInjection));
    assert_eq!(report.category_weight(RuleCategory::SqlInjection), 0);
}

#[test]
fn keyword_inside_longer_keyword_counts_once() {
    let m = matcher();
    for text in ["Please execute the plan", "I love javascript", "<script"] {
        let report = m.scan_scope(text, RuleScope::Text);
        assert_eq!(
            report.keyword_hit_count(RuleCategory::SqlInjection),
            1,
            "{text}"
        );
        assert!(!report.is_flagged(RuleCategory::SqlInjection), "{text}");
    }

    // Separate occurrences of both terms still count as two.
    let report = m.scan_scope("exec it, then execute", RuleScope::Text);
    assert_eq!(report.keyword_hit_count(RuleCategory::SqlInjection), 2);
}

#[test]
fn two_sql_keywords_flag_once() {
    let m = matcher();
    let report = m.scan_scope("insert or delete whatever", RuleScope::Text);
    assert!(report.is_flagged(RuleCategory::SqlInjection));
    assert_eq!(report.category_weight(RuleCategory::SqlInjection), 40);
}

#[test]
fn flag_categories_count_once_regardless_of_hits() {
    let m = matcher();
    let report = m.scan_scope(
        "<script>alert(1)</script><script>alert(2)</script>",
        RuleScope::Text,
    );
    assert!(report.hit_count(RuleCategory::Xss) >= 4);
    assert_eq!(report.category_weight(RuleCategory::Xss), 35);
}

#[test]
fn spam_terms_weigh_per_distinct_hit() {
    let m = matcher();
    let report = m.scan_scope("Win free cash", RuleScope::Text);
    assert_eq!(report.keyword_hit_count(RuleCategory::Spam), 3);
    assert_eq!(report.category_weight(RuleCategory::Spam), 45);
}

#[test]
fn profanity_counts_occurrences_on_word_boundaries() {
    let m = matcher();
    let report = m.scan_scope("hello there, shell script", RuleScope::Text);
    assert_eq!(report.hit_count(RuleCategory::Profanity), 0);

    let report = m.scan_scope("Stupid, stupid idiot", RuleScope::Text);
    assert_eq!(report.hit_count(RuleCategory::Profanity), 3);
    assert_eq!(report.category_weight(RuleCategory::Profanity), 30);
}

#[test]
fn obfuscated_profanity_detected() {
    let m = matcher();
    let report = m.scan_scope("what the f*ck", RuleScope::Text);
    assert!(report.matched("profanity:f_word"));
}

#[test]
fn identifier_rules_apply_only_in_identifier_scope() {
    let m = matcher();
    let text_report = m.scan_scope("admin", RuleScope::Text);
    assert!(!text_report.matched("identifier:generic_account"));

    let id_report = m.scan_scope("admin", RuleScope::Identifier);
    assert!(id_report.matched("identifier:generic_account"));
    assert!(id_report.keywords(RuleCategory::Spam).is_none());
}

#[test]
fn repeated_characters_flag_repetition() {
    let m = matcher();
    let report = m.scan_scope("heyyyyy", RuleScope::Identifier);
    assert!(report.is_flagged(RuleCategory::Repetition));
    let report = m.scan_scope("heyy", RuleScope::Identifier);
    assert!(!report.is_flagged(RuleCategory::Repetition));
}

#[test]
fn phone_rules_detect_repeats_and_sequences() {
    let m = matcher();
    let report = m.scan_scope("1111111111", RuleScope::Phone);
    assert!(report.matched("phone:repeated_digits"));

    let report = m.scan_scope("1234567890", RuleScope::Phone);
    assert!(report.matched("phone:sequential_digits"));

    let report = m.scan_scope("5551234567", RuleScope::Phone);
    assert!(report.is_empty());
}

#[test]
fn scan_categories_limits_evaluation() {
    let m = matcher();
    let report = m.scan_categories(
        "free cash <script>",
        RuleScope::Text,
        &[RuleCategory::Xss],
    );
    assert!(report.is_flagged(RuleCategory::Xss));
    assert!(!report.is_flagged(RuleCategory::Spam));
    assert!(report.keywords(RuleCategory::Spam).is_none());
}

#[test]
fn benign_text_matches_nothing() {
    let m = matcher();
    let report = m.scan_scope("Thanks for the great service.", RuleScope::Text);
    assert!(report.flagged_categories().is_empty());
}
