use vigil_core::config::*;
use vigil_core::{FieldKind, RuleCategory, RuleScope};

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = VigilConfig::from_toml("").unwrap();

    assert_eq!(config.history.capacity, 100);
    assert_eq!(config.suggestion.max_distance, 2);
    assert_eq!(config.rules.sql_keyword_min_hits, 2);
    assert_eq!(config.rules.spam_keyword_min_hits, 2);
    assert!(config.rules.custom_rules.is_empty());
    assert!(config.fields.overrides.is_empty());
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[history]
capacity = 10

[rules]
extra_spam_terms = ["crypto giveaway"]
spam_keyword_min_hits = 3

[[rules.custom_rules]]
id = "custom:bitcoin"
pattern = "\\bbitcoin\\b"
weight = 20
category = "spam"

[rules.extra_typos]
"gmaill.com" = "gmail.com"

[fields.overrides]
full_name = "name"
bio = "free_text"
"#;
    let config = VigilConfig::from_toml(toml).unwrap();
    assert_eq!(config.history.capacity, 10);
    assert_eq!(config.rules.extra_spam_terms, vec!["crypto giveaway"]);
    assert_eq!(config.rules.spam_keyword_min_hits, 3);
    // Non-overridden fields keep defaults
    assert_eq!(config.rules.sql_keyword_min_hits, 2);
    assert_eq!(config.suggestion.max_distance, 2);

    let rule = &config.rules.custom_rules[0];
    assert_eq!(rule.id, "custom:bitcoin");
    assert_eq!(rule.category, RuleCategory::Spam);
    assert_eq!(rule.weight, 20);
    assert_eq!(rule.scope, None);
    assert_eq!(
        config.rules.extra_typos.get("gmaill.com").map(String::as_str),
        Some("gmail.com")
    );
    assert_eq!(config.fields.overrides.get("full_name"), Some(&FieldKind::Name));
    assert_eq!(config.fields.overrides.get("bio"), Some(&FieldKind::FreeText));
}

#[test]
fn config_rejects_unknown_category() {
    let toml = r#"
[[rules.custom_rules]]
id = "x"
pattern = "x"
weight = 1
category = "malware"
"#;
    assert!(VigilConfig::from_toml(toml).is_err());
}

#[test]
fn custom_rule_scope_is_optional() {
    let toml = r#"
[[rules.custom_rules]]
id = "custom:lorem"
pattern = "lorem ipsum"
weight = 30
category = "repetition"
scope = "text"
"#;
    let config = VigilConfig::from_toml(toml).unwrap();
    assert_eq!(config.rules.custom_rules[0].scope, Some(RuleScope::Text));

    let bad = toml.replace("\"text\"", "\"header\"");
    assert!(VigilConfig::from_toml(&bad).is_err());
}

#[test]
fn config_serde_roundtrip() {
    let config = VigilConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = VigilConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.history.capacity, config.history.capacity);
    assert_eq!(
        roundtripped.suggestion.max_distance,
        config.suggestion.max_distance
    );
}
