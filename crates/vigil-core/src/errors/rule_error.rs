/// Rule-set construction errors.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("rule '{rule_id}' has an invalid pattern: {reason}")]
    InvalidPattern { rule_id: String, reason: String },

    #[error("duplicate rule id: {rule_id}")]
    DuplicateRuleId { rule_id: String },

    #[error("empty entry in keyword list '{list}'")]
    EmptyKeyword { list: String },

    #[error("trusted domain list is empty")]
    NoTrustedDomains,
}
