use vigil_core::constants::{SQL_INJECTION_RISK, XSS_RISK};
use vigil_core::{RuleCategory, RuleError};

use crate::rule::{Rule, RuleScope};

/// Keywords counted by substring containment. Two distinct hits flag SQL
/// injection by default; a single keyword is common in ordinary prose.
pub const SQL_KEYWORDS: &[&str] = &[
    "union",
    "select",
    "insert",
    "delete",
    "update",
    "drop",
    "create",
    "alter",
    "exec",
    "execute",
    "script",
    "javascript",
    "onload",
    "onerror",
    "onclick",
    "<script",
    "</script>",
];

// ── SQL injection ──────────────────────────────────────────────────────────
const SQL_PATTERNS: &[(&str, &str)] = &[
    ("sql:union_select", r"\bunion\b.*\bselect\b"),
    ("sql:select_from", r"\bselect\b.*\bfrom\b"),
    ("sql:drop_table", r"\bdrop\s+(?:table|database)\b"),
    ("sql:tautology", r#"['"]\s*or\s+['"]?\w+['"]?\s*=\s*['"]?\w+"#),
    ("sql:comment_terminator", r";\s*--"),
];

// ── XSS ────────────────────────────────────────────────────────────────────
const XSS_PATTERNS: &[(&str, &str)] = &[
    ("xss:script_tag", r"<script[^>]*>"),
    ("xss:javascript_uri", r"javascript:"),
    ("xss:event_handler", r"\bon\w+\s*="),
    ("xss:iframe_tag", r"<iframe[^>]*>"),
    ("xss:eval_call", r"\beval\s*\("),
    ("xss:alert_call", r"\balert\s*\("),
];

pub fn rules() -> Result<Vec<Rule>, RuleError> {
    let sql = SQL_PATTERNS.iter().map(|(id, pattern)| {
        Rule::regex(
            *id,
            pattern,
            SQL_INJECTION_RISK,
            RuleCategory::SqlInjection,
            RuleScope::Text,
        )
    });
    let xss = XSS_PATTERNS
        .iter()
        .map(|(id, pattern)| Rule::regex(*id, pattern, XSS_RISK, RuleCategory::Xss, RuleScope::Text));
    sql.chain(xss).collect()
}
