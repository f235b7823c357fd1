/// Canonical providers, in suggestion tie-break order.
pub const TRUSTED_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "icloud.com",
];

/// Known misspellings, checked before any edit-distance search.
pub const DOMAIN_TYPOS: &[(&str, &str)] = &[
    ("gmail.co", "gmail.com"),
    ("gmial.com", "gmail.com"),
    ("gmai.com", "gmail.com"),
    ("gamil.com", "gmail.com"),
    ("yahoo.co", "yahoo.com"),
    ("yahooo.com", "yahoo.com"),
    ("hotmail.co", "hotmail.com"),
    ("hotmial.com", "hotmail.com"),
    ("outlook.co", "outlook.com"),
];

pub const RECOGNIZED_TLDS: &[&str] = &["com", "org", "net", "edu", "gov", "mil"];
