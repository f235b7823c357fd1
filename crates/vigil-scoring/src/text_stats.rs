//! Cheap whole-text measurements used by moderation.

use std::sync::LazyLock;

use regex::Regex;

static LINK_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?i)https?://\S+").ok());

/// Uppercase letters as a share of all characters. Empty text is 0.
pub fn uppercase_ratio(text: &str) -> f64 {
    let (upper, total) = text.chars().fold((0usize, 0usize), |(u, t), c| {
        (u + usize::from(c.is_uppercase()), t + 1)
    });
    if total == 0 {
        0.0
    } else {
        upper as f64 / total as f64
    }
}

/// Number of `http://` or `https://` links.
pub fn link_count(text: &str) -> usize {
    match LINK_RE.as_ref() {
        Some(re) => re.find_iter(text).count(),
        None => 0,
    }
}
