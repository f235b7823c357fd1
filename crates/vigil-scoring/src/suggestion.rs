//! Domain corrections for email addresses.

use std::sync::Arc;

use vigil_rules::RuleSet;

/// Suggests a corrected address from the typo map or the closest trusted domain.
#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    rule_set: Arc<RuleSet>,
    max_distance: usize,
}

impl SuggestionEngine {
    pub fn new(rule_set: Arc<RuleSet>, max_distance: usize) -> Self {
        Self {
            rule_set,
            max_distance,
        }
    }

    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    /// Corrected `local@domain`, or `None` when there is no `@`, the domain is
    /// already canonical, or nothing is close enough.
    pub fn suggest(&self, value: &str) -> Option<String> {
        let (local, domain) = value.trim().rsplit_once('@')?;
        let domain = domain.to_lowercase();

        if let Some(fixed) = self.rule_set.typo_correction(&domain) {
            return Some(format!("{local}@{fixed}"));
        }

        let closest = self.closest_domain(&domain)?;
        tracing::trace!(from = %domain, to = %closest, "domain suggestion");
        Some(format!("{local}@{closest}"))
    }

    /// Nearest trusted domain within range. `min_by_key` keeps the first of
    /// equal candidates, so ties go to declared order.
    pub fn closest_domain(&self, domain: &str) -> Option<&str> {
        self.rule_set
            .trusted_domains()
            .iter()
            .map(|candidate| (candidate, strsim::levenshtein(domain, candidate)))
            .min_by_key(|(_, distance)| *distance)
            .filter(|(_, distance)| *distance > 0 && *distance <= self.max_distance)
            .map(|(candidate, _)| candidate.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> SuggestionEngine {
        SuggestionEngine::new(Arc::new(RuleSet::builtin().unwrap()), 2)
    }

    #[test]
    fn typo_map_wins() {
        assert_eq!(engine().suggest("user@gmial.com").as_deref(), Some("user@gmail.com"));
    }

    #[test]
    fn splits_on_last_at() {
        assert_eq!(
            engine().suggest("a@b@yahooo.com").as_deref(),
            Some("a@b@yahoo.com")
        );
    }

    #[test]
    fn canonical_and_distant_domains_get_nothing() {
        assert_eq!(engine().suggest("user@gmail.com"), None);
        assert_eq!(engine().suggest("user@example.org"), None);
        assert_eq!(engine().suggest("no-at-sign"), None);
    }

    #[test]
    fn edit_distance_fallback() {
        assert_eq!(engine().suggest("x@gmaill.com").as_deref(), Some("x@gmail.com"));
        assert_eq!(engine().suggest("x@outlok.com").as_deref(), Some("x@outlook.com"));
    }
}
