use std::sync::Arc;

use proptest::prelude::*;
use vigil_core::RuleCategory;
use vigil_rules::{PatternMatcher, RuleScope, RuleSet};

fn matcher() -> PatternMatcher {
    PatternMatcher::new(Arc::new(RuleSet::builtin().unwrap()))
}

proptest! {
    #[test]
    fn scanning_is_deterministic(s in ".{0,200}") {
        let m = matcher();
        let a = m.scan(&s);
        let b = m.scan(&s);
        let ids_a: Vec<&str> = a.matches().iter().map(|r| r.rule.id.as_str()).collect();
        let ids_b: Vec<&str> = b.matches().iter().map(|r| r.rule.id.as_str()).collect();
        prop_assert_eq!(ids_a, ids_b);
        for category in RuleCategory::ALL {
            prop_assert_eq!(a.category_weight(category), b.category_weight(category));
        }
    }

    #[test]
    fn matching_ignores_case(s in "[a-zA-Z<>!? ]{0,80}") {
        let m = matcher();
        let lower = m.scan_scope(&s.to_lowercase(), RuleScope::Text);
        let upper = m.scan_scope(&s.to_uppercase(), RuleScope::Text);
        for category in RuleCategory::ALL {
            prop_assert_eq!(lower.hit_count(category), upper.hit_count(category));
        }
    }

    #[test]
    fn flag_categories_never_exceed_one_weight(s in ".{0,200}") {
        let m = matcher();
        let report = m.scan_scope(&s, RuleScope::Text);
        prop_assert!(report.category_weight(RuleCategory::SqlInjection) <= 40);
        prop_assert!(report.category_weight(RuleCategory::Xss) <= 35);
    }

    #[test]
    fn unflagged_categories_weigh_nothing(s in "[a-z ]{0,60}") {
        let m = matcher();
        let report = m.scan_scope(&s, RuleScope::Text);
        for category in RuleCategory::ALL {
            if !report.is_flagged(category) {
                prop_assert_eq!(report.category_weight(category), 0);
            }
        }
    }
}
