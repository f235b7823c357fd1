use std::sync::Arc;

use proptest::prelude::*;
use vigil_rules::{PatternMatcher, RuleSet};
use vigil_scoring::entropy::shannon_entropy;
use vigil_scoring::text_stats::uppercase_ratio;
use vigil_scoring::{ScoreAccumulator, SentimentHeuristic, Signal};

fn signal_strategy() -> impl Strategy<Value = Signal> {
    ("[a-z]{1,8}", -200i32..200, any::<bool>()).prop_map(|(l, w, p)| Signal::new(l, w, p))
}

proptest! {
    #[test]
    fn score_always_in_bounds(base in -500i32..500, signals in prop::collection::vec(signal_strategy(), 0..20)) {
        let v = ScoreAccumulator::accumulate(base, &signals).value();
        prop_assert!((0.0..=100.0).contains(&v));
    }

    #[test]
    fn signal_order_does_not_matter(base in 0i32..100, signals in prop::collection::vec(signal_strategy(), 0..20)) {
        let forward = ScoreAccumulator::accumulate(base, &signals);
        let mut reversed = signals.clone();
        reversed.reverse();
        let backward = ScoreAccumulator::accumulate(base, &reversed);
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn entropy_bounded_by_log_of_length(s in ".{0,64}") {
        let n = s.chars().count();
        let h = shannon_entropy(&s);
        prop_assert!(h >= 0.0);
        if n > 0 {
            prop_assert!(h <= (n as f64).log2() + 1e-9);
        }
    }

    #[test]
    fn uppercase_ratio_is_a_fraction(s in ".{0,64}") {
        let r = uppercase_ratio(&s);
        prop_assert!((0.0..=1.0).contains(&r));
    }

    #[test]
    fn sentiment_is_deterministic(s in ".{0,120}") {
        let heuristic = SentimentHeuristic::new(PatternMatcher::new(Arc::new(RuleSet::builtin().unwrap())));
        prop_assert_eq!(heuristic.analyze(&s), heuristic.analyze(&s));
    }
}
