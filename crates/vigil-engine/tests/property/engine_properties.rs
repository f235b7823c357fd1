use proptest::prelude::*;
use vigil_core::{FieldKind, ValidationRequest};
use vigil_engine::ValidationOrchestrator;

fn kind_strategy() -> impl Strategy<Value = FieldKind> {
    prop_oneof![
        Just(FieldKind::Email),
        Just(FieldKind::Phone),
        Just(FieldKind::FreeText),
        Just(FieldKind::Name),
        Just(FieldKind::Generic),
    ]
}

proptest! {
    #[test]
    fn scores_stay_in_range(kind in kind_strategy(), input in ".{0,120}") {
        let engine = ValidationOrchestrator::with_defaults().unwrap();
        let result = engine.validate(&ValidationRequest::new(kind, input));
        let c = result.confidence().value();
        prop_assert!((0.0..=100.0).contains(&c));
        if let Some(risk) = result.risk_score() {
            prop_assert!((0.0..=100.0).contains(&risk.value()));
            prop_assert_eq!(c, 100.0 - risk.value());
        }
    }

    #[test]
    fn validation_is_idempotent(kind in kind_strategy(), input in ".{0,120}") {
        let engine = ValidationOrchestrator::with_defaults().unwrap();
        let request = ValidationRequest::new(kind, input);
        prop_assert_eq!(engine.validate(&request), engine.validate(&request));
    }

    #[test]
    fn phone_formatting_only_when_valid(input in "[0-9+() -]{0,20}") {
        let engine = ValidationOrchestrator::with_defaults().unwrap();
        let result = engine.validate_phone(&input);
        prop_assert_eq!(result.formatted().is_some(), result.is_valid());
    }

    #[test]
    fn history_never_exceeds_capacity(inputs in prop::collection::vec(".{0,20}", 0..150)) {
        let engine = ValidationOrchestrator::with_defaults().unwrap();
        let capacity = engine.history().capacity();
        for input in &inputs {
            engine.validate_field("company", input);
            prop_assert!(engine.history().len() <= capacity);
        }
    }

    #[test]
    fn form_is_keyed_like_its_input(fields in prop::collection::btree_map("[a-z]{1,8}", ".{0,30}", 0..12)) {
        let engine = ValidationOrchestrator::with_defaults().unwrap();
        let results = engine.validate_form(&fields);
        prop_assert_eq!(
            results.keys().collect::<Vec<_>>(),
            fields.keys().collect::<Vec<_>>()
        );
    }
}
