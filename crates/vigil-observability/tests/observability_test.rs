use vigil_core::config::ObservabilityConfig;
use vigil_core::FieldKind;
use vigil_observability::{events, init_tracing, init_tracing_with_filter, spans};

#[test]
fn init_is_idempotent() {
    init_tracing_with_filter("vigil=trace");
    init_tracing(&ObservabilityConfig::default());
    init_tracing_with_filter("off");
}

#[test]
fn events_and_spans_emit_without_subscriber_panics() {
    let span = vigil_observability::validation_span!(FieldKind::Email);
    let _guard = span.enter();
    events::validation_completed(FieldKind::Email, true, 65.0, 0);
    events::content_rejected(100.0, &["spam", "profanity"]);
    events::history_evicted(100);
    let _form = vigil_observability::form_span!(3);
}

#[test]
fn span_names_are_namespaced() {
    assert_eq!(spans::names::VALIDATION, "vigil.validation");
    assert!(spans::names::FORM.starts_with("vigil."));
}
