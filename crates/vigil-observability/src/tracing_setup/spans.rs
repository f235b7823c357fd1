//! Span definitions per operation.

/// Span wrapping a single field validation.
#[macro_export]
macro_rules! validation_span {
    ($kind:expr) => {
        tracing::info_span!("vigil.validation", kind = %$kind)
    };
}

/// Span wrapping a whole form batch.
#[macro_export]
macro_rules! form_span {
    ($field_count:expr) => {
        tracing::info_span!("vigil.form", field_count = $field_count)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const VALIDATION: &str = "vigil.validation";
    pub const FORM: &str = "vigil.form";
}
