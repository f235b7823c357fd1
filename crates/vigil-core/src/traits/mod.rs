mod field_validator;
mod format_validator;

pub use field_validator::IFieldValidator;
pub use format_validator::IFormatValidator;
