/// Strict syntactic email check the email validator delegates to.
pub trait IFormatValidator: Send + Sync {
    /// `Err` carries a human-readable reason for the rejection.
    fn check_email(&self, email: &str) -> Result<(), String>;
}
