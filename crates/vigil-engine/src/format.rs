//! Structural email checks (RFC 5321 lengths and character sets).

use thiserror::Error;
use vigil_core::traits::IFormatValidator;

/// Maximum length of an address.
const MAX_EMAIL_LENGTH: usize = 254;
/// Maximum length of the local part (before `@`).
const MAX_LOCAL_PART_LENGTH: usize = 64;
/// Maximum length of the domain part.
const MAX_DOMAIN_LENGTH: usize = 253;
/// Maximum length of one domain label.
const MAX_LABEL_LENGTH: usize = 63;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailFormatError {
    #[error("address is empty")]
    Empty,

    #[error("address exceeds {MAX_EMAIL_LENGTH} characters")]
    TooLong,

    #[error("address must contain exactly one '@'")]
    AtSymbolCount,

    #[error("local part is empty")]
    EmptyLocalPart,

    #[error("local part exceeds {MAX_LOCAL_PART_LENGTH} characters")]
    LocalPartTooLong,

    #[error("local part cannot start or end with a dot, or repeat dots")]
    LocalPartDots,

    #[error("invalid character in local part: '{0}'")]
    InvalidLocalPartChar(char),

    #[error("domain is empty")]
    EmptyDomain,

    #[error("domain exceeds {MAX_DOMAIN_LENGTH} characters")]
    DomainTooLong,

    #[error("domain must contain a dot")]
    DomainMissingDot,

    #[error("domain has an empty label")]
    EmptyDomainLabel,

    #[error("domain label exceeds {MAX_LABEL_LENGTH} characters")]
    DomainLabelTooLong,

    #[error("domain label cannot start or end with a hyphen")]
    DomainLabelHyphen,

    #[error("invalid character in domain: '{0}'")]
    InvalidDomainChar(char),

    #[error("top-level domain must be at least two letters")]
    InvalidTopLevelDomain,
}

/// The format check used unless the caller supplies another one.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormatValidator;

impl DefaultFormatValidator {
    pub fn check(email: &str) -> Result<(), EmailFormatError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(EmailFormatError::Empty);
        }
        if email.len() > MAX_EMAIL_LENGTH {
            return Err(EmailFormatError::TooLong);
        }
        let (local, domain) = match email.split_once('@') {
            Some((local, domain)) if !domain.contains('@') => (local, domain),
            _ => return Err(EmailFormatError::AtSymbolCount),
        };
        check_local_part(local)?;
        check_domain(domain)
    }
}

impl IFormatValidator for DefaultFormatValidator {
    fn check_email(&self, email: &str) -> Result<(), String> {
        Self::check(email).map_err(|e| e.to_string())
    }
}

fn check_local_part(local: &str) -> Result<(), EmailFormatError> {
    if local.is_empty() {
        return Err(EmailFormatError::EmptyLocalPart);
    }
    if local.len() > MAX_LOCAL_PART_LENGTH {
        return Err(EmailFormatError::LocalPartTooLong);
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return Err(EmailFormatError::LocalPartDots);
    }
    match local.chars().find(|c| !is_valid_local_char(*c)) {
        Some(c) => Err(EmailFormatError::InvalidLocalPartChar(c)),
        None => Ok(()),
    }
}

fn check_domain(domain: &str) -> Result<(), EmailFormatError> {
    if domain.is_empty() {
        return Err(EmailFormatError::EmptyDomain);
    }
    if domain.len() > MAX_DOMAIN_LENGTH {
        return Err(EmailFormatError::DomainTooLong);
    }
    if !domain.contains('.') {
        return Err(EmailFormatError::DomainMissingDot);
    }
    for label in domain.split('.') {
        check_label(label)?;
    }
    let tld = domain.rsplit('.').next().unwrap_or_default();
    if tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(EmailFormatError::InvalidTopLevelDomain);
    }
    Ok(())
}

fn check_label(label: &str) -> Result<(), EmailFormatError> {
    if label.is_empty() {
        return Err(EmailFormatError::EmptyDomainLabel);
    }
    if label.len() > MAX_LABEL_LENGTH {
        return Err(EmailFormatError::DomainLabelTooLong);
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err(EmailFormatError::DomainLabelHyphen);
    }
    match label.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '-')) {
        Some(c) => Err(EmailFormatError::InvalidDomainChar(c)),
        None => Ok(()),
    }
}

fn is_valid_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '.' | '!'
                | '#'
                | '$'
                | '%'
                | '&'
                | '\''
                | '*'
                | '+'
                | '-'
                | '/'
                | '='
                | '?'
                | '^'
                | '_'
                | '`'
                | '{'
                | '|'
                | '}'
                | '~'
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        for ok in ["user@example.com", "first.last+tag@sub.example.co.uk", "a@b.io"] {
            assert_eq!(DefaultFormatValidator::check(ok), Ok(()), "{ok}");
        }
    }

    #[test]
    fn rejects_structural_errors() {
        use EmailFormatError::*;
        let cases = [
            ("", Empty),
            ("plainaddress", AtSymbolCount),
            ("a@b@c.com", AtSymbolCount),
            ("@example.com", EmptyLocalPart),
            (".user@example.com", LocalPartDots),
            ("us..er@example.com", LocalPartDots),
            ("us er@example.com", InvalidLocalPartChar(' ')),
            ("user@", EmptyDomain),
            ("user@localhost", DomainMissingDot),
            ("user@exa..mple.com", EmptyDomainLabel),
            ("user@-example.com", DomainLabelHyphen),
            ("user@exam_ple.com", InvalidDomainChar('_')),
            ("user@example.c", InvalidTopLevelDomain),
            ("user@example.123", InvalidTopLevelDomain),
        ];
        for (input, expected) in cases {
            assert_eq!(DefaultFormatValidator::check(input), Err(expected), "{input}");
        }
    }

    #[test]
    fn rejects_overlong_parts() {
        let local = "a".repeat(65);
        assert_eq!(
            DefaultFormatValidator::check(&format!("{local}@example.com")),
            Err(EmailFormatError::LocalPartTooLong)
        );
        let label = "a".repeat(64);
        assert_eq!(
            DefaultFormatValidator::check(&format!("user@{label}.com")),
            Err(EmailFormatError::DomainLabelTooLong)
        );
    }
}
