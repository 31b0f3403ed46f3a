//! Form Validation
//!
//! Client-side field validators for the Pessoa form. Each returns the
//! error message to render inline, or `None` when the value passes.

use lazy_static::lazy_static;
use regex::Regex;

pub const NAME_MAX_LEN: usize = 150;
pub const EMAIL_MAX_LEN: usize = 400;

lazy_static! {
    /// Formatted Brazilian CPF: 000.000.000-00
    static ref CPF_RE: Regex = Regex::new(r"^\d{3}\.\d{3}\.\d{3}-\d{2}$").unwrap();
    static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

pub fn validate_name(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("This field is required.".to_string());
    }
    if value.chars().count() > NAME_MAX_LEN {
        return Some(format!(
            "This field cannot be longer than {} characters.",
            NAME_MAX_LEN
        ));
    }
    None
}

/// `duplicate` is the existence-check slice's answer for this value.
/// It only applies to new records; the field is immutable once saved.
pub fn validate_cpf(value: &str, duplicate: bool) -> Option<String> {
    if value.trim().is_empty() {
        return Some("This field is required.".to_string());
    }
    if !CPF_RE.is_match(value) {
        return Some("Cpf must follow the format 000.000.000-00.".to_string());
    }
    if duplicate {
        return Some("A Pessoa with this Cpf already exists.".to_string());
    }
    None
}

pub fn validate_email(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return Some("This field is required.".to_string());
    }
    if value.chars().count() > EMAIL_MAX_LEN {
        return Some(format!(
            "This field cannot be longer than {} characters.",
            EMAIL_MAX_LEN
        ));
    }
    if !EMAIL_RE.is_match(value) {
        return Some("Email is invalid.".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_required_and_capped() {
        assert!(validate_name("").is_some());
        assert!(validate_name("   ").is_some());
        assert!(validate_name("Maria da Silva").is_none());
        assert!(validate_name(&"x".repeat(150)).is_none());
        assert!(validate_name(&"x".repeat(151)).is_some());
    }

    #[test]
    fn test_cpf_pattern() {
        assert!(validate_cpf("123.456.789-00", false).is_none());
        assert!(validate_cpf("", false).is_some());
        assert!(validate_cpf("12345678900", false).is_some());
        assert!(validate_cpf("123.456.789-0", false).is_some());
        assert!(validate_cpf("abc.def.ghi-jk", false).is_some());
    }

    #[test]
    fn test_cpf_duplicate_flag_rejects_valid_format() {
        assert!(validate_cpf("123.456.789-00", true).is_some());
    }

    #[test]
    fn test_email_shape_and_cap() {
        assert!(validate_email("maria@example.com").is_none());
        assert!(validate_email("").is_some());
        assert!(validate_email("not-an-email").is_some());
        assert!(validate_email("two@@example.com").is_some());
        let long_local = "x".repeat(EMAIL_MAX_LEN);
        assert!(validate_email(&format!("{}@example.com", long_local)).is_some());
    }
}
