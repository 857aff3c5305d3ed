//! Password policy and role checks for the user directory form.

use std::borrow::Cow;

use validator::ValidationError;

use crate::config::{is_valid_role, MIN_PASSWORD_LENGTH, PASSWORD_SYMBOLS};

/// Enforce the password policy: minimum length, an uppercase letter,
/// a digit and a symbol.
pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    let long_enough = password.chars().count() >= MIN_PASSWORD_LENGTH;
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));

    if long_enough && has_upper && has_digit && has_symbol {
        return Ok(());
    }

    let mut error = ValidationError::new("password_strength");
    error.message = Some(Cow::Owned(format!(
        "Password must be at least {} characters long and contain an uppercase letter, a digit and a symbol",
        MIN_PASSWORD_LENGTH
    )));
    Err(error)
}

pub fn validate_role(role: &str) -> Result<(), ValidationError> {
    if is_valid_role(role) {
        return Ok(());
    }

    let mut error = ValidationError::new("role");
    error.message = Some(Cow::Borrowed("Role must be ADMIN or USER"));
    Err(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_password_accepted() {
        assert!(validate_password_strength("Secur3Pass!").is_ok());
        assert!(validate_password_strength("Abcdef1#").is_ok());
    }

    #[test]
    fn test_too_short() {
        assert!(validate_password_strength("Ab1#").is_err());
    }

    #[test]
    fn test_missing_character_classes() {
        assert!(validate_password_strength("abcdefg1!").is_err());
        assert!(validate_password_strength("Abcdefgh!").is_err());
        assert!(validate_password_strength("Abcdefgh1").is_err());
    }

    #[test]
    fn test_only_ascii_capitals_count() {
        assert!(validate_password_strength("Ébcdefg1!").is_err());
        assert!(validate_password_strength("Ébcdefg1!A").is_ok());
    }

    #[test]
    fn test_only_listed_symbols_count() {
        assert!(validate_password_strength("Abcdefg1|").is_err());
        assert!(validate_password_strength("Abcdefg1€").is_err());
        assert!(validate_password_strength("Abcdefg1 ").is_err());
        for symbol in PASSWORD_SYMBOLS.chars() {
            let password = format!("Abcdefg1{symbol}");
            assert!(validate_password_strength(&password).is_ok(), "{password}");
        }
    }

    #[test]
    fn test_error_carries_message() {
        let error = validate_password_strength("weak").unwrap_err();
        assert!(error.message.unwrap().contains("uppercase"));
    }

    #[test]
    fn test_role_check() {
        assert!(validate_role("ADMIN").is_ok());
        assert!(validate_role("USER").is_ok());
        assert!(validate_role("GUEST").is_err());
    }
}
