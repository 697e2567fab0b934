//! Client-side checks run before a profile is submitted.
//!
//! Rules are evaluated in a fixed order and the first failure wins, so the user
//! only ever sees one message at a time:
//!
//! 1. username and email present
//! 2. a profile type selected
//! 3. the password policy for the current mode
//!
//! The complexity policy requires at least [`MIN_PASSWORD_LEN`] characters with one
//! ASCII lowercase letter, one ASCII uppercase letter, one ASCII digit and one symbol.
//! Anything that is not an ASCII letter or digit counts as a symbol, `_` included.

use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Username and email are required")]
    MissingIdentity,

    #[error("Select a profile type")]
    MissingProfileType,

    #[error("Password is required")]
    MissingPassword,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least 8 characters and contain an uppercase letter, a lowercase letter, a digit and a symbol")]
    WeakPassword,

    #[error("Only image files can be used as a photo")]
    NotAnImage,
}

/// What an accepted form asks the server to do with the password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordChange {
    /// Leave the stored password as it is (edit mode, both fields blank).
    Keep,
    Set(String),
}

impl PasswordChange {
    /// The `password` / `rpPassword` wire values.
    pub fn wire_values(&self) -> (String, String) {
        match self {
            PasswordChange::Keep => (String::new(), String::new()),
            PasswordChange::Set(p) => (p.clone(), p.clone()),
        }
    }
}

pub fn check_identity(username: &str, email: &str) -> Result<(), ValidationError> {
    if username.is_empty() || email.is_empty() {
        return Err(ValidationError::MissingIdentity);
    }
    Ok(())
}

pub fn check_profile_type(profile_type_id: &str) -> Result<(), ValidationError> {
    if profile_type_id.is_empty() {
        return Err(ValidationError::MissingProfileType);
    }
    Ok(())
}

/// Password rules for a new profile: both fields required, equal, strong.
pub fn check_new_password(
    password: &str,
    confirmation: &str,
) -> Result<PasswordChange, ValidationError> {
    if password.is_empty() || confirmation.is_empty() {
        return Err(ValidationError::MissingPassword);
    }
    check_matching_strong(password, confirmation)
}

/// Password rules for an existing profile: both fields blank keeps the current
/// password, anything else is held to the same rules as a new one.
pub fn check_password_change(
    password: &str,
    confirmation: &str,
) -> Result<PasswordChange, ValidationError> {
    if password.trim().is_empty() && confirmation.trim().is_empty() {
        return Ok(PasswordChange::Keep);
    }
    check_matching_strong(password, confirmation)
}

fn check_matching_strong(
    password: &str,
    confirmation: &str,
) -> Result<PasswordChange, ValidationError> {
    if password != confirmation {
        return Err(ValidationError::PasswordMismatch);
    }
    if !is_strong_password(password) {
        return Err(ValidationError::WeakPassword);
    }
    Ok(PasswordChange::Set(password.to_string()))
}

/// Whether `password` satisfies the complexity policy.
pub fn is_strong_password(password: &str) -> bool {
    // Line breaks are never accepted.
    if password.contains(|c: char| matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')) {
        return false;
    }
    password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| !c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strong_password_examples() {
        assert!(is_strong_password("Abc123!@"));
        assert!(is_strong_password("Passw0rd_"));
        assert!(is_strong_password("Çok-Güçlü1"));
        assert!(!is_strong_password("abcdefgh"));
        assert!(!is_strong_password("Abc12!@"));
        assert!(!is_strong_password("ABC123!@"));
        assert!(!is_strong_password("abc123!@"));
        assert!(!is_strong_password("Abcdef!@"));
        assert!(!is_strong_password("Abcdef12"));
        assert!(!is_strong_password("Abc123!@\n"));
        // Length counts characters, not UTF-16 units.
        assert!(!is_strong_password("Ab1!\u{1F600}\u{1F600}"));
    }

    #[test]
    fn test_identity_required() {
        assert_eq!(check_identity("", "a@x.com"), Err(ValidationError::MissingIdentity));
        assert_eq!(check_identity("alice", ""), Err(ValidationError::MissingIdentity));
        assert_eq!(check_identity("  ", "a@x.com"), Ok(()));
        assert_eq!(check_identity("alice", "a@x.com"), Ok(()));
    }

    #[test]
    fn test_profile_type_required() {
        assert_eq!(check_profile_type(""), Err(ValidationError::MissingProfileType));
        assert_eq!(check_profile_type("1"), Ok(()));
    }

    #[test]
    fn test_new_password_rules_in_order() {
        assert_eq!(check_new_password("", ""), Err(ValidationError::MissingPassword));
        assert_eq!(
            check_new_password("Abc123!@", ""),
            Err(ValidationError::MissingPassword)
        );
        assert_eq!(
            check_new_password("abcdefgh", "abcdefgh1"),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(
            check_new_password("abcdefgh", "abcdefgh"),
            Err(ValidationError::WeakPassword)
        );
        assert_eq!(
            check_new_password("Abc123!@", "Abc123!@"),
            Ok(PasswordChange::Set("Abc123!@".into()))
        );
    }

    #[test]
    fn test_password_change_blank_keeps() {
        assert_eq!(check_password_change("", ""), Ok(PasswordChange::Keep));
        assert_eq!(check_password_change("  ", " "), Ok(PasswordChange::Keep));
        assert_eq!(PasswordChange::Keep.wire_values(), (String::new(), String::new()));
    }

    #[test]
    fn test_password_change_half_filled() {
        assert_eq!(
            check_password_change("Abc123!@", ""),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(
            check_password_change("", "Abc123!@"),
            Err(ValidationError::PasswordMismatch)
        );
        assert_eq!(
            check_password_change("short", "short"),
            Err(ValidationError::WeakPassword)
        );
    }
}
