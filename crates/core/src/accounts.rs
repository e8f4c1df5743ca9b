//! Registration input rules.

use crate::error::CoreError;

/// Minimum username length in characters (after trimming).
pub const MIN_USERNAME_LEN: usize = 3;

/// Maximum username length in characters (after trimming).
pub const MAX_USERNAME_LEN: usize = 50;

/// Minimum password length in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Trim and validate a username, returning the normalized value.
pub fn normalize_username(raw: &str) -> Result<String, CoreError> {
    let username = raw.trim();
    if username.is_empty() {
        return Err(CoreError::Validation(
            "Username and password required".into(),
        ));
    }
    let len = username.chars().count();
    if !(MIN_USERNAME_LEN..=MAX_USERNAME_LEN).contains(&len) {
        return Err(CoreError::Validation(format!(
            "Username must be {MIN_USERNAME_LEN}-{MAX_USERNAME_LEN} characters"
        )));
    }
    Ok(username.to_string())
}

/// Validate that a password meets the minimum length.
pub fn validate_password(password: &str) -> Result<(), CoreError> {
    if password.is_empty() {
        return Err(CoreError::Validation(
            "Username and password required".into(),
        ));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn username_is_trimmed() {
        assert_eq!(normalize_username("  alice  ").unwrap(), "alice");
    }

    #[test]
    fn blank_username_rejected() {
        assert_matches!(normalize_username("   "), Err(CoreError::Validation(_)));
    }

    #[test]
    fn username_length_bounds() {
        assert!(normalize_username("ab").is_err());
        assert!(normalize_username("abc").is_ok());
        assert!(normalize_username(&"x".repeat(50)).is_ok());
        assert!(normalize_username(&"x".repeat(51)).is_err());
    }

    #[test]
    fn username_length_counts_characters_not_bytes() {
        // Three Cyrillic letters are six bytes.
        assert!(normalize_username("Аня").is_ok());
    }

    #[test]
    fn password_minimum() {
        assert!(validate_password("").is_err());
        assert!(validate_password("12345").is_err());
        assert!(validate_password("123456").is_ok());
    }
}
