//! Validation for admin-managed content (rarities and characters).

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::CoreError;
use crate::types::Timestamp;

/// Maximum length for rarity and character names.
pub const MAX_NAME_LEN: usize = 100;

/// Validate a rarity drop chance: a finite number in `[0, 1]`.
pub fn validate_chance(chance: f64) -> Result<(), CoreError> {
    if chance.is_finite() && (0.0..=1.0).contains(&chance) {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Chance must be a number between 0 and 1".into(),
        ))
    }
}

/// Trim and validate a display name for a rarity or character.
pub fn normalize_name(raw: &str, field: &str) -> Result<String, CoreError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(name.to_string())
}

/// Validate a CSS hex color such as `#9CA3AF` or `#fff`.
pub fn validate_color(color: &str) -> Result<(), CoreError> {
    let valid = color
        .strip_prefix('#')
        .is_some_and(|hex| matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()));
    if valid {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid color '{color}'. Expected a hex color like #9CA3AF"
        )))
    }
}

/// Naive ISO-8601 layouts accepted for `limited_until`, interpreted as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse an ISO-8601 end date for a limited character.
///
/// Accepts RFC 3339 (`2026-03-01T12:00:00Z`, `...+03:00`) and offset-less
/// forms such as the `2026-03-01T12:00` produced by HTML datetime inputs,
/// which are taken as UTC.
pub fn parse_limited_until(raw: &str) -> Result<Timestamp, CoreError> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            CoreError::Validation("Invalid limited_until format. Use ISO format".into())
        })
}
