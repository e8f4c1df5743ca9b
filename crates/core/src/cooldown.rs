//! Per-user spin cooldown arithmetic.
//!
//! The cooldown window is measured from the user's last successful spin.
//! This module only computes the decision; enforcing it atomically (row lock
//! plus write of the new `last_spin`) is the spin engine's job.

use chrono::Duration;

use crate::types::Timestamp;

/// Default cooldown window in minutes.
pub const DEFAULT_COOLDOWN_MINS: i64 = 60;

/// Rejection produced when a spin is attempted inside the cooldown window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Spin cooldown active: {remaining_minutes} minute(s) remaining")]
pub struct CooldownActive {
    /// Whole minutes left until the next spin, rounded down.
    pub remaining_minutes: i64,
    /// Instant at which the next spin becomes available (`last_spin + window`).
    pub next_spin_available: Timestamp,
}

/// Decide whether a spin at `now` is allowed given the user's last spin.
///
/// A spin is permitted when the user has never spun, or when
/// `now >= last_spin + window`.
pub fn check(
    last_spin: Option<Timestamp>,
    now: Timestamp,
    window: Duration,
) -> Result<(), CooldownActive> {
    let Some(last_spin) = last_spin else {
        return Ok(());
    };

    let next_spin_available = last_spin + window;
    if now >= next_spin_available {
        return Ok(());
    }

    let remaining = next_spin_available - now;
    Err(CooldownActive {
        remaining_minutes: remaining.num_minutes(),
        next_spin_available,
    })
}

/// Instant at which a user who spins at `now` may spin again.
pub fn next_available(now: Timestamp, window: Duration) -> Timestamp {
    now + window
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    use super::*;

    fn hour() -> Duration {
        Duration::minutes(DEFAULT_COOLDOWN_MINS)
    }

    fn at(h: u32, m: u32, s: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2026, 3, 1, h, m, s).unwrap()
    }

    #[test]
    fn never_spun_is_allowed() {
        assert!(check(None, at(12, 0, 0), hour()).is_ok());
    }

    #[test]
    fn inside_window_is_rejected_with_floor_minutes() {
        // 20m30s elapsed -> 39m30s remaining -> reported as 39.
        let result = check(Some(at(12, 0, 0)), at(12, 20, 30), hour());
        assert_matches!(result, Err(CooldownActive { remaining_minutes: 39, .. }));
    }

    #[test]
    fn rejection_reports_absolute_next_instant() {
        let err = check(Some(at(12, 0, 0)), at(12, 59, 59), hour()).unwrap_err();
        assert_eq!(err.next_spin_available, at(13, 0, 0));
        assert_eq!(err.remaining_minutes, 0);
    }

    #[test]
    fn exactly_at_boundary_is_allowed() {
        assert!(check(Some(at(12, 0, 0)), at(13, 0, 0), hour()).is_ok());
    }

    #[test]
    fn after_boundary_is_allowed() {
        assert!(check(Some(at(12, 0, 0)), at(14, 30, 0), hour()).is_ok());
    }

    #[test]
    fn last_spin_in_the_future_still_blocks() {
        let result = check(Some(at(12, 30, 0)), at(12, 0, 0), hour());
        assert_matches!(result, Err(CooldownActive { remaining_minutes: 90, .. }));
    }

    #[test]
    fn custom_window_is_honoured() {
        let window = Duration::minutes(5);
        assert!(check(Some(at(12, 0, 0)), at(12, 4, 0), window).is_err());
        assert!(check(Some(at(12, 0, 0)), at(12, 5, 0), window).is_ok());
    }

    #[test]
    fn next_available_adds_window() {
        assert_eq!(next_available(at(8, 15, 0), hour()), at(9, 15, 0));
    }
}
