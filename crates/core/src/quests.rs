//! Daily quest identifiers.
//!
//! These must match the `quest_type` values seeded in
//! `20260301000004_create_quests.sql`.

/// Quest advanced by one for every successful spin.
pub const QUEST_TYPE_DAILY_SPINS: &str = "daily_spins";
