//! The spin engine.
//!
//! One call to [`attempt_spin`] is one database transaction:
//!
//! 1. Lock the user's row and read `last_spin` / `total_spins`.
//! 2. Reject if the cooldown window is still open.
//! 3. Load the eligible characters in draw order.
//! 4. Draw one with the caller's random source.
//! 5. Grant it, stamp the user's spin state, advance the daily spin quests.
//! 6. Commit.
//!
//! Any early return drops the transaction, which rolls it back, so a failed
//! attempt never leaves partial writes behind. The row lock in step 1
//! serializes concurrent attempts for the same user: the second one only
//! reads `last_spin` after the first has committed, and is rejected.

use chrono::Duration;
use gacha_core::cooldown::{self, CooldownActive, DEFAULT_COOLDOWN_MINS};
use gacha_core::draw;
use gacha_core::quests::QUEST_TYPE_DAILY_SPINS;
use gacha_core::types::{DbId, Timestamp};
use gacha_db::models::character::SpinCandidate;
use gacha_db::repositories::{CharacterRepo, CollectionRepo, QuestRepo, UserRepo};
use gacha_db::DbPool;
use rand::Rng;

/// Spin engine configuration.
#[derive(Debug, Clone)]
pub struct SpinConfig {
    /// Minutes a user must wait between successful spins (default: 60).
    pub cooldown_mins: i64,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            cooldown_mins: DEFAULT_COOLDOWN_MINS,
        }
    }
}

impl SpinConfig {
    /// Load spin configuration from environment variables.
    ///
    /// | Env Var              | Default |
    /// |----------------------|---------|
    /// | `SPIN_COOLDOWN_MINS` | `60`    |
    pub fn from_env() -> Self {
        let cooldown_mins: i64 = std::env::var("SPIN_COOLDOWN_MINS")
            .unwrap_or_else(|_| DEFAULT_COOLDOWN_MINS.to_string())
            .parse()
            .expect("SPIN_COOLDOWN_MINS must be a valid i64");
        assert!(cooldown_mins >= 0, "SPIN_COOLDOWN_MINS must not be negative");

        Self { cooldown_mins }
    }

    /// The cooldown window as a duration.
    pub fn cooldown(&self) -> Duration {
        Duration::minutes(self.cooldown_mins)
    }
}

/// Why a spin attempt did not produce a character.
#[derive(Debug, thiserror::Error)]
pub enum SpinError {
    /// The user spun less than one cooldown window ago. Nothing was written.
    #[error(transparent)]
    Cooldown(#[from] CooldownActive),

    /// No active, unexpired character exists. Nothing was written.
    #[error("No characters available for spinning")]
    NoEligibleCandidates,

    /// The authenticated user id has no `users` row.
    #[error("User {0} not found")]
    PrincipalNotFound(DbId),

    /// Any database failure; the transaction was rolled back.
    #[error("Storage failure: {0}")]
    Storage(#[from] sqlx::Error),
}

/// Result of a successful spin.
#[derive(Debug, Clone)]
pub struct SpinOutcome {
    /// The character awarded, with its rarity.
    pub character: SpinCandidate,
    /// Id of the inserted `user_characters` record.
    pub ownership_id: DbId,
    /// The user's spin count after this spin.
    pub total_spins: i32,
    /// When the user may spin again.
    pub next_spin_available: Timestamp,
    /// Number of quest progress rows inserted or incremented.
    pub quests_advanced: u64,
}

/// Run one spin for `user_id` at instant `now`, drawing with `rng`.
///
/// `now` also decides limited-character eligibility and the quest date (its
/// UTC calendar day).
pub async fn attempt_spin<R: Rng + ?Sized>(
    pool: &DbPool,
    config: &SpinConfig,
    user_id: DbId,
    now: Timestamp,
    rng: &mut R,
) -> Result<SpinOutcome, SpinError> {
    let mut tx = pool.begin().await?;

    let state = UserRepo::lock_spin_state(&mut *tx, user_id)
        .await?
        .ok_or(SpinError::PrincipalNotFound(user_id))?;

    cooldown::check(state.last_spin, now, config.cooldown())?;

    let candidates = CharacterRepo::list_spin_candidates(&mut *tx, now).await?;
    let character = draw::draw(&candidates, rng)
        .cloned()
        .ok_or(SpinError::NoEligibleCandidates)?;

    let ownership_id = CollectionRepo::grant(&mut *tx, user_id, character.id, now).await?;
    let total_spins = UserRepo::record_spin(&mut *tx, user_id, now).await?;
    let quests_advanced =
        QuestRepo::advance(&mut *tx, user_id, QUEST_TYPE_DAILY_SPINS, now.date_naive()).await?;

    tx.commit().await?;

    tracing::info!(
        user_id,
        character_id = character.id,
        rarity = %character.rarity_name,
        candidates = candidates.len(),
        total_spins,
        "Spin granted character",
    );

    Ok(SpinOutcome {
        character,
        ownership_id,
        total_spins,
        next_spin_available: cooldown::next_available(now, config.cooldown()),
        quests_advanced,
    })
}
