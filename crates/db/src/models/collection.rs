//! Ownership records joined with the owned character.

use gacha_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// One row of a user's collection: a `user_characters` record with its
/// character and rarity.
#[derive(Debug, Clone, FromRow)]
pub struct OwnedCharacter {
    pub ownership_id: DbId,
    pub obtained_at: Timestamp,
    pub character_id: DbId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub is_limited: bool,
    pub limited_until: Option<Timestamp>,
    pub rarity_name: String,
    pub rarity_color: String,
    pub rarity_chance: f64,
}
