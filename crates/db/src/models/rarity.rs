//! Rarity tier model.

use gacha_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `rarities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rarity {
    pub id: DbId,
    pub name: String,
    pub color: String,
    /// Relative drop weight in `[0, 1]`.
    pub chance: f64,
    #[serde(skip)]
    pub created_at: Timestamp,
}

/// DTO for creating a rarity. Values are validated by the handler.
#[derive(Debug)]
pub struct CreateRarity {
    pub name: String,
    pub color: String,
    pub chance: f64,
}
