//! Character (gacha item) models.

use gacha_core::draw::{self, Weighted};
use gacha_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `characters` table.
#[derive(Debug, Clone, FromRow)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub rarity_id: DbId,
    pub is_limited: bool,
    pub limited_until: Option<Timestamp>,
    pub is_active: bool,
    pub created_by: Option<DbId>,
    pub created_at: Timestamp,
}

/// A character joined with its rarity, as listed in the admin catalog.
#[derive(Debug, Clone, FromRow)]
pub struct CatalogCharacter {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub is_limited: bool,
    pub limited_until: Option<Timestamp>,
    pub is_active: bool,
    pub rarity_name: String,
    pub rarity_color: String,
    pub rarity_chance: f64,
}

impl CatalogCharacter {
    /// Whether a spin at `now` could currently award this character.
    pub fn is_spin_eligible(&self, now: Timestamp) -> bool {
        draw::is_eligible(self.is_active, self.is_limited, self.limited_until, now)
    }
}

/// An eligible spin candidate: a character plus the rarity fields the draw
/// and the spin response need.
#[derive(Debug, Clone, FromRow)]
pub struct SpinCandidate {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub is_limited: bool,
    pub limited_until: Option<Timestamp>,
    pub rarity_name: String,
    pub rarity_color: String,
    pub rarity_chance: f64,
}

impl Weighted for SpinCandidate {
    fn weight(&self) -> f64 {
        self.rarity_chance
    }
}

/// DTO for creating a character. `limited_until` is only stored when
/// `is_limited` is set.
#[derive(Debug)]
pub struct CreateCharacter {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub rarity_id: DbId,
    pub is_limited: bool,
    pub limited_until: Option<Timestamp>,
    pub created_by: Option<DbId>,
}
