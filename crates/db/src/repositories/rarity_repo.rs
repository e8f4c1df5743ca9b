//! Repository for the `rarities` table.

use gacha_core::types::DbId;
use sqlx::PgPool;

use crate::models::rarity::{CreateRarity, Rarity};

const COLUMNS: &str = "id, name, color, chance, created_at";

/// Provides create and list operations for rarity tiers.
pub struct RarityRepo;

impl RarityRepo {
    /// Insert a new rarity, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateRarity) -> Result<Rarity, sqlx::Error> {
        let query = format!(
            "INSERT INTO rarities (name, color, chance)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Rarity>(&query)
            .bind(&input.name)
            .bind(&input.color)
            .bind(input.chance)
            .fetch_one(pool)
            .await
    }

    /// Find a rarity by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Rarity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rarities WHERE id = $1");
        sqlx::query_as::<_, Rarity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all rarities, most common first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Rarity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rarities ORDER BY chance DESC, id ASC");
        sqlx::query_as::<_, Rarity>(&query).fetch_all(pool).await
    }
}
