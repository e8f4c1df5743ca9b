//! Repository for the `characters` table.

use gacha_core::types::{DbId, Timestamp};
use sqlx::{PgConnection, PgPool};

use crate::models::character::{CatalogCharacter, Character, CreateCharacter, SpinCandidate};

const COLUMNS: &str = "id, name, description, image_url, rarity_id, is_limited, \
                       limited_until, is_active, created_by, created_at";

/// Provides admin CRUD and spin candidate retrieval for characters.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character, returning the created row.
    ///
    /// `limited_until` is dropped unless `is_limited` is set.
    pub async fn create(pool: &PgPool, input: &CreateCharacter) -> Result<Character, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters
                (name, description, image_url, rarity_id, is_limited, limited_until, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let limited_until = input.limited_until.filter(|_| input.is_limited);
        sqlx::query_as::<_, Character>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(input.rarity_id)
            .bind(input.is_limited)
            .bind(limited_until)
            .bind(input.created_by)
            .fetch_one(pool)
            .await
    }

    /// Find a character by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Toggle whether a character can be drawn. Returns `true` if a row changed.
    pub async fn set_active(pool: &PgPool, id: DbId, is_active: bool) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE characters SET is_active = $2 WHERE id = $1")
            .bind(id)
            .bind(is_active)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List every character with its rarity, newest first.
    pub async fn list_catalog(pool: &PgPool) -> Result<Vec<CatalogCharacter>, sqlx::Error> {
        sqlx::query_as::<_, CatalogCharacter>(
            "SELECT c.id, c.name, c.description, c.image_url, c.is_limited, c.limited_until,
                    c.is_active, r.name AS rarity_name, r.color AS rarity_color,
                    r.chance AS rarity_chance
             FROM characters c
             JOIN rarities r ON r.id = c.rarity_id
             ORDER BY c.created_at DESC, c.id DESC",
        )
        .fetch_all(pool)
        .await
    }

    /// Fetch every character a spin at `now` may award.
    ///
    /// Eligible means active and either permanent or limited with an end
    /// date still in the future. Rows come back in the fixed draw order:
    /// descending rarity chance, then ascending id.
    pub async fn list_spin_candidates(
        conn: &mut PgConnection,
        now: Timestamp,
    ) -> Result<Vec<SpinCandidate>, sqlx::Error> {
        sqlx::query_as::<_, SpinCandidate>(
            "SELECT c.id, c.name, c.description, c.image_url, c.is_limited, c.limited_until,
                    r.name AS rarity_name, r.color AS rarity_color, r.chance AS rarity_chance
             FROM characters c
             JOIN rarities r ON r.id = c.rarity_id
             WHERE c.is_active = true
               AND (c.is_limited = false OR c.limited_until > $1)
             ORDER BY r.chance DESC, c.id ASC",
        )
        .bind(now)
        .fetch_all(conn)
        .await
    }
}
