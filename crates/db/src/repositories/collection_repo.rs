//! Repository for the append-only `user_characters` ownership records.

use gacha_core::types::{DbId, Timestamp};
use sqlx::{PgConnection, PgPool};

use crate::models::collection::OwnedCharacter;

/// Provides inserts and reads of ownership records. Records are never
/// updated or deleted here.
pub struct CollectionRepo;

impl CollectionRepo {
    /// Record that `user_id` obtained `character_id` at `obtained_at`.
    /// Returns the new record's id.
    pub async fn grant(
        conn: &mut PgConnection,
        user_id: DbId,
        character_id: DbId,
        obtained_at: Timestamp,
    ) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO user_characters (user_id, character_id, obtained_at)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(user_id)
        .bind(character_id)
        .bind(obtained_at)
        .fetch_one(conn)
        .await?;
        Ok(id)
    }

    /// List a user's ownership records, most recent first.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<OwnedCharacter>, sqlx::Error> {
        sqlx::query_as::<_, OwnedCharacter>(
            "SELECT uc.id AS ownership_id, uc.obtained_at, c.id AS character_id, c.name,
                    c.description, c.image_url, c.is_limited, c.limited_until,
                    r.name AS rarity_name, r.color AS rarity_color, r.chance AS rarity_chance
             FROM user_characters uc
             JOIN characters c ON c.id = uc.character_id
             JOIN rarities r ON r.id = c.rarity_id
             WHERE uc.user_id = $1
             ORDER BY uc.obtained_at DESC, uc.id DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Count a user's ownership records.
    pub async fn count_for_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM user_characters WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }
}
