//! Repository for the `users` table.

use gacha_core::types::{DbId, Timestamp};
use sqlx::{PgConnection, PgPool};

use crate::models::user::{CreateUser, SpinState, User};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, password_hash, is_admin, last_spin, total_spins, \
                       created_at, updated_at";

/// Provides user lookups plus the spin-state reads and writes used by the
/// spin engine.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// New users start with no `last_spin` and zero `total_spins`.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, password_hash, is_admin)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.password_hash)
            .bind(input.is_admin)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Read a user's spin state and hold a row lock on it until the
    /// surrounding transaction ends.
    ///
    /// Concurrent spin attempts for the same user block here, so the
    /// cooldown check always sees the previous attempt's committed write.
    pub async fn lock_spin_state(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<SpinState>, sqlx::Error> {
        sqlx::query_as::<_, SpinState>(
            "SELECT id, last_spin, total_spins FROM users WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(conn)
        .await
    }

    /// Stamp `last_spin` and increment `total_spins`, returning the new total.
    pub async fn record_spin(
        conn: &mut PgConnection,
        id: DbId,
        spun_at: Timestamp,
    ) -> Result<i32, sqlx::Error> {
        let (total_spins,): (i32,) = sqlx::query_as(
            "UPDATE users SET last_spin = $2, total_spins = total_spins + 1
             WHERE id = $1
             RETURNING total_spins",
        )
        .bind(id)
        .bind(spun_at)
        .fetch_one(conn)
        .await?;
        Ok(total_spins)
    }

    /// Overwrite a user's last spin instant. Used by tooling and tests to
    /// move a user in or out of the cooldown window.
    pub async fn set_last_spin(
        pool: &PgPool,
        id: DbId,
        last_spin: Option<Timestamp>,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET last_spin = $2 WHERE id = $1")
            .bind(id)
            .bind(last_spin)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
