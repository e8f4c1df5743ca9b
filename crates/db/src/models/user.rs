//! User entity model and DTOs.

use gacha_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
    pub last_spin: Option<Timestamp>,
    pub total_spins: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The spin-relevant slice of a user row, read under a row lock.
#[derive(Debug, Clone, Copy, FromRow, Serialize)]
pub struct SpinState {
    pub id: DbId,
    pub last_spin: Option<Timestamp>,
    pub total_spins: i32,
}

/// DTO for creating a new user.
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: String,
    pub is_admin: bool,
}
