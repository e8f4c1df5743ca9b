//! Handler for `POST /spin`.

use axum::extract::State;
use axum::Json;
use gacha_core::types::{DbId, Timestamp};
use gacha_db::models::character::SpinCandidate;
use gacha_db::models::collection::OwnedCharacter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::engine::spin::attempt_spin;
use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::state::AppState;

/// Rarity summary embedded in character payloads.
#[derive(Debug, Serialize)]
pub struct RarityView {
    pub name: String,
    pub color: String,
    pub chance: f64,
}

/// Character payload shared by the spin and collection responses.
#[derive(Debug, Serialize)]
pub struct CharacterView {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub is_limited: bool,
    pub limited_until: Option<Timestamp>,
    pub rarity: RarityView,
}

impl From<SpinCandidate> for CharacterView {
    fn from(c: SpinCandidate) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            image_url: c.image_url,
            is_limited: c.is_limited,
            limited_until: c.limited_until,
            rarity: RarityView {
                name: c.rarity_name,
                color: c.rarity_color,
                chance: c.rarity_chance,
            },
        }
    }
}

impl From<OwnedCharacter> for CharacterView {
    fn from(c: OwnedCharacter) -> Self {
        Self {
            id: c.character_id,
            name: c.name,
            description: c.description,
            image_url: c.image_url,
            is_limited: c.is_limited,
            limited_until: c.limited_until,
            rarity: RarityView {
                name: c.rarity_name,
                color: c.rarity_color,
                chance: c.rarity_chance,
            },
        }
    }
}

/// Response body for a successful spin.
#[derive(Debug, Serialize)]
pub struct SpinResponse {
    pub success: bool,
    pub character: CharacterView,
    pub total_spins: i32,
    pub next_spin_available: Timestamp,
}

/// POST /api/v1/spin
///
/// Run one spin for the authenticated user. Cooldown and empty-pool
/// rejections surface as 429 and 404 through [`AppError`](crate::error::AppError).
pub async fn spin(
    RequireAuth(auth): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<SpinResponse>> {
    // Seeded from the thread RNG so no `!Send` handle is held across awaits.
    let mut rng = StdRng::from_rng(&mut rand::rng());

    let outcome = attempt_spin(
        &state.pool,
        &state.config.spin,
        auth.user_id,
        chrono::Utc::now(),
        &mut rng,
    )
    .await?;

    Ok(Json(SpinResponse {
        success: true,
        character: outcome.character.into(),
        total_spins: outcome.total_spins,
        next_spin_available: outcome.next_spin_available,
    }))
}
