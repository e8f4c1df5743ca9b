//! Handlers for the `/admin` resource: catalog listing and authoring.
//!
//! Every handler requires [`RequireAdmin`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use gacha_core::catalog::{normalize_name, parse_limited_until, validate_chance, validate_color};
use gacha_core::error::CoreError;
use gacha_core::types::{DbId, Timestamp};
use gacha_db::models::character::{CatalogCharacter, CreateCharacter};
use gacha_db::models::rarity::{CreateRarity, Rarity};
use gacha_db::repositories::{CharacterRepo, RarityRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Rarity fields shown next to a catalog character.
#[derive(Debug, Serialize)]
pub struct CatalogRarity {
    pub name: String,
    pub color: String,
}

/// One character in the admin catalog.
#[derive(Debug, Serialize)]
pub struct CatalogCharacterView {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub is_limited: bool,
    pub limited_until: Option<Timestamp>,
    pub is_active: bool,
    /// Whether a spin right now could award this character.
    pub spin_eligible: bool,
    pub rarity: CatalogRarity,
}

impl CatalogCharacterView {
    fn new(c: CatalogCharacter, now: Timestamp) -> Self {
        let spin_eligible = c.is_spin_eligible(now);
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            image_url: c.image_url,
            is_limited: c.is_limited,
            limited_until: c.limited_until,
            is_active: c.is_active,
            spin_eligible,
            rarity: CatalogRarity {
                name: c.rarity_name,
                color: c.rarity_color,
            },
        }
    }
}

/// Response body for `GET /admin/catalog`.
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub characters: Vec<CatalogCharacterView>,
    pub rarities: Vec<Rarity>,
}

/// Request body for `POST /admin/characters`.
#[derive(Debug, Deserialize)]
pub struct CreateCharacterRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub rarity_id: DbId,
    #[serde(default)]
    pub is_limited: bool,
    /// ISO 8601 date-time; required when `is_limited` is set.
    #[serde(default)]
    pub limited_until: Option<String>,
}

/// Response body for `POST /admin/characters`.
#[derive(Debug, Serialize)]
pub struct CreateCharacterResponse {
    pub success: bool,
    pub character_id: DbId,
    pub message: String,
}

/// Request body for `POST /admin/rarities`.
#[derive(Debug, Deserialize)]
pub struct CreateRarityRequest {
    pub name: String,
    pub color: String,
    pub chance: f64,
}

/// Response body for `POST /admin/rarities`.
#[derive(Debug, Serialize)]
pub struct CreateRarityResponse {
    pub success: bool,
    pub rarity_id: DbId,
    pub message: String,
}

/// Request body for `PATCH /admin/characters/{id}`.
#[derive(Debug, Deserialize)]
pub struct SetActiveRequest {
    pub is_active: bool,
}

/// Response body for `PATCH /admin/characters/{id}`.
#[derive(Debug, Serialize)]
pub struct SetActiveResponse {
    pub success: bool,
    pub character_id: DbId,
    pub is_active: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/admin/catalog
pub async fn get_catalog(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<CatalogResponse>> {
    let now = chrono::Utc::now();
    let characters = CharacterRepo::list_catalog(&state.pool)
        .await?
        .into_iter()
        .map(|c| CatalogCharacterView::new(c, now))
        .collect();
    let rarities = RarityRepo::list(&state.pool).await?;

    Ok(Json(CatalogResponse {
        characters,
        rarities,
    }))
}

/// POST /api/v1/admin/characters
pub async fn create_character(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateCharacterRequest>,
) -> AppResult<(StatusCode, Json<CreateCharacterResponse>)> {
    let name = normalize_name(&input.name, "Name")?;

    let limited_until = match (input.is_limited, input.limited_until.as_deref()) {
        (false, _) => None,
        (true, Some(raw)) if !raw.trim().is_empty() => Some(parse_limited_until(raw)?),
        (true, _) => {
            return Err(AppError::Core(CoreError::Validation(
                "limited_until is required for limited characters".into(),
            )))
        }
    };

    if RarityRepo::find_by_id(&state.pool, input.rarity_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Rarity",
            id: input.rarity_id,
        }));
    }

    let character = CharacterRepo::create(
        &state.pool,
        &CreateCharacter {
            name,
            description: input.description.unwrap_or_default().trim().to_string(),
            image_url: input.image_url.unwrap_or_default().trim().to_string(),
            rarity_id: input.rarity_id,
            is_limited: input.is_limited,
            limited_until,
            created_by: Some(admin.user_id),
        },
    )
    .await?;

    tracing::info!(
        character_id = character.id,
        rarity_id = character.rarity_id,
        is_limited = character.is_limited,
        admin_id = admin.user_id,
        "Character created",
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateCharacterResponse {
            success: true,
            character_id: character.id,
            message: "Character added successfully".to_string(),
        }),
    ))
}

/// PATCH /api/v1/admin/characters/{id}
///
/// Retire a character from (or return it to) the spin pool. Characters are
/// never deleted so existing collections keep resolving.
pub async fn set_character_active(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetActiveRequest>,
) -> AppResult<Json<SetActiveResponse>> {
    let updated = CharacterRepo::set_active(&state.pool, id, input.is_active).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Character",
            id,
        }));
    }

    tracing::info!(
        character_id = id,
        is_active = input.is_active,
        admin_id = admin.user_id,
        "Character availability changed",
    );

    Ok(Json(SetActiveResponse {
        success: true,
        character_id: id,
        is_active: input.is_active,
    }))
}

/// POST /api/v1/admin/rarities
pub async fn create_rarity(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateRarityRequest>,
) -> AppResult<(StatusCode, Json<CreateRarityResponse>)> {
    let name = normalize_name(&input.name, "Name")?;
    let color = input.color.trim().to_string();
    validate_color(&color)?;
    validate_chance(input.chance)?;

    let rarity = RarityRepo::create(
        &state.pool,
        &CreateRarity {
            name,
            color,
            chance: input.chance,
        },
    )
    .await?;

    tracing::info!(
        rarity_id = rarity.id,
        chance = rarity.chance,
        admin_id = admin.user_id,
        "Rarity created",
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateRarityResponse {
            success: true,
            rarity_id: rarity.id,
            message: "Rarity added successfully".to_string(),
        }),
    ))
}
