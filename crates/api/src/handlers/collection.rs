//! Handlers for the authenticated user's collection and daily quests.

use axum::extract::State;
use axum::Json;
use gacha_core::types::{DbId, Timestamp};
use gacha_db::models::quest::QuestProgress;
use gacha_db::repositories::{CollectionRepo, QuestRepo};
use serde::Serialize;

use super::spin::CharacterView;
use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

/// One ownership record in the collection listing.
#[derive(Debug, Serialize)]
pub struct CollectionEntry {
    pub id: DbId,
    pub obtained_at: Timestamp,
    pub character: CharacterView,
}

/// GET /api/v1/collection
///
/// Every character the user has obtained, newest first. Duplicates are
/// listed once per spin.
pub async fn list_collection(
    RequireAuth(auth): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<CollectionEntry>>>> {
    let owned = CollectionRepo::list_for_user(&state.pool, auth.user_id).await?;

    let data = owned
        .into_iter()
        .map(|o| CollectionEntry {
            id: o.ownership_id,
            obtained_at: o.obtained_at,
            character: o.into(),
        })
        .collect();

    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/quests
///
/// Today's (UTC) active quests with the user's progress; quests the user
/// has not touched today report zero.
pub async fn list_quests(
    RequireAuth(auth): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<QuestProgress>>>> {
    let today = chrono::Utc::now().date_naive();
    let quests = QuestRepo::list_for_day(&state.pool, auth.user_id, today).await?;
    Ok(Json(DataResponse { data: quests }))
}
