//! Route definitions for the `/admin` resource.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`. All require an admin token.
///
/// ```text
/// GET   /catalog          -> get_catalog
/// POST  /characters       -> create_character
/// PATCH /characters/{id}  -> set_character_active
/// POST  /rarities         -> create_rarity
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(admin::get_catalog))
        .route("/characters", post(admin::create_character))
        .route("/characters/{id}", patch(admin::set_character_active))
        .route("/rarities", post(admin::create_rarity))
}
