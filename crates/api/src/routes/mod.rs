pub mod admin;
pub mod auth;
pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                  register (public)
/// /auth/login                     login (public)
/// /auth/me                        current profile (requires auth)
///
/// /spin                           spin once (requires auth)
/// /collection                     owned characters (requires auth)
/// /quests                         today's quest progress (requires auth)
///
/// /admin/catalog                  characters + rarities (admin only)
/// /admin/characters               create character
/// /admin/characters/{id}          toggle spin availability (PATCH)
/// /admin/rarities                 create rarity
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .route("/spin", post(handlers::spin::spin))
        .route("/collection", get(handlers::collection::list_collection))
        .route("/quests", get(handlers::collection::list_quests))
        .nest("/admin", admin::router())
}
