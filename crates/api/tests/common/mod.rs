#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use gacha_api::auth::jwt::{generate_access_token, JwtConfig};
use gacha_api::auth::password::hash_password;
use gacha_api::config::ServerConfig;
use gacha_api::engine::spin::SpinConfig;
use gacha_api::router::build_app_router;
use gacha_api::state::AppState;
use gacha_core::types::DbId;
use gacha_db::models::character::CreateCharacter;
use gacha_db::models::rarity::CreateRarity;
use gacha_db::models::user::{CreateUser, User};
use gacha_db::repositories::{CharacterRepo, RarityRepo, UserRepo};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// Password given to every user created by [`create_user`].
pub const TEST_PASSWORD: &str = "test_password_123";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            token_expiry_days: 7,
        },
        spin: SpinConfig::default(),
    }
}

/// Build the full application router (same middleware stack as `main.rs`)
/// over the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert a user directly, with [`TEST_PASSWORD`].
pub async fn create_user(pool: &PgPool, username: &str, is_admin: bool) -> User {
    let password_hash = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            password_hash,
            is_admin,
        },
    )
    .await
    .expect("user creation should succeed")
}

/// Sign a token for `user` with the test JWT secret.
pub fn token_for(user: &User) -> String {
    generate_access_token(user.id, &user.username, user.is_admin, &test_config().jwt)
        .expect("token generation should succeed")
}

/// Insert a rarity and return its id.
pub async fn create_rarity(pool: &PgPool, name: &str, chance: f64) -> DbId {
    RarityRepo::create(
        pool,
        &CreateRarity {
            name: name.to_string(),
            color: "#9CA3AF".to_string(),
            chance,
        },
    )
    .await
    .expect("rarity creation should succeed")
    .id
}

/// Insert a permanent, active character and return its id.
pub async fn create_character(pool: &PgPool, name: &str, rarity_id: DbId) -> DbId {
    CharacterRepo::create(
        pool,
        &CreateCharacter {
            name: name.to_string(),
            description: String::new(),
            image_url: String::new(),
            rarity_id,
            is_limited: false,
            limited_until: None,
            created_by: None,
        },
    )
    .await
    .expect("character creation should succeed")
    .id
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("router is infallible")
}

fn json_request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("request should build")
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request should build");
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, json_request(Method::POST, uri, None, body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, json_request(Method::POST, uri, Some(token), body)).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(app, json_request(Method::PATCH, uri, Some(token), body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
