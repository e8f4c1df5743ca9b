//! Handlers for the `/auth` resource (register, login, me).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use gacha_core::accounts::{normalize_username, validate_password};
use gacha_core::cooldown;
use gacha_core::error::CoreError;
use gacha_core::types::{DbId, Timestamp};
use gacha_db::models::user::{CreateUser, User};
use gacha_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register` and `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// Successful authentication response returned by register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
    pub message: String,
}

/// Public user info embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub username: String,
    pub is_admin: bool,
}

/// The authenticated user's profile and spin state.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: DbId,
    pub username: String,
    pub is_admin: bool,
    pub total_spins: i32,
    pub last_spin: Option<Timestamp>,
    /// `None` when the user may spin right now.
    pub next_spin_available: Option<Timestamp>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create a regular (non-admin) account and return a token for it.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<(StatusCode, Json<AuthResponse>)> {
    let username = normalize_username(&input.username)?;
    validate_password(&input.password)?;

    if UserRepo::find_by_username(&state.pool, &username)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Username already exists".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    // A concurrent registration of the same name still fails on
    // `uq_users_username`, which maps to 409.
    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            username,
            password_hash,
            is_admin: false,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered");

    let response = create_auth_response(&state, &user, "Successfully registered")?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/auth/login
///
/// Authenticate with username + password and return a token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<CredentialsRequest>,
) -> AppResult<Json<AuthResponse>> {
    let username = input.username.trim();
    if username.is_empty() || input.password.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Username and password required".into(),
        )));
    }

    let user = UserRepo::find_by_username(&state.pool, username)
        .await?
        .ok_or_else(invalid_credentials)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::debug!(user_id = user.id, "Login rejected: wrong password");
        return Err(invalid_credentials());
    }

    let response = create_auth_response(&state, &user, "Successfully logged in")?;
    Ok(Json(response))
}

/// GET /api/v1/auth/me
///
/// Return the authenticated user's profile and spin state.
pub async fn me(
    RequireAuth(auth): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<ProfileResponse>>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;

    let next_spin_available = cooldown::check(
        user.last_spin,
        chrono::Utc::now(),
        state.config.spin.cooldown(),
    )
    .err()
    .map(|active| active.next_spin_available);

    Ok(Json(DataResponse {
        data: ProfileResponse {
            id: user.id,
            username: user.username,
            is_admin: user.is_admin,
            total_spins: user.total_spins,
            last_spin: user.last_spin,
            next_spin_available,
        },
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized("Invalid credentials".into()))
}

/// Sign a token for `user` and build the response body.
fn create_auth_response(state: &AppState, user: &User, message: &str) -> AppResult<AuthResponse> {
    let token = generate_access_token(user.id, &user.username, user.is_admin, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(AuthResponse {
        token,
        expires_in: state.config.jwt.expires_in_secs(),
        user: UserInfo {
            id: user.id,
            username: user.username.clone(),
            is_admin: user.is_admin,
        },
        message: message.to_string(),
    })
}
