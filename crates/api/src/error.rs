use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gacha_core::error::CoreError;
use serde_json::json;

use crate::engine::spin::SpinError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`SpinError`] for spin outcomes,
/// and adds HTTP-specific variants. Implements [`IntoResponse`] to produce
/// consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `gacha_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A rejected or failed spin attempt.
    #[error(transparent)]
    Spin(#[from] SpinError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
                CoreError::Internal(msg) => internal(msg),
            },

            // --- Spin outcomes ---
            AppError::Spin(spin) => match spin {
                SpinError::Cooldown(cooldown) => {
                    tracing::debug!(
                        remaining_minutes = cooldown.remaining_minutes,
                        next_spin_available = %cooldown.next_spin_available,
                        "Spin rejected by cooldown",
                    );
                    (
                        StatusCode::TOO_MANY_REQUESTS,
                        "COOLDOWN_ACTIVE",
                        "Spin cooldown active".to_string(),
                    )
                }
                SpinError::NoEligibleCandidates => (
                    StatusCode::NOT_FOUND,
                    "NO_ELIGIBLE_CANDIDATES",
                    spin.to_string(),
                ),
                SpinError::PrincipalNotFound(user_id) => {
                    tracing::error!(user_id, "Authenticated user has no users row");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
                SpinError::Storage(err) => classify_sqlx_error(err),
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::InternalError(msg) => internal(msg),
        };

        let mut body = json!({
            "error": message,
            "code": code,
        });

        // The cooldown rejection carries the retry information clients need.
        if let AppError::Spin(SpinError::Cooldown(cooldown)) = &self {
            body["remaining_minutes"] = json!(cooldown.remaining_minutes);
            body["next_spin_available"] = json!(cooldown.next_spin_available);
        }

        (status, axum::Json(body)).into_response()
    }
}

/// Log an internal fault and produce the sanitized 500 triple.
fn internal(msg: &str) -> (StatusCode, &'static str, String) {
    tracing::error!(error = %msg, "Internal error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;
    use chrono::{TimeZone, Utc};
    use gacha_core::cooldown::CooldownActive;

    use super::*;

    async fn render(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn cooldown_maps_to_429_with_retry_fields() {
        let next = Utc.with_ymd_and_hms(2026, 3, 1, 13, 0, 0).unwrap();
        let err = AppError::Spin(SpinError::Cooldown(CooldownActive {
            remaining_minutes: 12,
            next_spin_available: next,
        }));

        let (status, json) = render(err).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(json["code"], "COOLDOWN_ACTIVE");
        assert_eq!(json["remaining_minutes"], 12);
        assert_eq!(json["next_spin_available"], "2026-03-01T13:00:00Z");
    }

    #[tokio::test]
    async fn no_candidates_maps_to_404() {
        let (status, json) = render(AppError::Spin(SpinError::NoEligibleCandidates)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["code"], "NO_ELIGIBLE_CANDIDATES");
        assert_eq!(json["error"], "No characters available for spinning");
    }

    #[tokio::test]
    async fn missing_principal_is_a_generic_500() {
        let (status, json) = render(AppError::Spin(SpinError::PrincipalNotFound(7))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "An internal error occurred");
    }

    #[tokio::test]
    async fn validation_maps_to_400() {
        let err = AppError::Core(CoreError::Validation("Chance out of range".into()));
        let (status, json) = render(err).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["error"], "Chance out of range");
    }

    #[tokio::test]
    async fn row_not_found_maps_to_404() {
        let (status, _) = render(AppError::Database(sqlx::Error::RowNotFound)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
