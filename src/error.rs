// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not authenticated with Strava")]
    NotAuthenticated,

    #[error("Token exchange failed: {0}")]
    AuthExchange(String),

    #[error("Token refresh failed: {0}")]
    TokenRefresh(String),

    #[error("Strava API error: {0}")]
    Upstream(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::NotAuthenticated => (
                StatusCode::UNAUTHORIZED,
                "not_authenticated",
                Some("Not authenticated. Visit /auth to start authentication.".to_string()),
            ),
            AppError::AuthExchange(msg) => (
                StatusCode::BAD_GATEWAY,
                "auth_exchange_error",
                Some(msg.clone()),
            ),
            AppError::TokenRefresh(msg) => (
                StatusCode::BAD_GATEWAY,
                "token_refresh_error",
                Some(msg.clone()),
            ),
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, "strava_error", Some(msg.clone())),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", Some(msg.clone()))
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", None)
            }
        };

        let body = ErrorResponse {
            error: error.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
