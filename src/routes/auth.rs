// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava OAuth authentication routes.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::Result;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth", get(auth_start))
        .route("/callback", get(auth_callback))
}

/// Response for starting the OAuth flow.
#[derive(Serialize)]
pub struct AuthStartResponse {
    pub message: String,
    pub auth_url: String,
}

/// Start OAuth flow - hand the caller the Strava authorization URL.
async fn auth_start(State(state): State<Arc<AppState>>) -> Json<AuthStartResponse> {
    let auth_url = state.strava.authorization_url();

    tracing::info!(
        client_id = %state.config.strava_client_id,
        "Starting OAuth flow"
    );

    Json(AuthStartResponse {
        message: "Visit this link to authenticate".to_string(),
        auth_url,
    })
}

#[derive(Deserialize)]
pub struct CallbackParams {
    code: String,
}

/// Response for a completed OAuth callback.
#[derive(Serialize)]
pub struct CallbackResponse {
    pub status: String,
    pub message: String,
}

/// OAuth callback - exchange the authorization code for tokens.
async fn auth_callback(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CallbackParams>,
) -> Result<Json<CallbackResponse>> {
    tracing::info!("Exchanging authorization code for tokens");

    state.tokens.exchange_code(&params.code).await?;

    Ok(Json(CallbackResponse {
        status: "success".to_string(),
        message: "Authentication successful. You can now fetch activities.".to_string(),
    }))
}
