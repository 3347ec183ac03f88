// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity listing and stats routes.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::Result;
use crate::models::{ActivityRecord, WeeklyStatsResult};
use crate::AppState;

/// Strava rejects anything larger.
const MAX_PER_PAGE: u32 = 200;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/activities", get(get_activities))
        .route("/stats/weekly", get(get_weekly_stats))
        .route("/health", get(health_check))
}

// ─── Activities ──────────────────────────────────────────────

#[derive(Deserialize)]
struct ActivitiesQuery {
    /// Pagination: items per page
    #[serde(default = "default_per_page")]
    per_page: u32,
    /// Pagination: page number (1-indexed)
    #[serde(default = "default_page")]
    page: u32,
}

fn default_per_page() -> u32 {
    10
}
fn default_page() -> u32 {
    1
}

#[derive(Serialize)]
pub struct ActivitiesResponse {
    pub activities: Vec<ActivityRecord>,
    pub count: usize,
    pub page: u32,
    pub per_page: u32,
}

/// Get one page of the athlete's activities, most recent first.
async fn get_activities(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ActivitiesQuery>,
) -> Result<Json<ActivitiesResponse>> {
    if params.page < 1 {
        return Err(crate::error::AppError::BadRequest(
            "page must be greater than 0".to_string(),
        ));
    }
    let per_page = params.per_page.min(MAX_PER_PAGE);

    tracing::debug!(page = params.page, per_page, "Fetching activities");

    let activities = state.aggregator.list_activities(per_page, params.page).await?;

    Ok(Json(ActivitiesResponse {
        count: activities.len(),
        activities,
        page: params.page,
        per_page,
    }))
}

// ─── Weekly Stats ────────────────────────────────────────────

#[derive(Deserialize)]
struct WeeklyStatsQuery {
    /// Number of weeks to aggregate, including the current one
    #[serde(default = "default_weeks")]
    weeks: u32,
}

fn default_weeks() -> u32 {
    12
}

/// Get weekly distance/activity-count stats.
async fn get_weekly_stats(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WeeklyStatsQuery>,
) -> Result<Json<WeeklyStatsResult>> {
    tracing::debug!(weeks = params.weeks, "Computing weekly stats");

    let stats = state.aggregator.weekly_stats(params.weeks).await?;
    Ok(Json(stats))
}

// ─── Health ──────────────────────────────────────────────────

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub authenticated: bool,
    pub service: String,
}

/// Health check response
async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        authenticated: state.tokens.is_authenticated().await,
        service: "strava-weekly".to_string(),
    })
}
