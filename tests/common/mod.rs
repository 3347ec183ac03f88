// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for integration tests: a Strava client pointed at a
//! wiremock server plus JSON payload builders.

#![allow(dead_code)]

use serde_json::{json, Value};
use strava_weekly::services::{ActivityAggregator, StravaClient, TokenStore};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Client whose API and OAuth endpoints both point at the mock server.
pub fn mock_client(server: &MockServer) -> StravaClient {
    StravaClient::new(
        "client_id".to_string(),
        "client_secret".to_string(),
        "http://localhost:8080/callback".to_string(),
    )
    .with_base_urls(server.uri(), server.uri())
}

/// Token store and aggregator wired against the mock server.
pub fn mock_services(server: &MockServer) -> (TokenStore, ActivityAggregator) {
    let client = mock_client(server);
    let tokens = TokenStore::new(client.clone());
    let aggregator = ActivityAggregator::new(client, tokens.clone());
    (tokens, aggregator)
}

/// OAuth token response body.
pub fn token_body(access_token: &str, refresh_token: &str, expires_at: i64) -> Value {
    json!({
        "access_token": access_token,
        "refresh_token": refresh_token,
        "expires_at": expires_at,
    })
}

/// Mount an authorization-code exchange returning the given tokens, and
/// perform the exchange so the store is authenticated.
pub async fn authenticate(server: &MockServer, tokens: &TokenStore, expires_at: i64) {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_string_contains("grant_type=authorization_code"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(token_body("access_1", "refresh_1", expires_at)),
        )
        .expect(1)
        .mount(server)
        .await;

    tokens
        .exchange_code("test_code")
        .await
        .expect("code exchange against mock server should succeed");
}

/// One raw activity as the Strava listing endpoint returns it.
pub fn activity_json(id: u64, start_date: &str, distance_meters: f64) -> Value {
    json!({
        "id": id,
        "name": format!("Activity {}", id),
        "type": "Run",
        "distance": distance_meters,
        "moving_time": 1800,
        "start_date": start_date,
        "device_name": "Garmin Forerunner 245",
        "kudos_count": 2,
        "comment_count": 0,
        "average_speed": 3.0,
        "total_elevation_gain": 12.5,
    })
}

/// A page of `count` activities, all dated `start_date`, 1000 m each.
pub fn activity_page(count: usize, first_id: u64, start_date: &str) -> Value {
    let activities: Vec<Value> = (0..count)
        .map(|i| activity_json(first_id + i as u64, start_date, 1000.0))
        .collect();
    Value::Array(activities)
}

/// Epoch seconds one hour from now.
pub fn future_expiry() -> i64 {
    chrono::Utc::now().timestamp() + 3600
}

/// Epoch seconds well in the past.
pub fn past_expiry() -> i64 {
    chrono::Utc::now().timestamp() - 3600
}

/// Current instant as an ISO 8601 start date.
pub fn start_date_now() -> String {
    chrono::Utc::now().to_rfc3339()
}
