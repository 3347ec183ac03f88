// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava API client for OAuth token grants and activity listing.

use crate::error::AppError;
use crate::models::RawActivity;
use serde::Deserialize;
use std::time::Duration;

/// Request timeout for all Strava calls.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Token response from the Strava OAuth endpoint.
///
/// Both the authorization-code exchange and the refresh grant return this
/// shape; `expires_at` is epoch seconds.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: i64,
}

/// Strava API client.
#[derive(Clone)]
pub struct StravaClient {
    http: reqwest::Client,
    api_base: String,
    oauth_base: String,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
}

impl StravaClient {
    /// Create a new Strava client with OAuth credentials.
    pub fn new(client_id: String, client_secret: String, redirect_uri: String) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("failed to build HTTP client"),
            api_base: "https://www.strava.com/api/v3".to_string(),
            oauth_base: "https://www.strava.com".to_string(),
            client_id,
            client_secret,
            redirect_uri,
        }
    }

    /// Override the API and OAuth base URLs (used by tests to point at a
    /// local mock server).
    pub fn with_base_urls(
        mut self,
        api_base: impl Into<String>,
        oauth_base: impl Into<String>,
    ) -> Self {
        self.api_base = api_base.into();
        self.oauth_base = oauth_base.into();
        self
    }

    /// Build the authorization redirect URL. No network call.
    pub fn authorization_url(&self) -> String {
        format!(
            "{}/oauth/authorize?client_id={}&redirect_uri={}&response_type=code&scope=activity:read_all",
            self.oauth_base,
            self.client_id,
            urlencoding::encode(&self.redirect_uri),
        )
    }

    /// Exchange an authorization code for tokens.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenResponse, AppError> {
        let response = self
            .http
            .post(format!("{}/oauth/token", self.oauth_base))
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("code", code),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await
            .map_err(|e| AppError::AuthExchange(format!("Token exchange request failed: {}", e)))?;

        Self::parse_json(response, AppError::AuthExchange).await
    }

    /// Refresh an expired access token.
    pub async fn refresh_token(&self, refresh_token: &str) -> Result<TokenResponse, AppError> {
        let response = self
            .http
            .post(format!("{}/oauth/token", self.oauth_base))
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("refresh_token", refresh_token),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .await
            .map_err(|e| AppError::TokenRefresh(format!("Token refresh request failed: {}", e)))?;

        Self::parse_json(response, AppError::TokenRefresh).await
    }

    /// List athlete activities (paginated, most recent first).
    ///
    /// `after` filters to activities starting at or after the given epoch
    /// seconds; `page` is 1-based.
    pub async fn list_activities(
        &self,
        access_token: &str,
        after: Option<i64>,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<RawActivity>, AppError> {
        let mut query = vec![
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
        ];
        if let Some(after) = after {
            query.push(("after", after.to_string()));
        }

        let response = self
            .http
            .get(format!("{}/athlete/activities", self.api_base))
            .bearer_auth(access_token)
            .query(&query)
            .send()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;

        Self::parse_json(response, AppError::Upstream).await
    }

    /// Check response status and parse the JSON body, mapping failures
    /// through the caller's error variant.
    async fn parse_json<T: for<'de> Deserialize<'de>>(
        response: reqwest::Response,
        make_error: fn(String) -> AppError,
    ) -> Result<T, AppError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(make_error(format!("HTTP {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|e| make_error(format!("JSON parse error: {}", e)))
    }
}
