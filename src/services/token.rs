// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Token lifecycle management.
//!
//! Holds the single credential set for this process and refreshes it lazily
//! when a consumer asks for a token after expiry.

use crate::error::AppError;
use crate::services::strava::{StravaClient, TokenResponse};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Stored OAuth credential set.
///
/// Invariant: `expires_at` always belongs to the token returned by the last
/// successful exchange or refresh.
#[derive(Debug, Clone)]
struct Credential {
    access_token: String,
    refresh_token: String,
    expires_at: DateTime<Utc>,
}

impl From<TokenResponse> for Credential {
    fn from(token: TokenResponse) -> Self {
        Self {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            expires_at: DateTime::from_timestamp(token.expires_at, 0).unwrap_or_default(),
        }
    }
}

/// Single-credential token store.
///
/// The credential lives behind one mutex, so readers never observe a
/// half-written token/expiry pair, and concurrent callers that hit an
/// expired token coalesce into a single refresh round trip.
#[derive(Clone)]
pub struct TokenStore {
    client: StravaClient,
    credential: Arc<Mutex<Option<Credential>>>,
}

impl TokenStore {
    pub fn new(client: StravaClient) -> Self {
        Self {
            client,
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Exchange an authorization code for tokens and store them.
    ///
    /// On failure any previously stored credential is left untouched.
    pub async fn exchange_code(&self, code: &str) -> Result<(), AppError> {
        let token = self.client.exchange_code(code).await?;

        let mut credential = self.credential.lock().await;
        *credential = Some(Credential::from(token));

        tracing::info!("Authorization code exchanged, tokens stored");
        Ok(())
    }

    /// Get a valid (non-expired) access token, refreshing if necessary.
    ///
    /// The lock is held across the refresh round trip: a caller that waited
    /// on it re-checks expiry and finds the fresh token, so only one refresh
    /// request is ever in flight.
    pub async fn get_valid_token(&self) -> Result<String, AppError> {
        let mut guard = self.credential.lock().await;
        let credential = guard.as_mut().ok_or(AppError::NotAuthenticated)?;

        if Utc::now() < credential.expires_at {
            return Ok(credential.access_token.clone());
        }

        tracing::info!("Access token expired, refreshing");
        let refreshed = self.client.refresh_token(&credential.refresh_token).await?;
        *credential = Credential::from(refreshed);

        tracing::info!("Token refreshed");
        Ok(credential.access_token.clone())
    }

    /// Whether a credential has ever been stored. Expiry is checked lazily
    /// on next use, not here.
    pub async fn is_authenticated(&self) -> bool {
        self.credential.lock().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> TokenStore {
        TokenStore::new(StravaClient::new(
            "client_id".to_string(),
            "client_secret".to_string(),
            "http://localhost/callback".to_string(),
        ))
    }

    #[tokio::test]
    async fn test_unauthenticated_store_rejects_token_requests() {
        let store = store();

        assert!(!store.is_authenticated().await);

        let err = store.get_valid_token().await.unwrap_err();
        assert!(matches!(err, AppError::NotAuthenticated));
    }

    #[tokio::test]
    async fn test_valid_token_returned_without_refresh() {
        let store = store();

        // Seed a credential that expires an hour from now. No mock server is
        // running, so any refresh attempt would fail loudly.
        *store.credential.lock().await = Some(Credential {
            access_token: "cached_token".to_string(),
            refresh_token: "refresh".to_string(),
            expires_at: Utc::now() + chrono::Duration::hours(1),
        });

        let token = store.get_valid_token().await.unwrap();
        assert_eq!(token, "cached_token");
        assert!(store.is_authenticated().await);
    }

    #[test]
    fn test_credential_from_token_response() {
        let credential = Credential::from(TokenResponse {
            access_token: "a".to_string(),
            refresh_token: "r".to_string(),
            expires_at: 1_704_103_200,
        });

        assert_eq!(credential.expires_at.timestamp(), 1_704_103_200);
    }
}
