// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava-Weekly: weekly distance stats from Strava activities
//!
//! This crate provides a small API server that authenticates against the
//! Strava API, lists an athlete's activities, and aggregates them into
//! rolling weekly distance/count statistics.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::{ActivityAggregator, StravaClient, TokenStore};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub strava: StravaClient,
    pub tokens: TokenStore,
    pub aggregator: ActivityAggregator,
}

impl AppState {
    /// Wire up services from configuration.
    pub fn new(config: Config) -> Self {
        let strava = StravaClient::new(
            config.strava_client_id.clone(),
            config.strava_client_secret.clone(),
            config.strava_redirect_uri.clone(),
        );
        let tokens = TokenStore::new(strava.clone());
        let aggregator = ActivityAggregator::new(strava.clone(), tokens.clone());

        Self {
            config,
            strava,
            tokens,
            aggregator,
        }
    }

    /// State wired against non-default base URLs (used by integration tests
    /// to point at a mock server).
    pub fn with_client(config: Config, strava: StravaClient) -> Self {
        let tokens = TokenStore::new(strava.clone());
        let aggregator = ActivityAggregator::new(strava.clone(), tokens.clone());

        Self {
            config,
            strava,
            tokens,
            aggregator,
        }
    }
}
