// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity listing and weekly statistics aggregation.

use crate::error::AppError;
use crate::models::stats::bucket_into_weeks;
use crate::models::{ActivityRecord, WeeklyStatsResult};
use crate::services::strava::StravaClient;
use crate::services::token::TokenStore;
use chrono::{Duration, Utc};

/// Page size used for the stats continuation.
const STATS_PAGE_SIZE: u32 = 200;

/// Hard cap on pages fetched per stats call (10 000 activities). The remote
/// `after` filter normally bounds the walk long before this.
const MAX_STATS_PAGES: u32 = 50;

/// Fetches activities with a valid token and reduces them into weekly stats.
#[derive(Clone)]
pub struct ActivityAggregator {
    client: StravaClient,
    tokens: TokenStore,
}

impl ActivityAggregator {
    pub fn new(client: StravaClient, tokens: TokenStore) -> Self {
        Self { client, tokens }
    }

    /// Fetch a single page of activities, normalized, in the order the API
    /// returned them (most recent first).
    pub async fn list_activities(
        &self,
        per_page: u32,
        page: u32,
    ) -> Result<Vec<ActivityRecord>, AppError> {
        let token = self.tokens.get_valid_token().await?;
        let raw = self
            .client
            .list_activities(&token, None, page, per_page)
            .await?;

        Ok(raw.into_iter().map(ActivityRecord::from).collect())
    }

    /// Compute weekly distance/count stats over the last `number_of_weeks`
    /// calendar weeks (including the current one).
    ///
    /// Fetches every activity since the window's lower bound by walking
    /// pages sequentially until a short page signals end-of-data.
    pub async fn weekly_stats(&self, number_of_weeks: u32) -> Result<WeeklyStatsResult, AppError> {
        if number_of_weeks == 0 {
            return Err(AppError::BadRequest(
                "weeks must be greater than 0".to_string(),
            ));
        }

        let token = self.tokens.get_valid_token().await?;
        let after = (Utc::now() - Duration::days(7 * i64::from(number_of_weeks))).timestamp();

        let mut records: Vec<ActivityRecord> = Vec::new();
        let mut page = 1;
        loop {
            let batch = self
                .client
                .list_activities(&token, Some(after), page, STATS_PAGE_SIZE)
                .await?;
            let fetched = batch.len();
            records.extend(batch.into_iter().map(ActivityRecord::from));

            // A short page (including an empty one) means end-of-data.
            if fetched < STATS_PAGE_SIZE as usize {
                break;
            }
            if page >= MAX_STATS_PAGES {
                tracing::warn!(
                    pages = page,
                    records = records.len(),
                    "Stats pagination cap reached, computing over fetched prefix"
                );
                break;
            }
            page += 1;
        }

        tracing::debug!(
            weeks = number_of_weeks,
            pages = page,
            records = records.len(),
            "Fetched activities for weekly stats"
        );

        Ok(bucket_into_weeks(
            &records,
            number_of_weeks,
            Utc::now().date_naive(),
        ))
    }
}
