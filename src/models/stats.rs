// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekly aggregation of activity records.
//!
//! Buckets are seeded for every requested week before any activity is
//! attributed, so weeks without activity still appear in the output.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::ActivityRecord;
use crate::time_utils::{parse_start_date, week_start_of};

/// Accumulator for a single calendar week.
///
/// Lives only for the duration of one stats computation.
#[derive(Debug, Clone)]
struct WeekBucket {
    week_start: NaiveDate,
    total_distance_km: f64,
    activity_count: u32,
}

/// One week of the stats report.
#[derive(Debug, Clone, Serialize)]
pub struct WeekSummary {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    /// ISO week of year
    pub week_number: u32,
    /// Calendar year of the week start
    pub year: i32,
    /// Total distance, rounded to 2 decimal places
    pub distance_km: f64,
    pub activity_count: u32,
    pub is_current_week: bool,
}

/// Totals across the whole report.
#[derive(Debug, Clone, Serialize)]
pub struct StatsSummary {
    pub total_distance_km: f64,
    pub total_activities: u32,
    /// Total distance divided by the *requested* week count, even if some
    /// weeks predate the account's history.
    pub average_distance_per_week_km: f64,
    pub number_of_weeks: u32,
}

/// Weekly stats report: weeks in chronological order plus summary totals.
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyStatsResult {
    pub weeks: Vec<WeekSummary>,
    pub summary: StatsSummary,
}

/// Round half away from zero to 2 decimal places.
///
/// Applied only at presentation time; accumulators stay unrounded.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Bucket activities into the `number_of_weeks` consecutive weeks ending with
/// the week containing `today`.
///
/// Activities whose week falls outside the seeded window are ignored; the
/// upstream `after` filter should already have excluded them.
pub fn bucket_into_weeks(
    records: &[ActivityRecord],
    number_of_weeks: u32,
    today: NaiveDate,
) -> WeeklyStatsResult {
    let current_week_start = week_start_of(today);

    // Seed one zeroed bucket per requested week, oldest first. BTreeMap keeps
    // iteration chronological.
    let mut buckets: BTreeMap<NaiveDate, WeekBucket> = BTreeMap::new();
    for i in (0..number_of_weeks).rev() {
        let week_start = week_start_of(today - Duration::days(7 * i64::from(i)));
        buckets.insert(
            week_start,
            WeekBucket {
                week_start,
                total_distance_km: 0.0,
                activity_count: 0,
            },
        );
    }

    for record in records {
        let Some(date) = parse_start_date(&record.start_date) else {
            tracing::debug!(id = record.id, start_date = %record.start_date, "Skipping activity with unparseable start date");
            continue;
        };

        if let Some(bucket) = buckets.get_mut(&week_start_of(date)) {
            bucket.total_distance_km += record.distance_km;
            bucket.activity_count += 1;
        }
    }

    let mut total_distance = 0.0;
    let mut total_activities = 0;

    let weeks: Vec<WeekSummary> = buckets
        .into_values()
        .map(|bucket| {
            total_distance += bucket.total_distance_km;
            total_activities += bucket.activity_count;

            WeekSummary {
                week_start: bucket.week_start,
                week_end: bucket.week_start + Duration::days(6),
                week_number: bucket.week_start.iso_week().week(),
                year: bucket.week_start.year(),
                distance_km: round2(bucket.total_distance_km),
                activity_count: bucket.activity_count,
                is_current_week: bucket.week_start == current_week_start,
            }
        })
        .collect();

    WeeklyStatsResult {
        weeks,
        summary: StatsSummary {
            total_distance_km: round2(total_distance),
            total_activities,
            average_distance_per_week_km: round2(total_distance / f64::from(number_of_weeks)),
            number_of_weeks,
        },
    }
}
