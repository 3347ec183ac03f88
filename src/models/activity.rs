// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava activity models: raw API payload and normalized record.

use serde::{Deserialize, Serialize};

/// Raw activity as returned by the Strava athlete-activities endpoint.
///
/// Only the fields we project are deserialized; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawActivity {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub activity_type: String,
    /// Distance in meters
    pub distance: f64,
    /// Moving time in seconds
    pub moving_time: i64,
    /// Start date/time (ISO 8601)
    pub start_date: String,
    /// Device name (e.g. "Garmin Edge 530")
    pub device_name: Option<String>,
    #[serde(default)]
    pub kudos_count: u32,
    #[serde(default)]
    pub comment_count: u32,
    /// Average speed in meters per second
    pub average_speed: Option<f64>,
    /// Total elevation gain in meters
    pub total_elevation_gain: Option<f64>,
}

/// Normalized activity record exposed by the API.
///
/// Immutable once constructed from a [`RawActivity`].
#[derive(Debug, Clone, Serialize)]
pub struct ActivityRecord {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub activity_type: String,
    /// Distance in kilometers
    pub distance_km: f64,
    /// Moving time in whole minutes
    pub moving_time_minutes: i64,
    /// Start date/time (ISO 8601)
    pub start_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_name: Option<String>,
    pub kudos_count: u32,
    pub comment_count: u32,
    /// Average speed in km/h, if the source reported one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_speed_kmh: Option<f64>,
    /// Elevation gain in meters, if the source reported one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation_gain_m: Option<f64>,
}

impl From<RawActivity> for ActivityRecord {
    fn from(raw: RawActivity) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            activity_type: raw.activity_type,
            distance_km: raw.distance / 1000.0,
            moving_time_minutes: raw.moving_time / 60,
            start_date: raw.start_date,
            device_name: raw.device_name,
            kudos_count: raw.kudos_count,
            comment_count: raw.comment_count,
            average_speed_kmh: raw.average_speed.map(|s| s * 3.6),
            elevation_gain_m: raw.total_elevation_gain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_raw(distance: f64, average_speed: Option<f64>) -> RawActivity {
        RawActivity {
            id: 1,
            name: "Morning Run".to_string(),
            activity_type: "Run".to_string(),
            distance,
            moving_time: 1800,
            start_date: "2024-01-15T10:00:00Z".to_string(),
            device_name: None,
            kudos_count: 3,
            comment_count: 1,
            average_speed,
            total_elevation_gain: None,
        }
    }

    #[test]
    fn test_unit_conversions() {
        let record = ActivityRecord::from(make_raw(1609.34, Some(5.0)));

        assert!((record.distance_km - 1.60934).abs() < 1e-9);
        assert_eq!(record.average_speed_kmh, Some(18.0));
        assert_eq!(record.moving_time_minutes, 30);
    }

    #[test]
    fn test_optional_fields_absent() {
        let record = ActivityRecord::from(make_raw(5000.0, None));

        assert_eq!(record.average_speed_kmh, None);
        assert_eq!(record.elevation_gain_m, None);
        assert_eq!(record.device_name, None);
    }

    #[test]
    fn test_moving_time_truncates_to_whole_minutes() {
        let mut raw = make_raw(1000.0, None);
        raw.moving_time = 119; // 1 minute 59 seconds
        let record = ActivityRecord::from(raw);
        assert_eq!(record.moving_time_minutes, 1);
    }

    #[test]
    fn test_raw_deserializes_without_optionals() {
        let json = r#"{
            "id": 42,
            "name": "Lunch Ride",
            "type": "Ride",
            "distance": 25000.0,
            "moving_time": 3600,
            "start_date": "2024-03-02T12:00:00Z"
        }"#;

        let raw: RawActivity = serde_json::from_str(json).unwrap();
        assert_eq!(raw.id, 42);
        assert_eq!(raw.activity_type, "Ride");
        assert_eq!(raw.kudos_count, 0);
        assert_eq!(raw.device_name, None);
        assert_eq!(raw.average_speed, None);
    }
}
