use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::debug;

use crate::domain::{NormalizedPoint, RankCutoffs, RankSnapshot};
use crate::ladder;

/// Attach score and epoch-ms timestamp to each snapshot.
///
/// Snapshots whose timestamp does not parse are dropped. Input order is kept.
pub fn normalize(snapshots: &[RankSnapshot], cutoffs: &RankCutoffs) -> Vec<NormalizedPoint> {
    let points: Vec<NormalizedPoint> = snapshots
        .iter()
        .filter_map(|snapshot| normalize_one(snapshot, cutoffs))
        .collect();

    if points.len() < snapshots.len() {
        debug!(
            "Dropped {} of {} snapshots with unparsable timestamps",
            snapshots.len() - points.len(),
            snapshots.len()
        );
    }
    points
}

fn normalize_one(snapshot: &RankSnapshot, cutoffs: &RankCutoffs) -> Option<NormalizedPoint> {
    let Some(ts) = parse_timestamp(&snapshot.observed_at) else {
        debug!(
            "Skipping snapshot for {}: bad timestamp {:?}",
            snapshot.player_id, snapshot.observed_at
        );
        return None;
    };

    Some(NormalizedPoint {
        snapshot: snapshot.clone(),
        score: ladder::score(snapshot, cutoffs),
        ts,
    })
}

/// Parse a timestamp into epoch milliseconds; naive values are read as UTC
pub fn parse_timestamp(value: &str) -> Option<i64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    // Try RFC3339 format (with timezone)
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.timestamp_millis());
    }

    // Naive datetime, with or without fractional seconds
    for format in [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis());
    }

    // Epoch milliseconds
    value.parse::<i64>().ok()
}
