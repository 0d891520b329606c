use log::debug;
use serde_json::Value;

use crate::domain::models::{Division, RankSnapshot, RawSnapshot, Tier};

/// Validate a batch of raw samples into typed snapshots.
///
/// Samples without a usable player id are dropped; every other field
/// degrades to "unranked" / absent instead of failing.
pub fn ingest_snapshots(raw: &[RawSnapshot]) -> Vec<RankSnapshot> {
    let snapshots: Vec<RankSnapshot> = raw.iter().filter_map(ingest_snapshot).collect();

    if snapshots.len() < raw.len() {
        debug!(
            "Dropped {} snapshots without a player id",
            raw.len() - snapshots.len()
        );
    }
    snapshots
}

pub fn ingest_snapshot(raw: &RawSnapshot) -> Option<RankSnapshot> {
    let player_id = value_to_string(&raw.player_id)?;
    let tier = parse_tier(raw.tier.as_deref());

    Some(RankSnapshot {
        player_id,
        tier,
        division: parse_division(tier, raw.division.as_deref()),
        league_points: to_league_points(raw.league_points),
        wins: to_counter(raw.wins),
        losses: to_counter(raw.losses),
        match_id: value_to_string(&raw.match_id),
        champion_id: to_counter(raw.champion_id),
        kills: to_counter(raw.kills),
        deaths: to_counter(raw.deaths),
        assists: to_counter(raw.assists),
        win: raw.win,
        league_point_delta: raw.league_point_delta.map(saturate_i32),
        global_rank: to_counter(raw.global_rank),
        observed_at: value_to_string(&raw.observed_at).unwrap_or_default(),
    })
}

fn parse_tier(tier: Option<&str>) -> Option<Tier> {
    tier.and_then(Tier::parse)
}

/// Divisions only exist below Master
fn parse_division(tier: Option<Tier>, division: Option<&str>) -> Option<Division> {
    match tier {
        Some(t) if !t.is_apex() => division.and_then(Division::parse),
        _ => None,
    }
}

fn to_league_points(lp: Option<i64>) -> i32 {
    lp.map(saturate_i32).unwrap_or(0)
}

fn to_counter(value: Option<i64>) -> Option<u32> {
    value.and_then(|v| u32::try_from(v).ok())
}

fn saturate_i32(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Identifiers and timestamps arrive either as strings or as numbers
fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(
        player_id: Value,
        tier: Option<&str>,
        division: Option<&str>,
        lp: Option<i64>,
    ) -> RawSnapshot {
        RawSnapshot {
            player_id,
            tier: tier.map(str::to_string),
            division: division.map(str::to_string),
            league_points: lp,
            observed_at: json!("2024-01-01T00:00:00Z"),
            ..Default::default()
        }
    }

    #[test]
    fn test_ingest_typed_fields() {
        let mut sample = raw(json!("p1"), Some("DIAMOND"), Some("II"), Some(64));
        sample.wins = Some(20);
        sample.losses = Some(18);
        sample.match_id = json!(987654);

        let snapshot = ingest_snapshot(&sample).unwrap();

        assert_eq!(snapshot.player_id, "p1");
        assert_eq!(snapshot.tier, Some(Tier::Diamond));
        assert_eq!(snapshot.division, Some(Division::II));
        assert_eq!(snapshot.league_points, 64);
        assert_eq!(snapshot.wins, Some(20));
        assert_eq!(snapshot.match_id.as_deref(), Some("987654"));
        assert_eq!(snapshot.observed_at, "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_unknown_tier_becomes_unranked() {
        let snapshot = ingest_snapshot(&raw(json!(7), Some("WOOD"), Some("I"), Some(30))).unwrap();

        assert_eq!(snapshot.player_id, "7");
        assert_eq!(snapshot.tier, None);
        assert_eq!(snapshot.division, None);
        assert_eq!(snapshot.league_points, 30);
    }

    #[test]
    fn test_apex_tier_drops_division() {
        let snapshot =
            ingest_snapshot(&raw(json!("p"), Some("MASTER"), Some("I"), Some(120))).unwrap();

        assert_eq!(snapshot.tier, Some(Tier::Master));
        assert_eq!(snapshot.division, None);
    }

    #[test]
    fn test_missing_fields_degrade() {
        let mut sample = raw(json!("p"), None, None, None);
        sample.wins = Some(-3);
        sample.observed_at = Value::Null;

        let snapshot = ingest_snapshot(&sample).unwrap();

        assert_eq!(snapshot.league_points, 0);
        assert_eq!(snapshot.wins, None);
        assert_eq!(snapshot.observed_at, "");
    }

    #[test]
    fn test_missing_player_id_is_dropped() {
        let batch = vec![
            raw(Value::Null, Some("GOLD"), Some("I"), Some(10)),
            raw(json!("ok"), Some("GOLD"), Some("I"), Some(10)),
        ];

        let snapshots = ingest_snapshots(&batch);

        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].player_id, "ok");
    }
}
