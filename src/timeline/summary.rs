use serde::{Deserialize, Serialize};

use crate::domain::{NormalizedPoint, PlayerId, WindowId, WindowOption};
use crate::timeline::group_by_player;
use crate::timeline::window::in_window;

/// Start-vs-end movement of one player over a window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeMove {
    pub player_id: PlayerId,
    pub start_score: f64,
    pub end_score: f64,
    pub delta: f64,
    pub start_ts: i64,
    pub end_ts: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeSummary {
    pub best_gain: Option<RangeMove>,
    pub best_loss: Option<RangeMove>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowSummary {
    pub window_id: WindowId,
    #[serde(flatten)]
    pub summary: RangeSummary,
}

/// Biggest gain and biggest loss across players over one window.
///
/// Uses raw points (not the game-filtered series) and compares only the
/// first and last point of each player. Players are visited in ascending
/// id order and only a strictly better delta replaces the leader, so ties
/// go to the lowest player id.
pub fn summarize_range(points: &[NormalizedPoint], window_ms: i64, now: i64) -> RangeSummary {
    group_by_player(points.iter().filter(|p| in_window(p, window_ms, now)))
        .into_iter()
        .filter_map(|(player_id, group)| range_move(player_id, &group))
        .fold(RangeSummary::default(), |summary, movement| RangeSummary {
            best_gain: pick(summary.best_gain, &movement, |new, old| new > old),
            best_loss: pick(summary.best_loss, &movement, |new, old| new < old),
        })
}

/// Summaries for every window, in the order given
pub fn summarize_windows(
    points: &[NormalizedPoint],
    windows: &[WindowOption],
    now: i64,
) -> Vec<WindowSummary> {
    windows
        .iter()
        .map(|window| WindowSummary {
            window_id: window.id.clone(),
            summary: summarize_range(points, window.duration_ms, now),
        })
        .collect()
}

fn range_move(player_id: &str, group: &[&NormalizedPoint]) -> Option<RangeMove> {
    if group.len() < 2 {
        return None;
    }
    let start = group.first()?;
    let end = group.last()?;

    Some(RangeMove {
        player_id: player_id.to_string(),
        start_score: start.score,
        end_score: end.score,
        delta: end.score - start.score,
        start_ts: start.ts,
        end_ts: end.ts,
    })
}

fn pick(
    current: Option<RangeMove>,
    candidate: &RangeMove,
    better: impl Fn(f64, f64) -> bool,
) -> Option<RangeMove> {
    match current {
        Some(leader) if !better(candidate.delta, leader.delta) => Some(leader),
        _ => Some(candidate.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Division, RankCutoffs, RankSnapshot, Tier};
    use crate::timeline::normalize;

    const DAY: i64 = 24 * 60 * 60 * 1000;
    const CUTOFFS: RankCutoffs = RankCutoffs {
        grandmaster: 200,
        challenger: 500,
    };

    fn gold(player: &str, lp: i32, observed_at: &str) -> RankSnapshot {
        RankSnapshot::new(player, Some(Tier::Gold), Some(Division::III), lp, observed_at)
    }

    #[test]
    fn test_best_gain_and_loss() {
        let snapshots = vec![
            gold("climber", 10, "2024-01-09T00:00:00Z"),
            gold("climber", 90, "2024-01-10T00:00:00Z"),
            gold("faller", 80, "2024-01-09T00:00:00Z"),
            gold("faller", 5, "2024-01-10T00:00:00Z"),
            gold("steady", 50, "2024-01-09T00:00:00Z"),
            gold("steady", 55, "2024-01-10T00:00:00Z"),
        ];
        let points = normalize(&snapshots, &CUTOFFS);
        let now = points[1].ts;

        let summary = summarize_range(&points, 7 * DAY, now);

        let gain = summary.best_gain.unwrap();
        let loss = summary.best_loss.unwrap();
        assert_eq!(gain.player_id, "climber");
        assert_eq!(gain.delta, 80.0);
        assert_eq!(loss.player_id, "faller");
        assert_eq!(loss.delta, -75.0);
    }

    #[test]
    fn test_compares_first_and_last_only() {
        let snapshots = vec![
            gold("p", 60, "2024-01-10T00:00:00Z"),
            gold("p", 10, "2024-01-08T00:00:00Z"),
            gold("p", 99, "2024-01-09T00:00:00Z"),
        ];
        let points = normalize(&snapshots, &CUTOFFS);
        let now = points[0].ts;

        let gain = summarize_range(&points, 7 * DAY, now).best_gain.unwrap();

        assert_eq!(gain.delta, 50.0);
        assert_eq!(gain.start_score, 1200.0 + 100.0 + 10.0);
    }

    #[test]
    fn test_passive_snapshots_still_summarized() {
        // no counters, no match ids: would never form a series
        let snapshots = vec![
            gold("p", 20, "2024-01-09T00:00:00Z"),
            gold("p", 45, "2024-01-10T00:00:00Z"),
        ];
        let points = normalize(&snapshots, &CUTOFFS);

        let summary = summarize_range(&points, 7 * DAY, points[1].ts);

        assert_eq!(summary.best_gain.unwrap().delta, 25.0);
        assert_eq!(summary.best_loss.unwrap().delta, 25.0);
    }

    #[test]
    fn test_ties_go_to_lowest_player_id() {
        let snapshots = vec![
            gold("zed", 10, "2024-01-09T00:00:00Z"),
            gold("zed", 30, "2024-01-10T00:00:00Z"),
            gold("amy", 10, "2024-01-09T00:00:00Z"),
            gold("amy", 30, "2024-01-10T00:00:00Z"),
        ];
        let points = normalize(&snapshots, &CUTOFFS);

        let summary = summarize_range(&points, 7 * DAY, points[1].ts);

        assert_eq!(summary.best_gain.unwrap().player_id, "amy");
        assert_eq!(summary.best_loss.unwrap().player_id, "amy");
    }

    #[test]
    fn test_no_qualifying_player() {
        let snapshots = vec![
            gold("a", 20, "2024-01-01T00:00:00Z"),
            gold("a", 40, "2024-01-02T00:00:00Z"),
            gold("b", 40, "2024-01-10T00:00:00Z"),
        ];
        let points = normalize(&snapshots, &CUTOFFS);

        let summary = summarize_range(&points, DAY, points[2].ts);

        assert_eq!(summary, RangeSummary::default());
    }

    #[test]
    fn test_summarize_windows_keeps_order() {
        let snapshots = vec![
            gold("a", 20, "2024-01-01T00:00:00Z"),
            gold("a", 40, "2024-01-10T00:00:00Z"),
        ];
        let points = normalize(&snapshots, &CUTOFFS);
        let windows = vec![WindowOption::new("24h", DAY), WindowOption::new("30d", 30 * DAY)];

        let summaries = summarize_windows(&points, &windows, points[1].ts);

        assert_eq!(summaries[0].window_id, "24h");
        assert!(summaries[0].summary.best_gain.is_none());
        assert_eq!(summaries[1].window_id, "30d");
        assert_eq!(summaries[1].summary.best_gain.as_ref().unwrap().delta, 20.0);
    }
}
