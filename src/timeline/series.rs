use std::collections::BTreeMap;

use log::debug;

use crate::domain::{MatchResult, NormalizedPoint, PlayerId, SeriesPoint};
use crate::timeline::group_by_player;

pub type SeriesMap = BTreeMap<PlayerId, Vec<SeriesPoint>>;

const MIN_SERIES_POINTS: usize = 2;

/// Build per-player match series from normalized points.
///
/// Only samples that represent a played game are kept; players left with
/// fewer than two of them are omitted.
pub fn build_series(points: &[NormalizedPoint]) -> SeriesMap {
    let groups = group_by_player(points);
    let player_count = groups.len();

    let series: SeriesMap = groups
        .into_iter()
        .filter_map(|(player_id, group)| {
            let player_series = walk_player(&group);
            (player_series.len() >= MIN_SERIES_POINTS)
                .then(|| (player_id.to_string(), player_series))
        })
        .collect();

    debug!(
        "Built series for {} of {} players",
        series.len(),
        player_count
    );
    series
}

/// Walk one player's time-sorted points, keeping the game-bearing ones
fn walk_player(group: &[&NormalizedPoint]) -> Vec<SeriesPoint> {
    let mut series: Vec<SeriesPoint> = Vec::new();
    let mut last_included: Option<&NormalizedPoint> = None;
    let mut included = CounterBaseline::default();
    let mut seen = CounterBaseline::default();

    for &point in group {
        // Each counter is compared to the last game that reported it, else the last sample that did
        let activity = CounterActivity::between(&included.or(&seen), point);

        if is_game(point, &activity) {
            series.push(SeriesPoint {
                point: point.clone(),
                match_index: series.len() as u32 + 1,
                delta: last_included.map(|last| point.score - last.score),
                result: resolve_result(point, &activity),
            });
            last_included = Some(point);
            included.record(point);
        }
        seen.record(point);
    }

    series
}

/// Latest known value of each counter, tracked independently
#[derive(Debug, Default, Clone, Copy)]
struct CounterBaseline {
    wins: Option<u32>,
    losses: Option<u32>,
}

impl CounterBaseline {
    fn record(&mut self, point: &NormalizedPoint) {
        self.wins = point.snapshot.wins.or(self.wins);
        self.losses = point.snapshot.losses.or(self.losses);
    }

    fn or(&self, fallback: &CounterBaseline) -> CounterBaseline {
        CounterBaseline {
            wins: self.wins.or(fallback.wins),
            losses: self.losses.or(fallback.losses),
        }
    }
}

struct CounterActivity {
    won: bool,
    lost: bool,
}

impl CounterActivity {
    fn between(baseline: &CounterBaseline, point: &NormalizedPoint) -> Self {
        Self {
            won: increased(point.snapshot.wins, baseline.wins),
            lost: increased(point.snapshot.losses, baseline.losses),
        }
    }
}

fn increased(current: Option<u32>, reference: Option<u32>) -> bool {
    matches!((current, reference), (Some(c), Some(r)) if c > r)
}

fn is_game(point: &NormalizedPoint, activity: &CounterActivity) -> bool {
    point.snapshot.match_id.is_some()
        || point.snapshot.league_point_delta.is_some()
        || activity.won
        || activity.lost
}

/// Explicit win flag first, then whichever counter moved
fn resolve_result(point: &NormalizedPoint, activity: &CounterActivity) -> Option<MatchResult> {
    match point.snapshot.win {
        Some(true) => Some(MatchResult::Win),
        Some(false) => Some(MatchResult::Loss),
        None if activity.won => Some(MatchResult::Win),
        None if activity.lost => Some(MatchResult::Loss),
        None => None,
    }
}
