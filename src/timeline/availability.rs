use std::collections::BTreeMap;

use crate::domain::{NormalizedPoint, WindowId, WindowOption};
use crate::timeline::group_by_player;
use crate::timeline::window::in_window;

/// For each window option, whether any player has at least two raw points in it.
///
/// Counts every normalized point, game-bearing or not.
pub fn availability(
    points: &[NormalizedPoint],
    options: &[WindowOption],
    now: i64,
) -> BTreeMap<WindowId, bool> {
    options
        .iter()
        .map(|option| (option.id.clone(), has_movement(points, option.duration_ms, now)))
        .collect()
}

fn has_movement(points: &[NormalizedPoint], window_ms: i64, now: i64) -> bool {
    group_by_player(points.iter().filter(|p| in_window(p, window_ms, now)))
        .values()
        .any(|group| group.len() >= 2)
}
