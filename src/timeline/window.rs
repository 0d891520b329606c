use crate::domain::NormalizedPoint;

/// Keep points observed at or after `now - window_ms`
pub fn filter_by_window(
    points: &[NormalizedPoint],
    window_ms: i64,
    now: i64,
) -> Vec<NormalizedPoint> {
    points
        .iter()
        .filter(|p| in_window(p, window_ms, now))
        .cloned()
        .collect()
}

pub(crate) fn in_window(point: &NormalizedPoint, window_ms: i64, now: i64) -> bool {
    point.ts >= now.saturating_sub(window_ms)
}

/// Narrow an already windowed set toward its most recent point.
///
/// The visible span is `span / zoom_factor`, anchored at the latest timestamp.
/// A factor of 1 (or anything not above 1) leaves the input unchanged.
pub fn apply_zoom(points: &[NormalizedPoint], zoom_factor: f64) -> Vec<NormalizedPoint> {
    if !zoom_factor.is_finite() || zoom_factor <= 1.0 {
        return points.to_vec();
    }

    let Some((min_ts, max_ts)) = time_bounds(points) else {
        return Vec::new();
    };

    let visible_span = (max_ts - min_ts) as f64 / zoom_factor;
    let start = max_ts as f64 - visible_span;

    points
        .iter()
        .filter(|p| p.ts as f64 >= start)
        .cloned()
        .collect()
}

fn time_bounds(points: &[NormalizedPoint]) -> Option<(i64, i64)> {
    points.iter().fold(None, |bounds, p| match bounds {
        None => Some((p.ts, p.ts)),
        Some((min, max)) => Some((min.min(p.ts), max.max(p.ts))),
    })
}
