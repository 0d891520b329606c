pub mod availability;
pub mod chart;
pub mod normalize;
pub mod series;
pub mod summary;
pub mod window;

use std::collections::BTreeMap;

use crate::domain::NormalizedPoint;

pub use availability::availability;
pub use chart::{ChartDomain, compute_domain};
pub use normalize::{normalize, parse_timestamp};
pub use series::{SeriesMap, build_series};
pub use summary::{RangeMove, RangeSummary, WindowSummary, summarize_range, summarize_windows};
pub use window::{apply_zoom, filter_by_window};

/// Group points by player in ascending player-id order, each group sorted by time.
///
/// The sort is stable, so samples sharing a timestamp keep their input order.
pub(crate) fn group_by_player<'a, I>(points: I) -> BTreeMap<&'a str, Vec<&'a NormalizedPoint>>
where
    I: IntoIterator<Item = &'a NormalizedPoint>,
{
    let mut groups: BTreeMap<&'a str, Vec<&'a NormalizedPoint>> = BTreeMap::new();
    for point in points {
        groups.entry(point.player_id()).or_default().push(point);
    }
    for group in groups.values_mut() {
        group.sort_by_key(|p| p.ts);
    }
    groups
}
