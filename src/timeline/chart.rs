use serde::{Deserialize, Serialize};

use crate::domain::SeriesPoint;
use crate::ladder::{RankPosition, apex_checkpoint, promotion_target};
use crate::timeline::series::SeriesMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDomain {
    pub min_score: f64,
    pub max_score: f64,
    pub max_match_index: u32,
}

/// Axis bounds for a set of series, `None` when there is nothing to plot.
///
/// `max_score` is raised to each player's next rank-up target so a player
/// about to promote is not clipped.
pub fn compute_domain(series: &SeriesMap) -> Option<ChartDomain> {
    series
        .values()
        .filter_map(|points| series_domain(points))
        .reduce(|a, b| ChartDomain {
            min_score: a.min_score.min(b.min_score),
            max_score: a.max_score.max(b.max_score),
            max_match_index: a.max_match_index.max(b.max_match_index),
        })
}

fn series_domain(points: &[SeriesPoint]) -> Option<ChartDomain> {
    let first = points.first()?;
    let last = points.last()?;

    let (min_score, max_score) = points.iter().fold(
        (first.point.score, first.point.score),
        |(min, max), p| (min.min(p.point.score), max.max(p.point.score)),
    );
    let max_match_index = points.iter().map(|p| p.match_index).max().unwrap_or(0);
    let headroom = projected_target(last).unwrap_or(max_score);

    Some(ChartDomain {
        min_score,
        max_score: max_score.max(headroom),
        max_match_index,
    })
}

/// Next division/tier floor below Master, next 50 LP checkpoint above it
fn projected_target(point: &SeriesPoint) -> Option<f64> {
    let position = RankPosition::from_snapshot(&point.point.snapshot);

    match position.tier {
        Some(tier) if tier.is_apex() => {
            Some(apex_checkpoint(point.point.score, position.league_points))
        }
        Some(_) => promotion_target(&position),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Division, RankCutoffs, RankSnapshot, Tier};
    use crate::ladder::MASTER_BASE;
    use crate::timeline::{build_series, normalize};

    const CUTOFFS: RankCutoffs = RankCutoffs {
        grandmaster: 200,
        challenger: 500,
    };

    fn game(
        player: &str,
        day: u32,
        tier: Tier,
        division: Option<Division>,
        lp: i32,
    ) -> RankSnapshot {
        let observed_at = format!("2024-01-{day:02}T00:00:00Z");
        let mut snapshot = RankSnapshot::new(player, Some(tier), division, lp, &observed_at);
        snapshot.match_id = Some(format!("{player}-{day}"));
        snapshot
    }

    #[test]
    fn test_domain_includes_promotion_headroom() {
        let snapshots = vec![
            game("a", 1, Tier::Gold, Some(Division::III), 40),
            game("a", 2, Tier::Gold, Some(Division::III), 20),
            game("a", 3, Tier::Gold, Some(Division::III), 85),
        ];
        let series = build_series(&normalize(&snapshots, &CUTOFFS));

        let domain = compute_domain(&series).unwrap();

        assert_eq!(domain.min_score, 1200.0 + 100.0 + 20.0);
        assert_eq!(domain.max_score, 1200.0 + 200.0);
        assert_eq!(domain.max_match_index, 3);
    }

    #[test]
    fn test_domain_apex_checkpoint() {
        let snapshots = vec![
            game("m", 1, Tier::Master, None, 60),
            game("m", 2, Tier::Master, None, 120),
        ];
        let series = build_series(&normalize(&snapshots, &CUTOFFS));

        let domain = compute_domain(&series).unwrap();

        assert_eq!(domain.min_score, MASTER_BASE + 60.0);
        assert_eq!(domain.max_score, MASTER_BASE + 150.0);
    }

    #[test]
    fn test_domain_spans_all_players() {
        let snapshots = vec![
            game("low", 1, Tier::Iron, Some(Division::IV), 5),
            game("low", 2, Tier::Iron, Some(Division::IV), 25),
            game("high", 1, Tier::Diamond, Some(Division::I), 60),
            game("high", 2, Tier::Diamond, Some(Division::I), 80),
            game("high", 3, Tier::Diamond, Some(Division::I), 95),
        ];
        let series = build_series(&normalize(&snapshots, &CUTOFFS));

        let domain = compute_domain(&series).unwrap();

        assert_eq!(domain.min_score, 5.0);
        assert_eq!(domain.max_score, MASTER_BASE);
        assert_eq!(domain.max_match_index, 3);
    }

    #[test]
    fn test_empty_series_has_no_domain() {
        assert_eq!(compute_domain(&SeriesMap::new()), None);
    }
}
