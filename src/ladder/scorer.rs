use crate::domain::{Division, RankCutoffs, RankSnapshot, Tier};
use crate::ladder::position::RankPosition;

pub(crate) const TIER_BAND_WIDTH: f64 = 400.0;
pub(crate) const DIVISION_WIDTH: f64 = 100.0;

/// Score of Master 0 LP, the point directly above Diamond I's ceiling
pub const MASTER_BASE: f64 = Tier::Diamond as usize as f64 * TIER_BAND_WIDTH
    + Division::I as usize as f64 * DIVISION_WIDTH
    + DIVISION_WIDTH;

/// Ladder score of one snapshot.
///
/// Below Master every tier owns a 400-wide band split into four 100-wide
/// divisions. Master and above are anchored at `MASTER_BASE`, with
/// Grandmaster and Challenger offset by the live cutoffs.
pub fn score(snapshot: &RankSnapshot, cutoffs: &RankCutoffs) -> f64 {
    score_position(&RankPosition::from_snapshot(snapshot), cutoffs)
}

pub fn score_position(position: &RankPosition, cutoffs: &RankCutoffs) -> f64 {
    let lp = position.league_points as f64;

    match position.tier {
        None => lp,
        Some(Tier::Master) => MASTER_BASE + lp,
        Some(Tier::Grandmaster) => MASTER_BASE + cutoffs.grandmaster as f64 + lp,
        Some(Tier::Challenger) => MASTER_BASE + cutoffs.challenger as f64 + lp,
        Some(tier) => tier_band(tier) + division_offset(position.division) + lp,
    }
}

pub(crate) fn tier_band(tier: Tier) -> f64 {
    tier.index() as f64 * TIER_BAND_WIDTH
}

/// Missing division counts as the lowest one
pub(crate) fn division_offset(division: Option<Division>) -> f64 {
    division.map(|d| d.index() as f64 * DIVISION_WIDTH).unwrap_or(0.0)
}
