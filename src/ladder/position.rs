use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Division, RankCutoffs, RankSnapshot, Tier};
use crate::ladder::scorer::{
    DIVISION_WIDTH, MASTER_BASE, TIER_BAND_WIDTH, division_offset, tier_band,
};

const APEX_CHECKPOINT_STEP: u32 = 50;

/// A place on the in-game ladder: tier, division and clamped LP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankPosition {
    pub tier: Option<Tier>,
    pub division: Option<Division>,
    pub league_points: u32,
}

impl RankPosition {
    pub fn new(tier: Option<Tier>, division: Option<Division>, league_points: u32) -> Self {
        Self {
            tier,
            division,
            league_points,
        }
    }

    pub fn from_snapshot(snapshot: &RankSnapshot) -> Self {
        Self::new(
            snapshot.tier,
            snapshot.division,
            snapshot.league_points.max(0) as u32,
        )
    }

    /// The position one division (or tier) up, at 0 LP.
    ///
    /// `None` for unranked and for apex tiers, whose promotion point
    /// depends on live cutoffs.
    pub fn promoted(&self) -> Option<RankPosition> {
        let tier = self.tier.filter(|t| !t.is_apex())?;
        let division = self.division.unwrap_or(Division::IV);

        match division.next() {
            Some(next) => Some(Self::new(Some(tier), Some(next), 0)),
            None => {
                let next_tier = tier.next()?;
                let next_division = (!next_tier.is_apex()).then_some(Division::IV);
                Some(Self::new(Some(next_tier), next_division, 0))
            }
        }
    }
}

impl fmt::Display for RankPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.tier, self.division) {
            (None, _) => write!(f, "Unranked"),
            (Some(tier), Some(division)) if !tier.is_apex() => write!(
                f,
                "{} {} {} LP",
                tier.as_str(),
                division.as_str(),
                self.league_points
            ),
            (Some(tier), _) => write!(f, "{} {} LP", tier.as_str(), self.league_points),
        }
    }
}

/// Score of the next rank-up from this position, when one is fixed
pub fn promotion_target(position: &RankPosition) -> Option<f64> {
    let next = position.promoted()?;
    match next.tier? {
        Tier::Master => Some(MASTER_BASE),
        tier => Some(tier_band(tier) + division_offset(next.division)),
    }
}

/// Next multiple of 50 LP above the current LP, on the same tier floor
pub fn apex_checkpoint(score: f64, league_points: u32) -> f64 {
    let floor = score - league_points as f64;
    let next = (league_points / APEX_CHECKPOINT_STEP + 1) * APEX_CHECKPOINT_STEP;
    floor + next as f64
}

/// Map a ladder score back onto a rank position, for axis and summary labels.
///
/// Scores below the Iron floor read as Iron IV 0 LP. Master LP reaching the
/// Grandmaster cutoff shares its score with Grandmaster and reads as such.
pub fn rank_at_score(score: f64, cutoffs: &RankCutoffs) -> RankPosition {
    let score = if score.is_finite() { score.max(0.0) } else { 0.0 };

    if score >= MASTER_BASE {
        return apex_position(score - MASTER_BASE, cutoffs);
    }

    let tier_index = (score / TIER_BAND_WIDTH).floor() as usize;
    let tier = Tier::from_index(tier_index).unwrap_or(Tier::Diamond);
    let within_tier = score - tier_band(tier);
    let division = Division::from_index((within_tier / DIVISION_WIDTH).floor() as usize)
        .unwrap_or(Division::I);
    let lp = within_tier - division_offset(Some(division));

    RankPosition::new(Some(tier), Some(division), lp.floor() as u32)
}

fn apex_position(above_master: f64, cutoffs: &RankCutoffs) -> RankPosition {
    let challenger = cutoffs.challenger as f64;
    let grandmaster = cutoffs.grandmaster as f64;

    let (tier, floor) = if above_master >= challenger {
        (Tier::Challenger, challenger)
    } else if above_master >= grandmaster {
        (Tier::Grandmaster, grandmaster)
    } else {
        (Tier::Master, 0.0)
    };

    RankPosition::new(Some(tier), None, (above_master - floor).floor() as u32)
}
