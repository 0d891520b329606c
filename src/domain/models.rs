use serde::{Deserialize, Serialize};

pub type PlayerId = String;
pub type WindowId = String;

/// Major rank band, in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
}

impl Tier {
    pub const ALL: [Tier; 10] = [
        Tier::Iron,
        Tier::Bronze,
        Tier::Silver,
        Tier::Gold,
        Tier::Platinum,
        Tier::Emerald,
        Tier::Diamond,
        Tier::Master,
        Tier::Grandmaster,
        Tier::Challenger,
    ];

    /// 0-based position in ascending order (Iron = 0)
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Tier> {
        Self::ALL.get(index).copied()
    }

    /// Master and above have no divisions and no fixed LP ceiling
    pub fn is_apex(self) -> bool {
        self >= Tier::Master
    }

    pub fn next(self) -> Option<Tier> {
        Self::from_index(self.index() + 1)
    }

    /// Case-insensitive parse of a tier name ("GOLD", "Gold", "gold")
    pub fn parse(value: &str) -> Option<Tier> {
        let wanted = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(wanted))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Tier::Iron => "Iron",
            Tier::Bronze => "Bronze",
            Tier::Silver => "Silver",
            Tier::Gold => "Gold",
            Tier::Platinum => "Platinum",
            Tier::Emerald => "Emerald",
            Tier::Diamond => "Diamond",
            Tier::Master => "Master",
            Tier::Grandmaster => "Grandmaster",
            Tier::Challenger => "Challenger",
        }
    }
}

/// Sub-rank below Master; variants are declared lowest first so `Ord` follows progression
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Division {
    IV,
    III,
    II,
    I,
}

impl Division {
    pub const ALL: [Division; 4] = [Division::IV, Division::III, Division::II, Division::I];

    /// IV = 0 .. I = 3
    pub fn index(self) -> usize {
        self as usize
    }

    /// The division one step up, `None` from division I
    pub fn next(self) -> Option<Division> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn from_index(index: usize) -> Option<Division> {
        Self::ALL.get(index).copied()
    }

    /// Accepts roman ("II") or arabic ("2") notation
    pub fn parse(value: &str) -> Option<Division> {
        match value.trim().to_ascii_uppercase().as_str() {
            "I" | "1" => Some(Division::I),
            "II" | "2" => Some(Division::II),
            "III" | "3" => Some(Division::III),
            "IV" | "4" => Some(Division::IV),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Division::I => "I",
            Division::II => "II",
            Division::III => "III",
            Division::IV => "IV",
        }
    }
}

/// Live LP thresholds at which the two uncapped top tiers begin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankCutoffs {
    pub grandmaster: u32,
    pub challenger: u32,
}

/// One validated rank sample for one player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankSnapshot {
    pub player_id: PlayerId,
    pub tier: Option<Tier>,
    pub division: Option<Division>,
    pub league_points: i32,
    pub wins: Option<u32>,
    pub losses: Option<u32>,
    pub match_id: Option<String>,
    pub champion_id: Option<u32>,
    pub kills: Option<u32>,
    pub deaths: Option<u32>,
    pub assists: Option<u32>,
    pub win: Option<bool>,
    pub league_point_delta: Option<i32>,
    pub global_rank: Option<u32>,
    pub observed_at: String,
}

impl RankSnapshot {
    /// Bare snapshot with no counters or match context
    pub fn new(
        player_id: &str,
        tier: Option<Tier>,
        division: Option<Division>,
        league_points: i32,
        observed_at: &str,
    ) -> Self {
        Self {
            player_id: player_id.to_string(),
            tier,
            division,
            league_points,
            wins: None,
            losses: None,
            match_id: None,
            champion_id: None,
            kills: None,
            deaths: None,
            assists: None,
            win: None,
            league_point_delta: None,
            global_rank: None,
            observed_at: observed_at.to_string(),
        }
    }
}

/// Snapshot with its ladder score and parsed timestamp attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPoint {
    #[serde(flatten)]
    pub snapshot: RankSnapshot,
    pub score: f64,
    /// Epoch milliseconds
    pub ts: i64,
}

impl NormalizedPoint {
    pub fn player_id(&self) -> &str {
        &self.snapshot.player_id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    Win,
    Loss,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPoint {
    #[serde(flatten)]
    pub point: NormalizedPoint,
    /// 1-based position among the player's qualifying samples
    pub match_index: u32,
    pub delta: Option<f64>,
    pub result: Option<MatchResult>,
}

/// Identity metadata used to join results back to a roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerProfile {
    pub id: PlayerId,
    pub display_name: String,
    #[serde(default)]
    pub icon_url: Option<String>,
}

/// A selectable look-back duration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowOption {
    pub id: WindowId,
    pub duration_ms: i64,
}

impl WindowOption {
    pub fn new(id: &str, duration_ms: i64) -> Self {
        Self {
            id: id.to_string(),
            duration_ms,
        }
    }
}

// --- Input Structures ---

/// Rank sample as delivered by the data layer, before validation
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSnapshot {
    pub player_id: serde_json::Value,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default, alias = "rank")]
    pub division: Option<String>,
    #[serde(default, alias = "lp")]
    pub league_points: Option<i64>,
    #[serde(default)]
    pub wins: Option<i64>,
    #[serde(default)]
    pub losses: Option<i64>,
    #[serde(default)]
    pub match_id: serde_json::Value,
    #[serde(default)]
    pub champion_id: Option<i64>,
    #[serde(default)]
    pub kills: Option<i64>,
    #[serde(default)]
    pub deaths: Option<i64>,
    #[serde(default)]
    pub assists: Option<i64>,
    #[serde(default)]
    pub win: Option<bool>,
    #[serde(default, alias = "lpDelta")]
    pub league_point_delta: Option<i64>,
    #[serde(default)]
    pub global_rank: Option<i64>,
    #[serde(default, alias = "createdAt")]
    pub observed_at: serde_json::Value,
}

/// Everything one computation pass needs
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionInput {
    #[serde(default)]
    pub players: Vec<PlayerProfile>,
    #[serde(default)]
    pub snapshots: Vec<RawSnapshot>,
    #[serde(default)]
    pub cutoffs: Option<RankCutoffs>,
    #[serde(default)]
    pub window: Option<WindowId>,
    #[serde(default)]
    pub zoom: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_order_and_parse() {
        assert!(Tier::Iron < Tier::Diamond);
        assert!(Tier::Master < Tier::Grandmaster);
        assert_eq!(Tier::parse("GOLD"), Some(Tier::Gold));
        assert_eq!(Tier::parse(" emerald "), Some(Tier::Emerald));
        assert_eq!(Tier::parse("UNRANKED"), None);
        assert_eq!(Tier::Diamond.next(), Some(Tier::Master));
        assert_eq!(Tier::Challenger.next(), None);
        assert!(Tier::Master.is_apex());
        assert!(!Tier::Diamond.is_apex());
    }

    #[test]
    fn test_division_order_and_parse() {
        assert!(Division::IV < Division::I);
        assert_eq!(Division::IV.index(), 0);
        assert_eq!(Division::I.index(), 3);
        assert_eq!(Division::parse("iii"), Some(Division::III));
        assert_eq!(Division::parse("4"), Some(Division::IV));
        assert_eq!(Division::parse("V"), None);
        assert_eq!(Division::II.next(), Some(Division::I));
        assert_eq!(Division::I.next(), None);
    }

    #[test]
    fn test_raw_snapshot_deserializes_camel_case() {
        let json = r#"{
            "playerId": 42,
            "tier": "PLATINUM",
            "division": "II",
            "lp": 57,
            "wins": 10,
            "matchId": "EUW1_123",
            "observedAt": "2024-03-01T12:00:00Z"
        }"#;

        let raw: RawSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(raw.tier.as_deref(), Some("PLATINUM"));
        assert_eq!(raw.league_points, Some(57));
        assert_eq!(raw.wins, Some(10));
        assert!(raw.losses.is_none());
        assert_eq!(raw.match_id, serde_json::json!("EUW1_123"));
    }
}
