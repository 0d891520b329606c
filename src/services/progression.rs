use log::{info, warn};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::settings::AppConfig;
use crate::domain::{
    self, MatchResult, PlayerId, PlayerProfile, ProgressionInput, RankCutoffs, SeriesPoint,
    WindowId, WindowOption,
};
use crate::ladder::RankPosition;
use crate::timeline::{self, ChartDomain, SeriesMap, WindowSummary};

/// One player's row alongside the chart
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerLine {
    pub player_id: PlayerId,
    pub display_name: String,
    pub icon_url: Option<String>,
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub net_delta: f64,
    pub current: RankPosition,
}

/// Everything the presentation layer needs for one selection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionReport {
    pub window: WindowOption,
    pub zoom: f64,
    pub cutoffs: RankCutoffs,
    pub players: Vec<PlayerLine>,
    pub profiles: BTreeMap<PlayerId, PlayerProfile>,
    pub series_by_player: SeriesMap,
    pub availability_by_window: BTreeMap<WindowId, bool>,
    pub range_summaries: Vec<WindowSummary>,
    pub chart_domain: Option<ChartDomain>,
}

pub struct ProgressionService {
    config: AppConfig,
}

impl ProgressionService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run one full computation pass for `now` (epoch milliseconds)
    pub fn run(&self, input: &ProgressionInput, now: i64) -> ProgressionReport {
        info!("=== Computing Rank Progression ===");

        let cutoffs = self.resolve_cutoffs(input.cutoffs);
        let window = self.resolve_window(input.window.as_deref());
        let zoom = self.resolve_zoom(input.zoom);

        // Step 1: Validate and score every snapshot
        let snapshots = domain::ingest_snapshots(&input.snapshots);
        let points = timeline::normalize(&snapshots, &cutoffs);
        info!(
            "  → Normalized {} of {} snapshots",
            points.len(),
            input.snapshots.len()
        );

        // Step 2: Which time ranges have anything to show
        let availability_by_window =
            timeline::availability(&points, &self.config.windows.options, now);

        // Step 3: Selected window, zoom, series
        let windowed = timeline::filter_by_window(&points, window.duration_ms, now);
        let visible = timeline::apply_zoom(&windowed, zoom);
        let series_by_player = timeline::build_series(&visible);
        info!(
            "  → Window {} (zoom {}): {} points, {} players with movement",
            window.id,
            zoom,
            visible.len(),
            series_by_player.len()
        );

        // Step 4: Summaries over raw points and axis bounds over the series
        let range_summaries =
            timeline::summarize_windows(&points, &self.config.windows.summary_windows, now);
        let chart_domain = timeline::compute_domain(&series_by_player);
        let profiles: BTreeMap<PlayerId, PlayerProfile> = input
            .players
            .iter()
            .map(|p| (p.id.clone(), p.clone()))
            .collect();
        let players = build_player_lines(&series_by_player, &profiles);

        ProgressionReport {
            window,
            zoom,
            cutoffs,
            players,
            profiles,
            series_by_player,
            availability_by_window,
            range_summaries,
            chart_domain,
        }
    }

    fn resolve_cutoffs(&self, cutoffs: Option<RankCutoffs>) -> RankCutoffs {
        cutoffs.unwrap_or_else(|| {
            let fallback = self.config.ladder.fallback_cutoffs;
            warn!(
                "No rank cutoffs supplied, using nominal Grandmaster {} / Challenger {}",
                fallback.grandmaster, fallback.challenger
            );
            fallback
        })
    }

    fn resolve_window(&self, id: Option<&str>) -> WindowOption {
        let windows = &self.config.windows;
        match id {
            None => windows.default_window.clone(),
            Some(id) => windows.find(id).cloned().unwrap_or_else(|| {
                warn!(
                    "Unknown window '{}', falling back to {}",
                    id, windows.default_window.id
                );
                windows.default_window.clone()
            }),
        }
    }

    fn resolve_zoom(&self, zoom: Option<f64>) -> f64 {
        match zoom {
            Some(z) if z.is_finite() => z.clamp(1.0, self.config.windows.max_zoom),
            _ => 1.0,
        }
    }
}

impl ProgressionReport {
    /// Profile name for a player id, the id itself when no profile was supplied
    pub fn display_name<'a>(&'a self, player_id: &'a str) -> &'a str {
        self.profiles
            .get(player_id)
            .map(|p| p.display_name.as_str())
            .unwrap_or(player_id)
    }
}

fn build_player_lines(
    series: &SeriesMap,
    profiles: &BTreeMap<PlayerId, PlayerProfile>,
) -> Vec<PlayerLine> {
    series
        .iter()
        .filter_map(|(player_id, points)| {
            build_player_line(player_id, points, profiles.get(player_id))
        })
        .collect()
}

fn build_player_line(
    player_id: &str,
    points: &[SeriesPoint],
    profile: Option<&PlayerProfile>,
) -> Option<PlayerLine> {
    let first = points.first()?;
    let last = points.last()?;

    Some(PlayerLine {
        player_id: player_id.to_string(),
        display_name: profile
            .map(|p| p.display_name.clone())
            .unwrap_or_else(|| player_id.to_string()),
        icon_url: profile.and_then(|p| p.icon_url.clone()),
        games: points.len() as u32,
        wins: count_results(points, MatchResult::Win),
        losses: count_results(points, MatchResult::Loss),
        net_delta: last.point.score - first.point.score,
        current: RankPosition::from_snapshot(&last.point.snapshot),
    })
}

fn count_results(points: &[SeriesPoint], result: MatchResult) -> u32 {
    points.iter().filter(|p| p.result == Some(result)).count() as u32
}
