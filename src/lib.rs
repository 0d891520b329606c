pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod input;
pub mod ladder;
pub mod report;
pub mod services;
pub mod timeline;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use std::path::Path;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::domain::{Division, RankCutoffs, Tier};
use crate::ladder::RankPosition;
use crate::services::ProgressionService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_report(
    input_path: &Path,
    now: Option<&str>,
    window: Option<&str>,
    zoom: Option<f64>,
    json: bool,
) -> Result<()> {
    let mut bundle = input::load_input(input_path)?;
    if let Some(window) = window {
        bundle.window = Some(window.to_string());
    }
    if zoom.is_some() {
        bundle.zoom = zoom;
    }

    let now = resolve_now(now)?;
    let service = ProgressionService::new(AppConfig::new());
    let progression = service.run(&bundle, now);

    if json {
        let text =
            serde_json::to_string_pretty(&progression).context("Failed to serialize report")?;
        println!("{}", text);
    } else {
        print!("{}", report::render_text(&progression));
    }
    Ok(())
}

pub fn handle_score(
    tier: Option<&str>,
    division: Option<&str>,
    lp: i32,
    grandmaster: Option<u32>,
    challenger: Option<u32>,
) -> Result<()> {
    let nominal = AppConfig::new().ladder.fallback_cutoffs;
    let cutoffs = RankCutoffs {
        grandmaster: grandmaster.unwrap_or(nominal.grandmaster),
        challenger: challenger.unwrap_or(nominal.challenger),
    };

    let tier = match tier {
        Some(name) => Some(Tier::parse(name).with_context(|| format!("Unknown tier: {}", name))?),
        None => None,
    };
    let division = match division {
        Some(name) => Some(
            Division::parse(name).with_context(|| format!("Unknown division: {}", name))?,
        ),
        None => None,
    };

    let position = RankPosition::new(tier, division, lp.max(0) as u32);
    let score = ladder::score_position(&position, &cutoffs);
    println!("{} = {}", position, score);
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn resolve_now(now: Option<&str>) -> Result<i64> {
    match now {
        Some(value) => timeline::parse_timestamp(value)
            .with_context(|| format!("Failed to parse --now timestamp: {}", value)),
        None => Ok(Utc::now().timestamp_millis()),
    }
}
