use anyhow::Result;
use log::info;
use std::fs;
use std::path::Path;

use crate::domain::ProgressionInput;
use crate::errors::{with_load_context, with_parse_context};

/// Load a JSON input bundle (players, snapshots, cutoffs, selection) from disk
pub fn load_input<P: AsRef<Path>>(path: P) -> Result<ProgressionInput> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let json = with_load_context(fs::read_to_string(path), &display)?;
    let input = parse_input(&json)?;

    info!(
        "Loaded {} snapshots for {} players from {}",
        input.snapshots.len(),
        input.players.len(),
        display
    );
    Ok(input)
}

pub fn parse_input(json: &str) -> Result<ProgressionInput> {
    with_parse_context(serde_json::from_str(json), "progression input")
}
