use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rank-progression", author, version, about = "ranked ladder progression engine")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Compute series, summaries and chart bounds from an input bundle
    Report {
        /// JSON file with players, snapshots and cutoffs
        #[arg(short, long)]
        input: PathBuf,
        /// Reference time (RFC 3339), defaults to the current time
        #[arg(long)]
        now: Option<String>,
        /// Window id (24h, 7d, 30d, 90d), overrides the bundle's selection
        #[arg(short, long)]
        window: Option<String>,
        /// Zoom factor toward the most recent data, overrides the bundle's value
        #[arg(short, long)]
        zoom: Option<f64>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the ladder score of a single rank
    Score {
        /// Tier name, e.g. gold or GRANDMASTER
        #[arg(short, long)]
        tier: Option<String>,
        /// Division (I-IV)
        #[arg(short, long)]
        division: Option<String>,
        /// League points
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        lp: i32,
        /// Grandmaster cutoff (optional, defaults to the nominal value)
        #[arg(long)]
        grandmaster: Option<u32>,
        /// Challenger cutoff (optional, defaults to the nominal value)
        #[arg(long)]
        challenger: Option<u32>,
    },
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
