use anyhow::Result;

use rank_progression::cli::Command;
use rank_progression::{handle_completions, handle_report, handle_score, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Report {
            input,
            now,
            window,
            zoom,
            json,
        } => handle_report(input, now.as_deref(), window.as_deref(), *zoom, *json),
        Command::Score {
            tier,
            division,
            lp,
            grandmaster,
            challenger,
        } => handle_score(
            tier.as_deref(),
            division.as_deref(),
            *lp,
            *grandmaster,
            *challenger,
        ),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
