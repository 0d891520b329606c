use colored::Colorize;
use std::fmt::Write as _;

use crate::ladder::rank_at_score;
use crate::services::ProgressionReport;
use crate::timeline::RangeMove;

/// Human-readable rendering of a report for the terminal
pub fn render_text(report: &ProgressionReport) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} window {} (zoom x{}), cutoffs GM {} / Challenger {}",
        "Rank progression:".bold(),
        report.window.id,
        report.zoom,
        report.cutoffs.grandmaster,
        report.cutoffs.challenger
    );

    render_availability(report, &mut out);
    render_players(report, &mut out);
    render_summaries(report, &mut out);
    render_domain(report, &mut out);

    out
}

fn render_availability(report: &ProgressionReport, out: &mut String) {
    let windows: Vec<String> = report
        .availability_by_window
        .iter()
        .map(|(id, available)| {
            if *available {
                id.normal().to_string()
            } else {
                id.dimmed().to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "Windows: {}", windows.join(" "));
}

fn render_players(report: &ProgressionReport, out: &mut String) {
    if report.players.is_empty() {
        let _ = writeln!(out, "No player has two or more games in this window.");
        return;
    }

    let _ = writeln!(out, "\n{}", "Players".bold());
    for line in &report.players {
        let _ = writeln!(
            out,
            "  {:<24} {:>3} games {:>3}W {:>3}L  {:>8}  now {}",
            line.display_name,
            line.games,
            line.wins,
            line.losses,
            signed(line.net_delta),
            line.current
        );
    }
}

fn render_summaries(report: &ProgressionReport, out: &mut String) {
    let _ = writeln!(out, "\n{}", "Biggest movers".bold());
    for window in &report.range_summaries {
        let gain = describe_move(report, window.summary.best_gain.as_ref());
        let loss = describe_move(report, window.summary.best_loss.as_ref());
        let _ = writeln!(out, "  {:<4} gain {}  loss {}", window.window_id, gain, loss);
    }
}

fn render_domain(report: &ProgressionReport, out: &mut String) {
    if let Some(domain) = report.chart_domain {
        let _ = writeln!(
            out,
            "\nAxis: {} .. {} over {} games",
            rank_at_score(domain.min_score, &report.cutoffs),
            rank_at_score(domain.max_score, &report.cutoffs),
            domain.max_match_index
        );
    }
}

fn describe_move(report: &ProgressionReport, movement: Option<&RangeMove>) -> String {
    match movement {
        Some(m) => format!(
            "{} {} ({} -> {})",
            report.display_name(&m.player_id),
            signed(m.delta),
            rank_at_score(m.start_score, &report.cutoffs),
            rank_at_score(m.end_score, &report.cutoffs)
        ),
        None => "-".dimmed().to_string(),
    }
}

fn signed(delta: f64) -> String {
    let text = format!("{:+.0} LP", delta);
    if delta > 0.0 {
        text.green().to_string()
    } else if delta < 0.0 {
        text.red().to_string()
    } else {
        text
    }
}
