use crate::domain::WindowOption;

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Build a look-back window spanning a whole number of days
pub fn window(id: &str, days: i64) -> WindowOption {
    WindowOption::new(id, days * MS_PER_DAY)
}

/// Time ranges offered to the user when picking a chart window
pub fn default_window_options() -> Vec<WindowOption> {
    vec![
        window("24h", 1),
        window("7d", 7),
        window("30d", 30),
        window("90d", 90),
    ]
}

/// Windows the "most gained / most lost" summaries are computed over
pub fn default_summary_windows() -> Vec<WindowOption> {
    vec![window("24h", 1), window("7d", 7), window("30d", 30)]
}
