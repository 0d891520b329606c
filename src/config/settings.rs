use crate::config::windows::{default_summary_windows, default_window_options, window};
use crate::domain::{RankCutoffs, WindowOption};

pub struct LadderSettings {
    /// Used only when an input bundle carries no cutoffs of its own.
    pub fallback_cutoffs: RankCutoffs,
}

impl Default for LadderSettings {
    fn default() -> Self {
        Self {
            fallback_cutoffs: RankCutoffs {
                grandmaster: 200,
                challenger: 500,
            },
        }
    }
}

pub struct WindowSettings {
    pub options: Vec<WindowOption>,
    pub summary_windows: Vec<WindowOption>,
    pub default_window: WindowOption,
    pub max_zoom: f64,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            options: default_window_options(),
            summary_windows: default_summary_windows(),
            default_window: window("7d", 7),
            max_zoom: 16.0,
        }
    }
}

impl WindowSettings {
    pub fn find(&self, id: &str) -> Option<&WindowOption> {
        self.options.iter().find(|w| w.id == id)
    }
}

pub struct AppConfig {
    pub ladder: LadderSettings,
    pub windows: WindowSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            ladder: LadderSettings::default(),
            windows: WindowSettings::default(),
        }
    }
}
