pub mod settings;
pub mod windows;

pub use settings::{AppConfig, LadderSettings, WindowSettings};
