pub mod progression;

pub use progression::{PlayerLine, ProgressionReport, ProgressionService};
