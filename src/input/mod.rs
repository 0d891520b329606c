pub mod loader;

pub use loader::{load_input, parse_input};
