pub mod ingestion;
pub mod models;

pub use ingestion::{ingest_snapshot, ingest_snapshots};
pub use models::*;
