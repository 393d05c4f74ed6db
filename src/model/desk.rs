use std::path::PathBuf;

use super::config::DeskConfig;
use crate::ops::triage::TriageStore;
use crate::parse::IngestError;

/// A fully loaded support desk
#[derive(Debug)]
pub struct Desk {
    /// Path to the `desk/` directory, if one was discovered
    pub desk_dir: Option<PathBuf>,
    /// Parsed desk.toml (defaults when no desk exists)
    pub config: DeskConfig,
    /// Validated records
    pub store: TriageStore,
    /// Records rejected at ingestion
    pub rejected: Vec<IngestError>,
    /// Human-readable name of the data source
    pub source_name: String,
}
