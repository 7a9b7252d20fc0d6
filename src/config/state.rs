// Application state module
// Immutable process-wide state shared by every connection

use std::path::PathBuf;

use super::types::Config;

/// Shared server state, read-only after startup.
///
/// Constructed once in `main` and passed by `Arc` into the accept loop; no
/// synchronization is needed because nothing here mutates after startup.
pub struct AppState {
    /// Absolute document root
    pub root: PathBuf,
    /// Index file names tried for directory requests
    pub index_files: Vec<String>,
    /// Whether to print one access-log line per request
    pub access_log: bool,
}

impl AppState {
    pub fn new(config: &Config, root: PathBuf) -> Self {
        Self {
            root,
            index_files: config.routes.index_files.clone(),
            access_log: config.logging.access_log,
        }
    }
}
