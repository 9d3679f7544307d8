//! Path utilities for bubbletrace data directories

use std::path::PathBuf;
use std::sync::OnceLock;

/// Global storage for custom data directory path
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Initialize the data directory with an optional custom path.
/// Must be called early in main() before any other path functions are used.
/// If custom_path is None, uses the default ~/.bubbletrace location.
pub fn init_data_dir(custom_path: Option<PathBuf>) {
    let path = custom_path.unwrap_or_else(default_data_dir);
    // Ignore error if already set (shouldn't happen in normal usage)
    if DATA_DIR.set(path.clone()).is_err() {
        let existing = DATA_DIR
            .get()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<unknown>".to_string());
        tracing::debug!(
            path = %path.display(),
            existing = %existing,
            "Data directory already initialized"
        );
    }
}

/// Get the default data directory path (~/.bubbletrace)
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".bubbletrace"))
        .unwrap_or_else(|| PathBuf::from(".bubbletrace"))
}

/// Get the base data directory.
/// Returns the custom path if set via init_data_dir(), otherwise ~/.bubbletrace
pub fn data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Get the config file path (~/.bubbletrace/config.toml)
pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}

/// Get the logs directory (~/.bubbletrace/logs)
pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

/// Get the default log file path (~/.bubbletrace/logs/bubbletrace.log)
pub fn log_file_path() -> PathBuf {
    logs_dir().join("bubbletrace.log")
}
