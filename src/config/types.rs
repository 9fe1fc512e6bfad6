use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default log filter, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Where preset filters are persisted
    #[serde(default)]
    pub storage_path: Option<PathBuf>,

    /// Flush storage after every preset change
    #[serde(default = "default_true")]
    pub autosave: bool,
}

// Default values
fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            storage_path: None,
            autosave: true,
        }
    }
}

impl Config {
    /// Storage file path, falling back to the user data directory
    pub fn resolved_storage_path(&self) -> PathBuf {
        if let Some(path) = &self.storage_path {
            return path.clone();
        }

        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("trade_market")
            .join("storage.json")
    }
}
