use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use history_logging::{history_debug, history_info};
use history_store::StoreSettings;
use serde::Deserialize;
use thiserror::Error;

use super::cli::Cli;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub title: String,
    pub store_path: PathBuf,
    pub export_dir: Option<PathBuf>,
    pub max_entries: usize,
    pub remember_duplicates: bool,
    pub share_command: Option<String>,
    pub share_subject: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            title: "History".to_string(),
            store_path: PathBuf::from("scan_history.json"),
            export_dir: Some(PathBuf::from("exports")),
            max_entries: 2000,
            remember_duplicates: false,
            share_command: None,
            share_subject: "Barcode Scanner History".to_string(),
        }
    }
}

impl HistoryConfig {
    /// Reads `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                history_debug!("No config at {:?}; using defaults", path);
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let config = ron::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        history_info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Command-line flags win over file values.
    pub fn apply_cli(mut self, cli: &Cli) -> Self {
        if let Some(store) = &cli.store {
            self.store_path = store.clone();
        }
        if let Some(dir) = &cli.export_dir {
            self.export_dir = Some(dir.clone());
        }
        if let Some(command) = &cli.share_command {
            self.share_command = Some(command.clone());
        }
        self
    }

    pub fn store_settings(&self) -> StoreSettings {
        StoreSettings {
            max_entries: self.max_entries,
            remember_duplicates: self.remember_duplicates,
            export_dir: self.export_dir.clone(),
            ..StoreSettings::default()
        }
    }
}
