//! Configuration handling for the form

use crate::draft::{DraftStore, FileDraftStore, MemoryDraftStore};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "job_application_tui=info";

const LOG_FILE_NAME: &str = "job-application-tui.log";

/// User configuration, read from `config.json` in the config directory
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FormConfig {
    /// Directory holding the draft file
    pub draft_dir: Option<PathBuf>,
    /// Keep drafts on disk (default) or in memory only
    pub persist_drafts: Option<bool>,
    /// Show the password in clear text at startup
    pub show_password: Option<bool>,
    /// Where log output goes
    pub log_file: Option<PathBuf>,
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_filter: Option<String>,
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "job-application", "job-application-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file, defaults when it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn show_password(&self) -> bool {
        self.show_password.unwrap_or(false)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Configured log file, or one next to the drafts
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            self.draft_dir
                .clone()
                .or_else(FileDraftStore::default_dir)
                .map(|dir| dir.join(LOG_FILE_NAME))
        })
    }

    /// Build the draft store this configuration asks for
    pub fn draft_store(&self) -> Box<dyn DraftStore> {
        if !self.persist_drafts.unwrap_or(true) {
            tracing::info!("drafts kept in memory only");
            return Box::new(MemoryDraftStore::new());
        }
        let store = match &self.draft_dir {
            Some(dir) => Some(FileDraftStore::new(dir)),
            None => FileDraftStore::in_data_dir(),
        };
        match store {
            Some(store) => {
                tracing::info!(dir = %store.dir().display(), "drafts stored on disk");
                Box::new(store)
            }
            None => {
                tracing::warn!("no data directory available, drafts kept in memory only");
                Box::new(MemoryDraftStore::new())
            }
        }
    }
}
