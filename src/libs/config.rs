//! Configuration management for taskkeep.
//!
//! The configuration is a small JSON document stored next to the default task
//! file in the platform-specific application data directory. Today it only
//! decides where the task file lives, but it is split into optional modules
//! so new settings can be added without breaking existing files.
//!
//! ## Task File Resolution
//!
//! The task file used by a command is chosen in this order:
//!
//! 1. the `--file` command-line flag
//! 2. the `TASKKEEP_FILE` environment variable (a `.env` file is honoured)
//! 3. `storage.file` from `config.json`
//! 4. `tasks.json` in the application data directory
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use taskkeep::libs::config::Config;
//!
//! // Load existing configuration or fall back to defaults
//! let config = Config::read()?;
//!
//! // Resolve the task file without a command-line override
//! let path = config.task_file(None, Config::env_task_file())?;
//! println!("Tasks are stored in {}", path.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_print, msg_warning};
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Task file name used when nothing else is configured.
pub const DEFAULT_TASK_FILE_NAME: &str = "tasks.json";

/// Environment variable that overrides the configured task file.
pub const TASK_FILE_ENV: &str = "TASKKEEP_FILE";

/// Where the task list is persisted.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StorageConfig {
    /// Path of the JSON task file.
    ///
    /// Relative paths are resolved against the working directory of the
    /// process, the same way the `--file` flag is.
    pub file: PathBuf,
}

/// Root configuration object.
///
/// Unset modules are omitted from the JSON output.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageConfig>,
}

impl Config {
    /// Reads `config.json` from the application data directory.
    ///
    /// A missing file yields the default configuration. A file that exists but
    /// cannot be read or parsed is an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Reads the configuration from an explicit path.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path).with_context(|| format!("Failed to read configuration {}", path.display()))?;
        let config: Config = serde_json::from_str(&config_str).with_context(|| Message::ConfigParseError.to_string())?;
        Ok(config)
    }

    /// Like [`Config::read_from`], but an unreadable file gives the default
    /// configuration after a warning that its settings are discarded.
    pub fn read_or_default(path: &Path) -> Config {
        match Self::read_from(path) {
            Ok(config) => config,
            Err(error) => {
                msg_warning!(Message::ConfigDiscarded(format!("{:#}", error)));
                Config::default()
            }
        }
    }

    /// Saves the configuration to the application data directory, overwriting
    /// any previous file.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path).with_context(|| Message::ConfigSaveError.to_string())?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes `config.json`. Returns `false` when there was nothing to remove.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(&config_file_path).with_context(|| format!("Failed to remove configuration {}", config_file_path.display()))?;
        Ok(true)
    }

    /// Runs the interactive setup wizard, starting from the saved values.
    pub fn init() -> Result<Self> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let mut config = Self::read_or_default(&config_file_path);

        let default_file = match &config.storage {
            Some(storage) => storage.file.clone(),
            None => DataStorage::new().get_path(DEFAULT_TASK_FILE_NAME)?,
        };

        msg_print!(Message::ConfigModuleStorage);
        let file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskFile.to_string())
            .default(default_file.display().to_string())
            .interact_text()?;

        config.storage = Some(StorageConfig { file: PathBuf::from(file.trim()) });

        Ok(config)
    }

    /// Value of the `TASKKEEP_FILE` environment variable, if set and non-empty.
    pub fn env_task_file() -> Option<PathBuf> {
        env::var_os(TASK_FILE_ENV).filter(|value| !value.is_empty()).map(PathBuf::from)
    }

    /// Picks the task file: `flag`, then `env_file`, then the configured file,
    /// then the default file in the application data directory.
    pub fn task_file(&self, flag: Option<PathBuf>, env_file: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = flag.or(env_file) {
            return Ok(path);
        }
        if let Some(storage) = &self.storage {
            return Ok(storage.file.clone());
        }
        DataStorage::new().get_path(DEFAULT_TASK_FILE_NAME)
    }
}
