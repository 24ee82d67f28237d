//! Directory holding taskkeep's own files: `config.json` and the default
//! `tasks.json`.
//!
//! `TASKKEEP_DATA_DIR` points it anywhere. Otherwise it is the platform data
//! directory joined with `taskkeep`:
//!
//! - Linux and other Unix: `$XDG_DATA_HOME`, or `~/.local/share`
//! - macOS: `~/Library/Application Support`
//! - Windows: `%LOCALAPPDATA%`

use anyhow::{Context, Result};
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "taskkeep";

/// Environment variable replacing the whole data directory.
pub const DATA_DIR_ENV: &str = "TASKKEEP_DATA_DIR";

#[derive(Debug, Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        match non_empty_var(DATA_DIR_ENV) {
            Some(dir) => Self::at(dir),
            None => Self::at(platform_data_dir().join(APP_NAME)),
        }
    }

    /// Storage rooted at an explicit directory.
    pub fn at(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Path of `file_name` inside the data directory, which is created on
    /// first use.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.base_path).with_context(|| format!("Failed to create data directory {}", self.base_path.display()))?;
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty_var(name: &str) -> Option<OsString> {
    env::var_os(name).filter(|value| !value.is_empty())
}

fn platform_data_dir() -> PathBuf {
    let home = || non_empty_var("HOME").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));

    if cfg!(windows) {
        non_empty_var("LOCALAPPDATA").map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."))
    } else if cfg!(target_os = "macos") {
        home().join("Library").join("Application Support")
    } else {
        non_empty_var("XDG_DATA_HOME").map(PathBuf::from).unwrap_or_else(|| home().join(".local").join("share"))
    }
}
