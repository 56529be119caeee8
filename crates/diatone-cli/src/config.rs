//! Step-pattern configuration file.
//!
//! The file is JSON of the form
//! `{ "patterns": { "<name>": [2, 2, 1, 2, 2, 2, 1] } }`. Its patterns are
//! merged over the built-in mode table, replacing built-ins of the same name.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use diatone_theory::{ModeTable, TheoryError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading a step-pattern file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read modes file '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse modes file '{}': {message}", path.display())]
    JsonParse { path: PathBuf, message: String },
    #[error("modes file '{}': {source}", path.display())]
    Pattern { path: PathBuf, source: TheoryError },
}

impl ConfigError {
    /// Path of the file that failed to load.
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::FileRead { path, .. }
            | ConfigError::JsonParse { path, .. }
            | ConfigError::Pattern { path, .. } => path,
        }
    }
}

/// Extra step patterns read from a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModesConfig {
    /// Pattern name to its seven semitone steps.
    #[serde(default)]
    pub patterns: BTreeMap<String, Vec<u8>>,
}

impl ModesConfig {
    /// Load a config file from disk.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|e| ConfigError::JsonParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Register every pattern in `table`, stopping at the first invalid one.
    pub fn apply(&self, table: &mut ModeTable) -> Result<(), TheoryError> {
        for (name, steps) in &self.patterns {
            table.insert(name, steps)?;
        }
        Ok(())
    }
}

/// Build the mode table for a command: built-ins, plus the file's patterns
/// when a path is given.
pub fn load_mode_table(path: Option<&str>) -> Result<ModeTable, ConfigError> {
    let mut table = ModeTable::new();
    let Some(path) = path else {
        return Ok(table);
    };

    let path = Path::new(path);
    let config = ModesConfig::from_file(path)?;
    config
        .apply(&mut table)
        .map_err(|source| ConfigError::Pattern {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(table)
}
