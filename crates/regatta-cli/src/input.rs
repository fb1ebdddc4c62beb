//! Season files and saved series state.

use crate::error::{CliError, Result};
use regatta_domain::SeriesState;
use regatta_engine::WeekInput;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// A season file: weeks of claims in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeasonInput {
    /// Race weeks
    #[serde(default)]
    pub weeks: Vec<WeekInput>,
}

impl SeasonInput {
    /// Parse a season from JSON.
    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Parse a season from TOML (`[[weeks]]` tables).
    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load a season file, choosing the parser by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let season = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml(&contents)?,
            Some("json") | None => Self::from_json(&contents)?,
            Some(other) => {
                return Err(CliError::InvalidInput(format!(
                    "Unsupported season file extension '.{}' (expected .json or .toml)",
                    other
                )))
            }
        };
        debug!("Loaded {} week(s) from {}", season.weeks.len(), path.display());
        Ok(season)
    }
}

/// Load a saved series state.
pub fn load_state(path: &Path) -> Result<SeriesState> {
    let contents = fs::read_to_string(path)?;
    let state: SeriesState = serde_json::from_str(&contents)?;
    debug!("Loaded state with {} week(s) from {}", state.weeks.len(), path.display());
    Ok(state)
}

/// Save a series state as pretty JSON.
pub fn save_state(path: &Path, state: &SeriesState) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, serde_json::to_string_pretty(state)?)?;
    Ok(())
}
