use serde::Deserialize;
use std::path::Path;

use crate::common::error::AppError;

/// Roster used when no config file is given.
pub const DEFAULT_PARTICIPANTS: [&str; 3] = ["Mustafa", "Adhi", "Karan"];

/// Session settings, read from JSON.
///
/// Missing fields fall back to their defaults:
///
/// ```json
/// { "participants": ["Mustafa", "Adhi", "Karan"], "temporary": ["Priya"] }
/// ```
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Fixed roster, in display order.
    pub participants: Vec<String>,
    /// Members added on top of the fixed roster at startup.
    pub temporary: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            participants: DEFAULT_PARTICIPANTS.iter().map(|n| n.to_string()).collect(),
            temporary: Vec::new(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }
}
