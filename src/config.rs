use crate::engine::EngineId;
use crate::error::Error;
use serde::Deserialize;
use std::fs::read_to_string;
use std::path::Path;

/// Transport used to enumerate processes on a remote machine.
pub const DEFAULT_REMOTE_TRANSPORT: &str = "Remote (no authentication)";
/// Default number of targets kept in history.
pub const DEFAULT_HISTORY_SIZE: usize = 10;

/// Re-attach configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Engines never added into the engine catalog.
    pub ignored_engines: Vec<EngineId>,
    /// Name of the host transport used for remote targets.
    pub remote_transport: String,
    /// Capacity of the in-memory target history.
    pub history_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignored_engines: vec![],
            remote_transport: DEFAULT_REMOTE_TRANSPORT.to_string(),
            history_size: DEFAULT_HISTORY_SIZE,
        }
    }
}

impl Config {
    /// Parse configuration from a TOML document, missing keys take default values.
    pub fn from_toml(src: &str) -> Result<Self, Error> {
        Ok(toml::de::from_str(src)?)
    }

    /// Read configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let src = read_to_string(path)?;
        Self::from_toml(&src)
    }
}
