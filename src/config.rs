/// Service configuration, loaded from a TOML file.
///
/// Covers the knobs an installation sets once: operating mode, refresh
/// cadence, device filter, log destination, and the startup preset. Every
/// field has a default so a missing or empty file yields a working test-mode
/// configuration.

use serde::Deserialize;

use crate::model::{Mode, MonitorError};
use crate::profile::ProfileStore;

/// Seconds between full feed refreshes when the collaborator polls.
/// Zero means manual refresh only.
const DEFAULT_REFRESH_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Operating mode. New installations start in test mode so uncalibrated
    /// probes do not page anyone.
    pub mode: Mode,
    /// Only readings from this device are expected; `None` accepts any.
    pub device_id: Option<String>,
    /// Poll interval for the external refresh timer, in seconds.
    pub refresh_interval_secs: u64,
    /// Optional log file path; console-only when absent.
    pub log_file: Option<String>,
    /// Preset selected at startup; the registry default when absent.
    pub preset: Option<String>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        MonitorConfig {
            mode: Mode::Test,
            device_id: None,
            refresh_interval_secs: DEFAULT_REFRESH_SECS,
            log_file: None,
            preset: None,
        }
    }
}

impl MonitorConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, MonitorError> {
        toml::from_str(text).map_err(|e| MonitorError::ConfigError(e.to_string()))
    }

    /// Loads a configuration file from disk.
    pub fn load(path: &str) -> Result<Self, MonitorError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| MonitorError::ConfigError(format!("{}: {}", path, e)))?;
        Self::from_toml_str(&text)
    }

    /// Builds the initial profile store for this configuration. An unknown
    /// preset key is a configuration error: typos should surface at
    /// startup, not as silently-default thresholds.
    pub fn initial_store(&self) -> Result<ProfileStore, MonitorError> {
        let mut store = ProfileStore::new(self.mode);
        if let Some(preset) = &self.preset {
            store.select_preset(preset)?;
        }
        Ok(store)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
