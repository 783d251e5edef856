/// Core data types for the aquaculture water-quality monitoring service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no I/O and no evaluation logic, only types, display metadata,
/// and the service error enum.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// The five water-quality parameters reported by the sensor package.
///
/// Salinity is displayed and exported but never alerted on: it has no entry
/// in threshold profiles and resolves to the wide fallback range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Temperature,
    Ph,
    DissolvedOxygen,
    Ammonia,
    Salinity,
}

/// Parameters evaluated for alerts, in the fixed iteration order used by
/// alert generation and scoring. Salinity is deliberately absent.
pub const ALERT_PARAMETERS: [Parameter; 4] = [
    Parameter::Temperature,
    Parameter::Ph,
    Parameter::DissolvedOxygen,
    Parameter::Ammonia,
];

/// All reported parameters, in display/export column order.
pub const ALL_PARAMETERS: [Parameter; 5] = [
    Parameter::Temperature,
    Parameter::Ph,
    Parameter::DissolvedOxygen,
    Parameter::Ammonia,
    Parameter::Salinity,
];

impl Parameter {
    /// Canonical snake_case name, as used in feed payloads and alert ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            Parameter::Temperature => "temperature",
            Parameter::Ph => "ph",
            Parameter::DissolvedOxygen => "dissolved_oxygen",
            Parameter::Ammonia => "ammonia",
            Parameter::Salinity => "salinity",
        }
    }

    /// Parses a canonical parameter name. Returns `None` for unknown names;
    /// callers degrade to the fallback range rather than failing.
    pub fn from_name(name: &str) -> Option<Parameter> {
        match name {
            "temperature" => Some(Parameter::Temperature),
            "ph" => Some(Parameter::Ph),
            "dissolved_oxygen" => Some(Parameter::DissolvedOxygen),
            "ammonia" => Some(Parameter::Ammonia),
            "salinity" => Some(Parameter::Salinity),
            _ => None,
        }
    }

    /// Human-readable label used in alert messages and export headers.
    pub fn label(&self) -> &'static str {
        match self {
            Parameter::Temperature => "Temperature",
            Parameter::Ph => "pH Level",
            Parameter::DissolvedOxygen => "Dissolved Oxygen",
            Parameter::Ammonia => "Ammonia",
            Parameter::Salinity => "Salinity",
        }
    }

    /// Measurement unit. pH is dimensionless and renders without a unit.
    pub fn unit(&self) -> &'static str {
        match self {
            Parameter::Temperature => "°C",
            Parameter::Ph => "",
            Parameter::DissolvedOxygen => "mg/L",
            Parameter::Ammonia => "ppm",
            Parameter::Salinity => "ppt",
        }
    }

    /// Decimal places for displaying a value of this parameter.
    pub fn decimals(&self) -> usize {
        match self {
            Parameter::Temperature => 1,
            Parameter::Ph => 2,
            Parameter::DissolvedOxygen => 2,
            Parameter::Ammonia => 3,
            Parameter::Salinity => 2,
        }
    }

    /// Formats a value with this parameter's decimal places.
    pub fn format_value(&self, value: f64) -> String {
        format!("{:.*}", self.decimals(), value)
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Reading types
// ---------------------------------------------------------------------------

/// A single timestamped snapshot of all sensor channels for one device.
///
/// Corresponds to one row of the sensor readings feed. Any channel may be
/// `None` when the sensor did not report; a missing value can never produce
/// an alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub device_id: String,
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub ph: Option<f64>,
    #[serde(default)]
    pub dissolved_oxygen: Option<f64>,
    #[serde(default)]
    pub ammonia: Option<f64>,
    #[serde(default)]
    pub salinity: Option<f64>,
}

impl SensorReading {
    /// Returns the value of the given parameter, if the sensor reported one.
    pub fn value(&self, parameter: Parameter) -> Option<f64> {
        match parameter {
            Parameter::Temperature => self.temperature,
            Parameter::Ph => self.ph,
            Parameter::DissolvedOxygen => self.dissolved_oxygen,
            Parameter::Ammonia => self.ammonia,
            Parameter::Salinity => self.salinity,
        }
    }
}

// ---------------------------------------------------------------------------
// Threshold types
// ---------------------------------------------------------------------------

/// Inclusive safe range for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRange {
    pub min: f64,
    pub max: f64,
}

/// Range returned for parameters with no profile entry (salinity, unknown
/// names). Wide enough that the evaluator reports "safe" rather than raising
/// false alerts.
pub const FALLBACK_RANGE: ThresholdRange = ThresholdRange { min: 0.0, max: 100.0 };

/// Safe ranges for the four alert-eligible parameters.
///
/// Field names match the canonical parameter names so the serialized form is
/// the same document shape the dashboard exports and imports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdProfile {
    pub temperature: ThresholdRange,
    pub ph: ThresholdRange,
    pub dissolved_oxygen: ThresholdRange,
    pub ammonia: ThresholdRange,
}

impl ThresholdProfile {
    /// Returns the profile entry for a parameter, `None` for parameters the
    /// profile does not cover (salinity).
    pub fn range_for(&self, parameter: Parameter) -> Option<ThresholdRange> {
        match parameter {
            Parameter::Temperature => Some(self.temperature),
            Parameter::Ph => Some(self.ph),
            Parameter::DissolvedOxygen => Some(self.dissolved_oxygen),
            Parameter::Ammonia => Some(self.ammonia),
            Parameter::Salinity => None,
        }
    }

    /// Resolves the range for a parameter, falling back to the wide default
    /// for uncovered parameters. Total: the evaluator must always get a
    /// range.
    pub fn resolve(&self, parameter: Parameter) -> ThresholdRange {
        self.range_for(parameter).unwrap_or(FALLBACK_RANGE)
    }

    /// Replaces the entry for one parameter, ignoring parameters the profile
    /// does not cover.
    pub fn set(&mut self, parameter: Parameter, range: ThresholdRange) {
        match parameter {
            Parameter::Temperature => self.temperature = range,
            Parameter::Ph => self.ph = range,
            Parameter::DissolvedOxygen => self.dissolved_oxygen = range,
            Parameter::Ammonia => self.ammonia = range,
            Parameter::Salinity => {}
        }
    }
}

/// Operating mode selecting which default profile backs resolution.
///
/// Installations start in test mode for sensor calibration (wide ranges) and
/// switch to production once the probes are trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Test,
    Production,
}

// ---------------------------------------------------------------------------
// Alert types
// ---------------------------------------------------------------------------

/// Canonical alert severity, in ascending order.
///
/// The legacy label "warning" (emitted by an earlier alert generation) is
/// accepted as a synonym for `Medium` when decoding, never when encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    #[serde(alias = "warning")]
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of an alert record. Generation always produces `Active`;
/// acknowledgment removes alerts from the working list rather than flipping
/// this flag, so `Acknowledged` only appears in externally supplied records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Active,
    Acknowledged,
}

/// An out-of-range or near-limit condition for one parameter.
///
/// The active alert set is regenerated from scratch on every reading, so an
/// `Alert` is a pure function of (reading, profile); there is no alert log.
/// `id` is derived from the parameter and the reading timestamp, making
/// generation idempotent per reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub parameter: Parameter,
    pub severity: Severity,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub status: AlertStatus,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise from configuration, preset management, and export.
///
/// Evaluation itself never fails: missing values are safe, unknown parameters
/// resolve to the fallback range, and malformed profiles (`min > max`) are a
/// documented caller-contract violation rather than a guarded condition.
#[derive(Debug, PartialEq)]
pub enum MonitorError {
    /// A feed payload or configuration document could not be deserialized.
    ParseError(String),
    /// The named preset does not exist (neither built-in nor custom).
    PresetNotFound(String),
    /// Rename/delete attempted on a locked custom preset.
    PresetLocked(String),
    /// Rename/delete attempted on a built-in preset.
    PresetReadOnly(String),
    /// A custom preset key collides with an existing preset.
    DuplicatePreset(String),
    /// The reading window could not be serialized.
    ExportError(String),
    /// The service configuration file is missing or malformed.
    ConfigError(String),
}

impl std::fmt::Display for MonitorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MonitorError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            MonitorError::PresetNotFound(key) => write!(f, "Preset not found: {}", key),
            MonitorError::PresetLocked(key) => {
                write!(f, "Preset is locked, unlock it first: {}", key)
            }
            MonitorError::PresetReadOnly(key) => {
                write!(f, "Built-in presets cannot be modified: {}", key)
            }
            MonitorError::DuplicatePreset(key) => write!(f, "Preset already exists: {}", key),
            MonitorError::ExportError(msg) => write!(f, "Export failed: {}", msg),
            MonitorError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for MonitorError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_names_round_trip() {
        for param in ALL_PARAMETERS {
            assert_eq!(
                Parameter::from_name(param.as_str()),
                Some(param),
                "canonical name '{}' should parse back to the same parameter",
                param.as_str()
            );
        }
        assert_eq!(Parameter::from_name("turbidity"), None);
    }

    #[test]
    fn test_legacy_warning_severity_decodes_as_medium() {
        // An earlier alert generation labeled medium alerts "warning".
        // Both spellings must land on the same variant so severity counts
        // merge instead of double-counting.
        let legacy: Severity = serde_json::from_str("\"warning\"").unwrap();
        let canonical: Severity = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(legacy, Severity::Medium);
        assert_eq!(legacy, canonical);
        // Encoding is always canonical.
        assert_eq!(serde_json::to_string(&Severity::Medium).unwrap(), "\"medium\"");
    }

    #[test]
    fn test_format_value_uses_parameter_decimals() {
        assert_eq!(Parameter::Temperature.format_value(29.06), "29.1");
        assert_eq!(Parameter::Ph.format_value(7.8), "7.80");
        assert_eq!(Parameter::Ammonia.format_value(0.0154), "0.015");
    }

    #[test]
    fn test_profile_resolve_falls_back_for_salinity() {
        let profile = ThresholdProfile {
            temperature: ThresholdRange { min: 26.0, max: 32.0 },
            ph: ThresholdRange { min: 7.0, max: 8.5 },
            dissolved_oxygen: ThresholdRange { min: 4.0, max: 8.0 },
            ammonia: ThresholdRange { min: 0.0, max: 0.02 },
        };
        assert_eq!(profile.range_for(Parameter::Salinity), None);
        assert_eq!(profile.resolve(Parameter::Salinity), FALLBACK_RANGE);
        assert_eq!(
            profile.resolve(Parameter::Temperature),
            ThresholdRange { min: 26.0, max: 32.0 }
        );
    }

    #[test]
    fn test_reading_with_missing_fields_deserializes() {
        // Feed payloads may omit any sensor channel and the device id.
        let reading: SensorReading = serde_json::from_str(
            r#"{"timestamp": "2026-03-14T08:30:00Z", "temperature": 28.5}"#,
        )
        .unwrap();
        assert_eq!(reading.temperature, Some(28.5));
        assert_eq!(reading.ph, None);
        assert_eq!(reading.salinity, None);
        assert_eq!(reading.device_id, "");
        assert_eq!(reading.value(Parameter::Temperature), Some(28.5));
        assert_eq!(reading.value(Parameter::Ammonia), None);
    }
}
