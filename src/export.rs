/// Serialization of the reading window and the threshold configuration.
///
/// Both formats are opaque hand-offs for external persistence or import:
/// the service produces and consumes them but never parses them to make
/// decisions. CSV columns follow the dashboard's export layout; the
/// configuration document keeps the dashboard's JSON shape (camelCase
/// envelope, snake_case parameter keys) so existing exports import cleanly.

use chrono::{DateTime, Utc};
use csv::Writer;
use serde::{Deserialize, Serialize};

use crate::model::{MonitorError, SensorReading, ThresholdProfile, ALL_PARAMETERS};
use crate::profile::ProfileStore;

// ---------------------------------------------------------------------------
// CSV export
// ---------------------------------------------------------------------------

/// Serializes readings (window order, newest first) to CSV.
///
/// One row per reading: timestamp, device id, then one column per parameter
/// in display order. Values render at two decimals; missing values render as
/// empty cells.
pub fn readings_to_csv(readings: &[SensorReading]) -> Result<String, MonitorError> {
    let mut writer = Writer::from_writer(Vec::new());

    writer
        .write_record([
            "Timestamp",
            "Device ID",
            "Temperature (°C)",
            "pH",
            "Dissolved Oxygen (mg/L)",
            "Ammonia (ppm)",
            "Salinity (ppt)",
        ])
        .map_err(|e| MonitorError::ExportError(e.to_string()))?;

    for reading in readings {
        let mut record = vec![
            reading.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            reading.device_id.clone(),
        ];
        for parameter in ALL_PARAMETERS {
            record.push(match reading.value(parameter) {
                Some(v) => format!("{:.2}", v),
                None => String::new(),
            });
        }
        writer
            .write_record(&record)
            .map_err(|e| MonitorError::ExportError(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| MonitorError::ExportError(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| MonitorError::ExportError(e.to_string()))
}

// ---------------------------------------------------------------------------
// Threshold configuration documents
// ---------------------------------------------------------------------------

/// Portable threshold configuration: preset key, resolved ranges, and the
/// export timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdConfigDoc {
    pub preset: String,
    pub thresholds: ThresholdProfile,
    pub exported_at: DateTime<Utc>,
}

/// Exports the store's current configuration as a pretty-printed JSON
/// document. The caller supplies the export timestamp. A store running on
/// bare mode defaults exports under the "custom" preset key, the label the
/// dashboard uses for ad-hoc configurations.
pub fn export_config(
    store: &ProfileStore,
    exported_at: DateTime<Utc>,
) -> Result<String, MonitorError> {
    let doc = ThresholdConfigDoc {
        preset: store.selected_preset().unwrap_or("custom").to_string(),
        thresholds: store.snapshot(),
        exported_at,
    };
    serde_json::to_string_pretty(&doc).map_err(|e| MonitorError::ExportError(e.to_string()))
}

/// Parses a threshold configuration document.
pub fn import_config(json: &str) -> Result<ThresholdConfigDoc, MonitorError> {
    serde_json::from_str(json).map_err(|e| MonitorError::ParseError(e.to_string()))
}

/// Applies an imported document to the store.
///
/// Selects the document's preset when the key is known (clearing stale
/// overrides), then pins every documented range as an override, so the
/// active profile equals the document even when the preset key came from
/// another installation and cannot be resolved here.
pub fn apply_config(store: &mut ProfileStore, doc: &ThresholdConfigDoc) {
    let _ = store.select_preset(&doc.preset);
    for parameter in crate::model::ALERT_PARAMETERS {
        store.set_override(parameter, doc.thresholds.resolve(parameter));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
