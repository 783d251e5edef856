/// JSON decoding for the sensor readings feed.
///
/// Payloads arrive in three shapes: a bare reading object (periodic poll of
/// the latest row), a push envelope wrapping one new row, and a newest-first
/// batch array (initial/periodic full fetch). Any sensor channel may be
/// missing and decodes to `None`; a partial row is a valid reading, not an
/// error. Malformed JSON is the only failure.

use serde::Deserialize;

use crate::model::{MonitorError, SensorReading};

/// Real-time push envelope: the transport wraps each inserted row.
#[derive(Debug, Deserialize)]
struct PushEnvelope {
    new: SensorReading,
}

/// Decodes a single reading object.
pub fn parse_reading(json: &str) -> Result<SensorReading, MonitorError> {
    serde_json::from_str(json).map_err(|e| MonitorError::ParseError(e.to_string()))
}

/// Decodes a push envelope (`{"new": {...}}`) into its reading.
pub fn parse_push(json: &str) -> Result<SensorReading, MonitorError> {
    let envelope: PushEnvelope =
        serde_json::from_str(json).map_err(|e| MonitorError::ParseError(e.to_string()))?;
    Ok(envelope.new)
}

/// Decodes a newest-first batch array. The batch is passed through in feed
/// order; the reading window owns truncation to capacity.
pub fn parse_batch(json: &str) -> Result<Vec<SensorReading>, MonitorError> {
    serde_json::from_str(json).map_err(|e| MonitorError::ParseError(e.to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
