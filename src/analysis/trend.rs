/// Short-horizon trend classification for a parameter.
///
/// Looks at the five most recent readings (the working set is newest first)
/// and compares the oldest and newest present values. Changes under 2% in
/// magnitude read as stable so probe jitter does not flap the indicator.

use crate::model::{Parameter, SensorReading};

/// Number of recent readings sampled for the trend.
const TREND_SAMPLE: usize = 5;

/// Relative change (percent) below which the trend reads as stable.
const STABLE_BAND_PCT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// Classifies the recent trend of `parameter` over newest-first `readings`.
///
/// Fewer than two present values, a sub-2% change, or a zero baseline all
/// read as `Stable`.
pub fn calculate_trend(readings: &[SensorReading], parameter: Parameter) -> Trend {
    let values: Vec<f64> = readings
        .iter()
        .take(TREND_SAMPLE)
        .filter_map(|r| r.value(parameter))
        .collect();

    if values.len() < 2 {
        return Trend::Stable;
    }

    // Newest first: the last sampled value is the oldest.
    let oldest = values[values.len() - 1];
    let newest = values[0];
    if oldest == 0.0 {
        return Trend::Stable;
    }

    let change_pct = (newest - oldest) / oldest * 100.0;
    if change_pct.abs() < STABLE_BAND_PCT {
        Trend::Stable
    } else if change_pct > 0.0 {
        Trend::Up
    } else {
        Trend::Down
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
