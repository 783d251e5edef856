/// Stateless alert generation.
///
/// The active alert set is a pure function of the latest reading and the
/// threshold profile snapshot: every evaluation cycle regenerates the whole
/// list from scratch instead of diffing against the previous one. That
/// forfeits alert history but makes stale-alert bugs structurally impossible.

use crate::alert::ranges::{self, RangeStatus};
use crate::model::{
    Alert, AlertStatus, Parameter, SensorReading, Severity, ThresholdProfile, ALERT_PARAMETERS,
};

/// Generates the active alerts for a reading against a profile snapshot.
///
/// Parameters are visited in the fixed `ALERT_PARAMETERS` order; the output
/// is not sorted by severity. Missing values are skipped, and a missing
/// reading yields an empty list. Alert ids are derived from the parameter
/// and the reading timestamp, so generation is idempotent per reading.
pub fn generate(reading: Option<&SensorReading>, profile: &ThresholdProfile) -> Vec<Alert> {
    let Some(reading) = reading else {
        return Vec::new();
    };

    let mut alerts = Vec::new();
    for parameter in ALERT_PARAMETERS {
        let Some(value) = reading.value(parameter) else {
            continue;
        };

        let range = profile.resolve(parameter);
        let (severity, phrase) = match ranges::classify(value, &range) {
            RangeStatus::Safe => continue,
            RangeStatus::Danger => {
                let direction = if value < range.min { "too low" } else { "too high" };
                (Severity::High, direction)
            }
            RangeStatus::Warning => {
                let direction = if value < range.min {
                    "approaching low limit"
                } else {
                    "approaching high limit"
                };
                (Severity::Medium, direction)
            }
        };

        alerts.push(Alert {
            id: format!("{}-{}", parameter.as_str(), reading.timestamp.to_rfc3339()),
            parameter,
            severity,
            message: format!(
                "{} is {} ({})",
                parameter.label(),
                phrase,
                formatted_with_unit(parameter, value)
            ),
            created_at: reading.timestamp,
            status: AlertStatus::Active,
        });
    }

    alerts
}

fn formatted_with_unit(parameter: Parameter, value: f64) -> String {
    let formatted = parameter.format_value(value);
    match parameter.unit() {
        "" => formatted,
        unit => format!("{} {}", formatted, unit),
    }
}

// ---------------------------------------------------------------------------
// Recommendations
// ---------------------------------------------------------------------------

/// Actionable recommendation for an alert, keyed by parameter and severity.
///
/// Low-severity and unmapped combinations fall back to a generic prompt.
pub fn recommendation(parameter: Parameter, severity: Severity) -> &'static str {
    match (parameter, severity) {
        (Parameter::Temperature, Severity::High) => "Enable cooling system or add ice packs",
        (Parameter::Temperature, Severity::Medium) => "Monitor closely, increase aeration",
        (Parameter::Ammonia, Severity::High) => "Immediate water change (30-50%), reduce feeding",
        (Parameter::Ammonia, Severity::Medium) => "Partial water change (20%), check filter",
        (Parameter::Ph, Severity::High) => "Add pH down solution or peat moss",
        (Parameter::Ph, Severity::Medium) => "Monitor and test water source",
        (Parameter::DissolvedOxygen, Severity::High) => "Reduce aeration, check for algae bloom",
        (Parameter::DissolvedOxygen, Severity::Medium) => "Increase water circulation",
        (Parameter::Salinity, Severity::High) => "Dilute with fresh water",
        (Parameter::Salinity, Severity::Medium) => "Monitor evaporation rate",
        _ => "Check system parameters",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
