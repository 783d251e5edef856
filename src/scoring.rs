/// Weighted system health score.
///
/// Deterministic, rule-based scoring over the latest reading, the active
/// alert set, and the threshold profile snapshot. Recomputed in full on every
/// reading or alert change; nothing is retained between calls.
///
/// Each alert-eligible parameter carries a fixed weight. The weights sum to
/// 85, not 100, so a fully safe system scores 85. This headroom is inherited
/// from the deployed weighting table and is kept as-is; rescaling would shift
/// every band boundary downstream.

use crate::alert::ranges::{self, RangeStatus};
use crate::model::{
    Alert, Parameter, SensorReading, Severity, ThresholdProfile, ALERT_PARAMETERS,
};

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

/// Scoring weight for a parameter. Temperature and dissolved oxygen dominate
/// because they move fastest and kill fastest; salinity is unweighted.
pub fn weight(parameter: Parameter) -> u32 {
    match parameter {
        Parameter::Temperature => 25,
        Parameter::DissolvedOxygen => 25,
        Parameter::Ammonia => 20,
        Parameter::Ph => 15,
        Parameter::Salinity => 0,
    }
}

/// Cap on the outstanding-alert volume penalty.
const MAX_ALERT_PENALTY: u32 = 10;

/// Penalty per outstanding alert.
const ALERT_PENALTY_STEP: u32 = 2;

// ---------------------------------------------------------------------------
// Score types
// ---------------------------------------------------------------------------

/// Per-parameter contribution to the health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterScore {
    pub status: RangeStatus,
    pub weight: u32,
    pub earned: u32,
}

/// Composite health snapshot. Never persisted, recomputed on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthScore {
    /// Weighted total in [0, 100].
    pub total: u32,
    /// Breakdown per alert-eligible parameter, in evaluation order.
    pub per_parameter: Vec<(Parameter, ParameterScore)>,
    /// Outstanding issues in alert-list order.
    pub issues: Vec<(Parameter, Severity)>,
}

impl HealthScore {
    fn empty() -> Self {
        HealthScore { total: 0, per_parameter: Vec::new(), issues: Vec::new() }
    }
}

/// Display band for a total score.
pub fn band(total: u32) -> &'static str {
    if total >= 80 {
        "Excellent"
    } else if total >= 60 {
        "Good"
    } else if total >= 40 {
        "Fair"
    } else {
        "Poor"
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Computes the health score for the latest reading against a profile
/// snapshot and the current alert set.
///
/// In-range (and missing) parameters earn their full weight; the warning
/// band is covered by the alert-count penalty, not a per-parameter
/// deduction. Out-of-range parameters earn a severity-scaled fraction: the
/// severity comes from the outstanding alert for that parameter, or from
/// classification when none is outstanding (after a dismissal). No reading
/// at all scores zero with an empty breakdown.
pub fn score(
    latest: Option<&SensorReading>,
    alerts: &[Alert],
    profile: &ThresholdProfile,
) -> HealthScore {
    let Some(reading) = latest else {
        return HealthScore::empty();
    };

    let mut per_parameter = Vec::with_capacity(ALERT_PARAMETERS.len());
    let mut earned_total: u32 = 0;

    for parameter in ALERT_PARAMETERS {
        let range = profile.resolve(parameter);
        let value = reading.value(parameter);
        let status = match value {
            Some(v) => ranges::classify(v, &range),
            None => RangeStatus::Safe,
        };

        let full = weight(parameter);
        let earned = if ranges::is_in_range(value, &range) {
            full
        } else {
            let severity = alerts
                .iter()
                .find(|a| a.parameter == parameter)
                .map(|a| a.severity)
                .unwrap_or_else(|| severity_from_status(status));
            (f64::from(full) * severity_multiplier(severity)).round() as u32
        };

        earned_total += earned;
        per_parameter.push((parameter, ParameterScore { status, weight: full, earned }));
    }

    let penalty = (alerts.len() as u32 * ALERT_PENALTY_STEP).min(MAX_ALERT_PENALTY);
    let total = earned_total.saturating_sub(penalty);

    let issues = alerts.iter().map(|a| (a.parameter, a.severity)).collect();

    HealthScore { total, per_parameter, issues }
}

fn severity_multiplier(severity: Severity) -> f64 {
    match severity {
        Severity::Low => 0.8,
        Severity::Medium => 0.5,
        Severity::High => 0.0,
    }
}

/// Severity implied by a classification when no alert record is available.
/// Matches what generation would have produced for the same status.
fn severity_from_status(status: RangeStatus) -> Severity {
    match status {
        RangeStatus::Danger => Severity::High,
        RangeStatus::Warning => Severity::Medium,
        RangeStatus::Safe => Severity::Low,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::generate::generate;
    use chrono::{TimeZone, Utc};

    fn seabass_profile() -> ThresholdProfile {
        crate::species::find_preset("asian_seabass").unwrap().thresholds
    }

    fn reading(temperature: f64, ph: f64, dissolved_oxygen: f64, ammonia: f64) -> SensorReading {
        SensorReading {
            timestamp: Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap(),
            device_id: "esp32-001".to_string(),
            temperature: Some(temperature),
            ph: Some(ph),
            dissolved_oxygen: Some(dissolved_oxygen),
            ammonia: Some(ammonia),
            salinity: Some(30.0),
        }
    }

    #[test]
    fn test_fully_safe_reading_scores_the_weight_sum() {
        // Weights sum to 85, not 100. A deliberate, inherited ceiling.
        let r = reading(29.0, 7.8, 6.0, 0.01);
        let profile = seabass_profile();
        let alerts = generate(Some(&r), &profile);
        assert!(alerts.is_empty());

        let health = score(Some(&r), &alerts, &profile);
        assert_eq!(health.total, 85);
        assert!(health.issues.is_empty());
        assert!(health.per_parameter.iter().all(|(_, s)| s.earned == s.weight));
        assert_eq!(band(health.total), "Excellent");
    }

    #[test]
    fn test_no_reading_scores_zero_with_empty_breakdown() {
        let health = score(None, &[], &seabass_profile());
        assert_eq!(health.total, 0);
        assert!(health.per_parameter.is_empty());
        assert!(health.issues.is_empty());
        assert_eq!(band(health.total), "Poor");
    }

    #[test]
    fn test_high_breach_zeroes_the_parameter_and_adds_penalty() {
        let r = reading(35.0, 7.8, 6.0, 0.01); // temperature over max
        let profile = seabass_profile();
        let alerts = generate(Some(&r), &profile);
        assert_eq!(alerts.len(), 1);

        let health = score(Some(&r), &alerts, &profile);
        // 85 - 25 (temperature earns 0) - 2 (one-alert penalty) = 58.
        assert_eq!(health.total, 58);
        let (_, temp) = health.per_parameter[0];
        assert_eq!(temp.status, RangeStatus::Danger);
        assert_eq!(temp.earned, 0);
        assert_eq!(health.issues, vec![(Parameter::Temperature, Severity::High)]);
        assert_eq!(band(health.total), "Fair");
    }

    #[test]
    fn test_warning_band_keeps_full_weight_but_pays_penalty() {
        let r = reading(31.5, 7.8, 6.0, 0.01); // inside the warning band
        let profile = seabass_profile();
        let alerts = generate(Some(&r), &profile);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, Severity::Medium);

        let health = score(Some(&r), &alerts, &profile);
        // Still in range, so the parameter earns 25; only the alert-count
        // penalty applies: 85 - 2 = 83.
        assert_eq!(health.total, 83);
        let (_, temp) = health.per_parameter[0];
        assert_eq!(temp.status, RangeStatus::Warning);
        assert_eq!(temp.earned, 25);
    }

    #[test]
    fn test_missing_parameter_earns_full_weight() {
        let mut r = reading(29.0, 7.8, 6.0, 0.01);
        r.dissolved_oxygen = None;
        let profile = seabass_profile();
        let health = score(Some(&r), &[], &profile);
        assert_eq!(health.total, 85, "absent data cannot be penalized");
    }

    #[test]
    fn test_legacy_low_severity_alert_scales_by_point_eight() {
        // An externally supplied low-severity alert for an out-of-range
        // parameter earns 0.8x: ammonia 20 -> 16.
        let r = reading(29.0, 7.8, 6.0, 0.5); // ammonia over 0.02
        let profile = seabass_profile();
        let mut alerts = generate(Some(&r), &profile);
        assert_eq!(alerts.len(), 1);
        alerts[0].severity = Severity::Low;

        let health = score(Some(&r), &alerts, &profile);
        // 25 + 15 + 25 + 16 - 2 = 79.
        assert_eq!(health.total, 79);
    }

    #[test]
    fn test_out_of_range_without_alert_falls_back_to_classification() {
        // The alert was dismissed but the parameter is still breached; the
        // scorer derives high severity from the classification.
        let r = reading(29.0, 7.8, 6.0, 0.5);
        let profile = seabass_profile();
        let health = score(Some(&r), &[], &profile);
        // 85 - 20 (ammonia earns 0), no alerts so no penalty.
        assert_eq!(health.total, 65);
    }

    #[test]
    fn test_alert_penalty_caps_at_ten() {
        // Six alerts would be 12 points; the cap holds it at 10.
        let r = reading(29.0, 7.8, 6.0, 0.01);
        let profile = seabass_profile();
        let breached = reading(35.0, 9.9, 2.0, 0.5);
        let mut alerts = generate(Some(&breached), &profile);
        alerts.extend(generate(Some(&breached), &profile));
        assert_eq!(alerts.len(), 8);

        let health = score(Some(&r), &alerts, &profile);
        // Reading itself is fully safe: 85 - 10 = 75.
        assert_eq!(health.total, 75);
    }

    #[test]
    fn test_adding_a_high_alert_strictly_decreases_the_score() {
        let profile = seabass_profile();
        let safe = reading(29.0, 7.8, 6.0, 0.01);
        let before = score(Some(&safe), &generate(Some(&safe), &profile), &profile);

        let breached = reading(29.0, 7.8, 2.0, 0.01); // DO now under min
        let after = score(Some(&breached), &generate(Some(&breached), &profile), &profile);

        let drop = before.total - after.total;
        assert!(
            drop >= weight(Parameter::DissolvedOxygen),
            "score must fall by at least the parameter's full weight, fell {}",
            drop
        );
        assert!(
            drop <= weight(Parameter::DissolvedOxygen) + ALERT_PENALTY_STEP,
            "score must fall by at most weight plus one penalty step, fell {}",
            drop
        );
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(band(85), "Excellent");
        assert_eq!(band(80), "Excellent");
        assert_eq!(band(79), "Good");
        assert_eq!(band(60), "Good");
        assert_eq!(band(59), "Fair");
        assert_eq!(band(40), "Fair");
        assert_eq!(band(39), "Poor");
        assert_eq!(band(0), "Poor");
    }

    #[test]
    fn test_floor_at_zero() {
        // Everything breached plus max penalty cannot go negative.
        let r = reading(50.0, 12.0, 0.5, 5.0);
        let profile = seabass_profile();
        let alerts = generate(Some(&r), &profile);
        assert_eq!(alerts.len(), 4);
        let health = score(Some(&r), &alerts, &profile);
        assert_eq!(health.total, 0);
    }
}
