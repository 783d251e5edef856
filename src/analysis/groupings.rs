/// Alert aggregation and acknowledgment.
///
/// Every function here is synchronous and side-effect-free on its inputs:
/// dismissals return a new list and the caller owns the authoritative alert
/// set. Groups are transient presentation views, never persisted.

use crate::model::{Alert, Parameter, Severity};

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Alerts for one parameter, in source-list order.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertGroup {
    pub parameter: Parameter,
    pub alerts: Vec<Alert>,
}

/// Per-group severity tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Groups alerts by parameter.
///
/// Groups appear in first-seen order and each group preserves the insertion
/// order of its members, so flattening the groups back together is a
/// permutation of the input.
pub fn group_by_parameter(alerts: &[Alert]) -> Vec<AlertGroup> {
    let mut groups: Vec<AlertGroup> = Vec::new();
    for alert in alerts {
        match groups.iter_mut().find(|g| g.parameter == alert.parameter) {
            Some(group) => group.alerts.push(alert.clone()),
            None => groups.push(AlertGroup {
                parameter: alert.parameter,
                alerts: vec![alert.clone()],
            }),
        }
    }
    groups
}

/// Counts alerts by severity.
///
/// Records decoded from the legacy "warning" label have already been
/// normalized to `Medium` at the boundary, so legacy and canonical medium
/// alerts merge here instead of double counting.
pub fn severity_counts(alerts: &[Alert]) -> SeverityCounts {
    let mut counts = SeverityCounts::default();
    for alert in alerts {
        match alert.severity {
            Severity::High => counts.high += 1,
            Severity::Medium => counts.medium += 1,
            Severity::Low => counts.low += 1,
        }
    }
    counts
}

// ---------------------------------------------------------------------------
// Acknowledgment
// ---------------------------------------------------------------------------

/// Removes exactly the alert at `index`. An out-of-bounds index returns the
/// list unchanged.
pub fn dismiss(alerts: &[Alert], index: usize) -> Vec<Alert> {
    alerts
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, alert)| alert.clone())
        .collect()
}

/// Dismisses every alert. Trivially the empty list, kept as an explicit
/// operation so callers treat "clear all" the same as the other
/// acknowledgments.
pub fn dismiss_all() -> Vec<Alert> {
    Vec::new()
}

/// Removes every alert for `parameter`.
///
/// Removal walks the matching indices highest-to-lowest so each removal
/// leaves the not-yet-processed indices valid.
pub fn dismiss_group(alerts: &[Alert], parameter: Parameter) -> Vec<Alert> {
    let mut result = alerts.to_vec();
    let matching: Vec<usize> = result
        .iter()
        .enumerate()
        .filter(|(_, a)| a.parameter == parameter)
        .map(|(i, _)| i)
        .collect();
    for index in matching.into_iter().rev() {
        result.remove(index);
    }
    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AlertStatus;
    use chrono::{TimeZone, Utc};

    fn alert(parameter: Parameter, severity: Severity, tag: &str) -> Alert {
        let created_at = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
        Alert {
            id: format!("{}-{}", parameter.as_str(), tag),
            parameter,
            severity,
            message: format!("{} test alert", parameter.label()),
            created_at,
            status: AlertStatus::Active,
        }
    }

    fn mixed_alerts() -> Vec<Alert> {
        vec![
            alert(Parameter::Temperature, Severity::High, "a"),
            alert(Parameter::Ammonia, Severity::Medium, "b"),
            alert(Parameter::Temperature, Severity::Medium, "c"),
            alert(Parameter::Ph, Severity::High, "d"),
            alert(Parameter::Ammonia, Severity::High, "e"),
        ]
    }

    #[test]
    fn test_groups_preserve_first_seen_and_insertion_order() {
        let groups = group_by_parameter(&mixed_alerts());

        let order: Vec<Parameter> = groups.iter().map(|g| g.parameter).collect();
        assert_eq!(
            order,
            vec![Parameter::Temperature, Parameter::Ammonia, Parameter::Ph],
            "groups appear in first-seen order"
        );

        let temp_ids: Vec<&str> = groups[0].alerts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(temp_ids, vec!["temperature-a", "temperature-c"]);
    }

    #[test]
    fn test_grouping_round_trip_is_a_permutation() {
        let alerts = mixed_alerts();
        let flattened: Vec<Alert> = group_by_parameter(&alerts)
            .into_iter()
            .flat_map(|g| g.alerts)
            .collect();

        assert_eq!(flattened.len(), alerts.len(), "no duplication or loss");
        for alert in &alerts {
            assert!(
                flattened.contains(alert),
                "alert {} lost in grouping round trip",
                alert.id
            );
        }
    }

    #[test]
    fn test_severity_counts() {
        let counts = severity_counts(&mixed_alerts());
        assert_eq!(counts, SeverityCounts { high: 3, medium: 2, low: 0 });
    }

    #[test]
    fn test_dismiss_removes_exactly_one_position() {
        let alerts = mixed_alerts();
        let after = dismiss(&alerts, 2);
        assert_eq!(after.len(), 4);
        assert!(!after.iter().any(|a| a.id == "temperature-c"));
        // The input list is untouched.
        assert_eq!(alerts.len(), 5);
    }

    #[test]
    fn test_dismiss_out_of_bounds_is_a_no_op() {
        let alerts = mixed_alerts();
        assert_eq!(dismiss(&alerts, 99), alerts);
    }

    #[test]
    fn test_dismiss_group_removes_all_matching() {
        let after = dismiss_group(&mixed_alerts(), Parameter::Ammonia);
        assert_eq!(after.len(), 3);
        assert!(after.iter().all(|a| a.parameter != Parameter::Ammonia));
        // Survivors keep their relative order.
        let ids: Vec<&str> = after.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["temperature-a", "temperature-c", "ph-d"]);
    }

    #[test]
    fn test_dismiss_all_groups_equals_dismiss_all() {
        let alerts = mixed_alerts();
        let mut remaining = alerts.clone();
        let parameters: Vec<Parameter> =
            group_by_parameter(&alerts).iter().map(|g| g.parameter).collect();
        for parameter in parameters {
            remaining = dismiss_group(&remaining, parameter);
        }
        assert_eq!(remaining, dismiss_all());
    }
}
