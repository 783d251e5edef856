/// Data organization utilities for the monitoring service.
///
/// This module provides grouping and lightweight trend helpers over the
/// in-memory working sets. Heavier statistics (regression, seasonality)
/// stay outside the service.
///
/// Submodules:
/// - `groupings`: organizes the flat alert list into per-parameter groups
///   and implements the acknowledgment operations.
/// - `trend`: up/down/stable classification over recent readings.

pub mod groupings;
pub mod trend;
