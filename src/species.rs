/// Species preset registry for the water-quality monitoring service.
///
/// Defines the canonical built-in threshold profiles for the species farmed
/// on supported installations, plus the test/production mode defaults.
/// This is the single source of truth for preset keys; other modules should
/// look presets up here rather than hardcoding threshold values.

use crate::model::{Mode, ThresholdProfile, ThresholdRange};

// ---------------------------------------------------------------------------
// Mode default profiles
// ---------------------------------------------------------------------------

/// Production defaults applied when no preset is selected. Conservative
/// grow-out ranges for warm-water marine culture; the ammonia limit is the
/// total ammonia nitrogen ceiling for the primary species.
pub const PRODUCTION_DEFAULTS: ThresholdProfile = ThresholdProfile {
    temperature: ThresholdRange { min: 26.0, max: 32.0 },
    ph: ThresholdRange { min: 7.0, max: 8.5 },
    dissolved_oxygen: ThresholdRange { min: 4.0, max: 8.0 },
    ammonia: ThresholdRange { min: 0.0, max: 0.02 },
};

/// Test-mode defaults: wide enough that uncalibrated probes do not flood the
/// alert panel during commissioning.
pub const TEST_DEFAULTS: ThresholdProfile = ThresholdProfile {
    temperature: ThresholdRange { min: 0.0, max: 100.0 },
    ph: ThresholdRange { min: 0.0, max: 14.0 },
    dissolved_oxygen: ThresholdRange { min: 0.0, max: 20.0 },
    ammonia: ThresholdRange { min: 0.0, max: 50.0 },
};

/// Returns the default profile backing resolution for a mode.
pub fn mode_defaults(mode: Mode) -> ThresholdProfile {
    match mode {
        Mode::Test => TEST_DEFAULTS,
        Mode::Production => PRODUCTION_DEFAULTS,
    }
}

// ---------------------------------------------------------------------------
// Species presets
// ---------------------------------------------------------------------------

/// A built-in species threshold profile. Built-ins are immutable: rename and
/// delete are refused at the store boundary.
pub struct SpeciesPreset {
    /// Stable key used for selection and persistence.
    pub key: &'static str,
    /// Display name, local market name first.
    pub name: &'static str,
    /// Safe ranges for the alert-eligible parameters.
    pub thresholds: ThresholdProfile,
}

/// Preset selected on first run and after a reset.
pub const DEFAULT_PRESET: &str = "asian_seabass";

/// All built-in species presets.
///
/// Ranges follow published grow-out guidance for each species; ammonia limits
/// are total ammonia nitrogen in ppm.
pub static SPECIES_REGISTRY: &[SpeciesPreset] = &[
    SpeciesPreset {
        key: "asian_seabass",
        name: "Siakap (Asian Seabass)",
        thresholds: ThresholdProfile {
            temperature: ThresholdRange { min: 26.0, max: 32.0 },
            ph: ThresholdRange { min: 7.0, max: 8.5 },
            dissolved_oxygen: ThresholdRange { min: 4.0, max: 8.0 },
            ammonia: ThresholdRange { min: 0.0, max: 0.02 },
        },
    },
    SpeciesPreset {
        key: "grouper",
        name: "Kerapu (Hybrid Grouper)",
        thresholds: ThresholdProfile {
            temperature: ThresholdRange { min: 26.0, max: 30.0 },
            ph: ThresholdRange { min: 7.5, max: 8.3 },
            dissolved_oxygen: ThresholdRange { min: 5.0, max: 8.0 },
            ammonia: ThresholdRange { min: 0.0, max: 0.02 },
        },
    },
    SpeciesPreset {
        key: "tilapia",
        name: "Tilapia (Red/Black)",
        thresholds: ThresholdProfile {
            temperature: ThresholdRange { min: 25.0, max: 32.0 },
            ph: ThresholdRange { min: 6.5, max: 9.0 },
            dissolved_oxygen: ThresholdRange { min: 3.0, max: 8.0 },
            ammonia: ThresholdRange { min: 0.0, max: 0.05 },
        },
    },
    SpeciesPreset {
        key: "shrimp",
        name: "Udang Vannamei (White Shrimp)",
        thresholds: ThresholdProfile {
            temperature: ThresholdRange { min: 28.0, max: 32.0 },
            ph: ThresholdRange { min: 7.5, max: 8.5 },
            dissolved_oxygen: ThresholdRange { min: 5.0, max: 8.0 },
            ammonia: ThresholdRange { min: 0.0, max: 0.01 },
        },
    },
    SpeciesPreset {
        key: "custom",
        name: "Custom",
        thresholds: ThresholdProfile {
            temperature: ThresholdRange { min: 20.0, max: 30.0 },
            ph: ThresholdRange { min: 6.5, max: 8.5 },
            dissolved_oxygen: ThresholdRange { min: 4.0, max: 8.0 },
            ammonia: ThresholdRange { min: 0.0, max: 0.05 },
        },
    },
];

/// Looks up a built-in preset by key. Returns `None` if not found.
pub fn find_preset(key: &str) -> Option<&'static SpeciesPreset> {
    SPECIES_REGISTRY.iter().find(|p| p.key == key)
}

/// Returns the keys of all built-in presets, in registry order.
pub fn all_preset_keys() -> Vec<&'static str> {
    SPECIES_REGISTRY.iter().map(|p| p.key).collect()
}

/// Checks whether a key names a built-in preset.
pub fn is_builtin(key: &str) -> bool {
    find_preset(key).is_some()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ALERT_PARAMETERS;

    #[test]
    fn test_no_duplicate_preset_keys() {
        let mut seen = std::collections::HashSet::new();
        for preset in SPECIES_REGISTRY {
            assert!(
                seen.insert(preset.key),
                "duplicate preset key '{}' found in SPECIES_REGISTRY",
                preset.key
            );
        }
    }

    #[test]
    fn test_registry_contains_default_preset() {
        assert!(
            find_preset(DEFAULT_PRESET).is_some(),
            "DEFAULT_PRESET '{}' must exist in SPECIES_REGISTRY",
            DEFAULT_PRESET
        );
    }

    #[test]
    fn test_all_preset_ranges_are_ordered() {
        // min > max would invert the warning band math and make every value
        // read as out of range.
        for preset in SPECIES_REGISTRY {
            for param in ALERT_PARAMETERS {
                let range = preset.thresholds.resolve(param);
                assert!(
                    range.min < range.max,
                    "preset '{}' has inverted range for {}: {} >= {}",
                    preset.key,
                    param,
                    range.min,
                    range.max
                );
            }
        }
    }

    #[test]
    fn test_mode_defaults_are_ordered() {
        for mode in [Mode::Test, Mode::Production] {
            let profile = mode_defaults(mode);
            for param in ALERT_PARAMETERS {
                let range = profile.resolve(param);
                assert!(
                    range.min < range.max,
                    "{:?} defaults have inverted range for {}",
                    mode,
                    param
                );
            }
        }
    }

    #[test]
    fn test_test_defaults_are_wider_than_production() {
        // Test mode exists so uncalibrated probes stay quiet; every test
        // range must contain the matching production range.
        for param in ALERT_PARAMETERS {
            let test = TEST_DEFAULTS.resolve(param);
            let prod = PRODUCTION_DEFAULTS.resolve(param);
            assert!(
                test.min <= prod.min && test.max >= prod.max,
                "test range for {} should contain the production range",
                param
            );
        }
    }

    #[test]
    fn test_find_preset_returns_correct_entry() {
        let preset = find_preset("shrimp").expect("shrimp should be in registry");
        assert_eq!(preset.key, "shrimp");
        assert!(preset.name.contains("Vannamei"));
        assert_eq!(preset.thresholds.ammonia.max, 0.01);
    }

    #[test]
    fn test_find_preset_returns_none_for_unknown_key() {
        assert!(find_preset("barramundi").is_none());
        assert!(!is_builtin("barramundi"));
    }

    #[test]
    fn test_all_preset_keys_helper_matches_registry_length() {
        assert_eq!(all_preset_keys().len(), SPECIES_REGISTRY.len());
    }
}
