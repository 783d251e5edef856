/// Active threshold configuration for the monitoring service.
///
/// `ProfileStore` owns the single current configuration: operating mode,
/// selected preset, per-parameter overrides, and the user's custom presets.
/// Evaluation never reads the store field-by-field: it takes a `snapshot()`
/// first and classifies every parameter against that one profile, so a
/// concurrent reconfiguration can never mix min from one profile with max
/// from another.
///
/// Resolution order for each parameter:
///   1. an explicit per-parameter override, if set
///   2. the selected preset (built-in or custom)
///   3. the mode's default profile
///   4. the wide fallback range, for parameters no profile covers

use std::collections::BTreeMap;

use crate::model::{Mode, MonitorError, Parameter, ThresholdProfile, ThresholdRange};
use crate::species::{self, DEFAULT_PRESET};

// ---------------------------------------------------------------------------
// Custom presets
// ---------------------------------------------------------------------------

/// A user-defined threshold preset.
///
/// Locked presets refuse rename and delete until explicitly unlocked; the
/// lock is a safety latch against fat-finger edits on the settings page, not
/// a data-integrity guarantee.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomPreset {
    pub name: String,
    pub thresholds: ThresholdProfile,
    pub locked: bool,
}

// ---------------------------------------------------------------------------
// Per-parameter overrides
// ---------------------------------------------------------------------------

/// Ad-hoc range overrides layered on top of the selected preset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Overrides {
    temperature: Option<ThresholdRange>,
    ph: Option<ThresholdRange>,
    dissolved_oxygen: Option<ThresholdRange>,
    ammonia: Option<ThresholdRange>,
}

impl Overrides {
    fn get(&self, parameter: Parameter) -> Option<ThresholdRange> {
        match parameter {
            Parameter::Temperature => self.temperature,
            Parameter::Ph => self.ph,
            Parameter::DissolvedOxygen => self.dissolved_oxygen,
            Parameter::Ammonia => self.ammonia,
            Parameter::Salinity => None,
        }
    }

    fn set(&mut self, parameter: Parameter, range: ThresholdRange) {
        match parameter {
            Parameter::Temperature => self.temperature = Some(range),
            Parameter::Ph => self.ph = Some(range),
            Parameter::DissolvedOxygen => self.dissolved_oxygen = Some(range),
            Parameter::Ammonia => self.ammonia = Some(range),
            Parameter::Salinity => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Profile store
// ---------------------------------------------------------------------------

/// Owner of the active threshold configuration.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    mode: Mode,
    selected_preset: Option<String>,
    overrides: Overrides,
    custom_presets: BTreeMap<String, CustomPreset>,
}

impl ProfileStore {
    /// Creates a store in the given mode with no preset selected and no
    /// overrides, so the mode's default profile is active.
    pub fn new(mode: Mode) -> Self {
        ProfileStore {
            mode,
            selected_preset: None,
            overrides: Overrides::default(),
            custom_presets: BTreeMap::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switches operating mode. Preset selection and overrides survive a
    /// mode switch; only the default layer underneath them changes.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// The selected preset key, `None` while the mode defaults are active.
    pub fn selected_preset(&self) -> Option<&str> {
        self.selected_preset.as_deref()
    }

    /// Selects a preset by key. Clears all overrides: selection is a full
    /// replacement of the active profile, never a partial merge.
    pub fn select_preset(&mut self, key: &str) -> Result<(), MonitorError> {
        if !species::is_builtin(key) && !self.custom_presets.contains_key(key) {
            return Err(MonitorError::PresetNotFound(key.to_string()));
        }
        self.selected_preset = Some(key.to_string());
        self.overrides = Overrides::default();
        Ok(())
    }

    /// Overrides the range for one parameter on top of the selected preset.
    /// Salinity has no profile entry and is ignored.
    pub fn set_override(&mut self, parameter: Parameter, range: ThresholdRange) {
        self.overrides.set(parameter, range);
    }

    /// Restores the default species preset and clears every override.
    pub fn reset(&mut self) {
        self.selected_preset = Some(DEFAULT_PRESET.to_string());
        self.overrides = Overrides::default();
    }

    /// Resolves the active range for one parameter. Total: parameters no
    /// profile covers get the wide fallback range.
    pub fn resolve(&self, parameter: Parameter) -> ThresholdRange {
        if let Some(range) = self.overrides.get(parameter) {
            return range;
        }
        if let Some(range) = self
            .selected_preset
            .as_deref()
            .and_then(|key| self.preset_thresholds(key))
            .and_then(|p| p.range_for(parameter))
        {
            return range;
        }
        species::mode_defaults(self.mode).resolve(parameter)
    }

    /// Resolves by parameter name, degrading unknown names to the fallback
    /// range so a misconfigured caller gets "no alert" instead of a panic.
    pub fn resolve_named(&self, name: &str) -> ThresholdRange {
        match Parameter::from_name(name) {
            Some(parameter) => self.resolve(parameter),
            None => crate::model::FALLBACK_RANGE,
        }
    }

    /// Captures the fully resolved profile as one immutable value.
    ///
    /// Every evaluation cycle must run against a single snapshot taken
    /// before classification starts.
    pub fn snapshot(&self) -> ThresholdProfile {
        ThresholdProfile {
            temperature: self.resolve(Parameter::Temperature),
            ph: self.resolve(Parameter::Ph),
            dissolved_oxygen: self.resolve(Parameter::DissolvedOxygen),
            ammonia: self.resolve(Parameter::Ammonia),
        }
    }

    fn preset_thresholds(&self, key: &str) -> Option<ThresholdProfile> {
        if let Some(preset) = species::find_preset(key) {
            return Some(preset.thresholds);
        }
        self.custom_presets.get(key).map(|p| p.thresholds)
    }

    // -----------------------------------------------------------------------
    // Custom preset management
    // -----------------------------------------------------------------------

    /// Adds a custom preset under an explicit key. New presets start
    /// unlocked. Keys must not collide with built-ins or existing customs.
    pub fn add_custom_preset(
        &mut self,
        key: &str,
        name: &str,
        thresholds: ThresholdProfile,
    ) -> Result<(), MonitorError> {
        if species::is_builtin(key) || self.custom_presets.contains_key(key) {
            return Err(MonitorError::DuplicatePreset(key.to_string()));
        }
        self.custom_presets.insert(
            key.to_string(),
            CustomPreset {
                name: name.to_string(),
                thresholds,
                locked: false,
            },
        );
        Ok(())
    }

    /// Renames a custom preset. Refused for built-ins and locked presets.
    pub fn rename_custom_preset(&mut self, key: &str, new_name: &str) -> Result<(), MonitorError> {
        if species::is_builtin(key) {
            return Err(MonitorError::PresetReadOnly(key.to_string()));
        }
        let preset = self
            .custom_presets
            .get_mut(key)
            .ok_or_else(|| MonitorError::PresetNotFound(key.to_string()))?;
        if preset.locked {
            return Err(MonitorError::PresetLocked(key.to_string()));
        }
        preset.name = new_name.to_string();
        Ok(())
    }

    /// Deletes a custom preset. Refused for built-ins and locked presets.
    /// Deleting the selected preset falls selection back to the default.
    pub fn delete_custom_preset(&mut self, key: &str) -> Result<(), MonitorError> {
        if species::is_builtin(key) {
            return Err(MonitorError::PresetReadOnly(key.to_string()));
        }
        let preset = self
            .custom_presets
            .get(key)
            .ok_or_else(|| MonitorError::PresetNotFound(key.to_string()))?;
        if preset.locked {
            return Err(MonitorError::PresetLocked(key.to_string()));
        }
        self.custom_presets.remove(key);
        if self.selected_preset.as_deref() == Some(key) {
            self.selected_preset = Some(DEFAULT_PRESET.to_string());
            self.overrides = Overrides::default();
        }
        Ok(())
    }

    /// Sets the lock latch on a custom preset.
    pub fn set_locked(&mut self, key: &str, locked: bool) -> Result<(), MonitorError> {
        if species::is_builtin(key) {
            return Err(MonitorError::PresetReadOnly(key.to_string()));
        }
        let preset = self
            .custom_presets
            .get_mut(key)
            .ok_or_else(|| MonitorError::PresetNotFound(key.to_string()))?;
        preset.locked = locked;
        Ok(())
    }

    /// Iterates the custom presets in key order.
    pub fn custom_presets(&self) -> impl Iterator<Item = (&str, &CustomPreset)> {
        self.custom_presets.iter().map(|(k, v)| (k.as_str(), v))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
