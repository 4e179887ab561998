//! Granular unit preferences and the metric/imperial toggle.

use serde::{Deserialize, Serialize};

use super::{DepthUnit, PressureUnit, TemperatureUnit, UnitSystem, WeightUnit};

/// Per-quantity unit choices for one user.
///
/// The four fields are independent: a diver may log depth in meters and
/// weight in pounds. The toggle always writes all four together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitPreferences {
    pub depth: DepthUnit,
    pub temperature: TemperatureUnit,
    pub pressure: PressureUnit,
    pub weight: WeightUnit,
}

/// Preferences used before a user has chosen anything. Imperial on every field.
pub const DEFAULT_UNIT_PREFERENCES: UnitPreferences = UnitPreferences {
    depth: DepthUnit::Feet,
    temperature: TemperatureUnit::Fahrenheit,
    pressure: PressureUnit::Psi,
    weight: WeightUnit::Pounds,
};

const METRIC_PREFERENCES: UnitPreferences = UnitPreferences {
    depth: DepthUnit::Meters,
    temperature: TemperatureUnit::Celsius,
    pressure: PressureUnit::Bar,
    weight: WeightUnit::Kilograms,
};

const IMPERIAL_PREFERENCES: UnitPreferences = UnitPreferences {
    depth: DepthUnit::Feet,
    temperature: TemperatureUnit::Fahrenheit,
    pressure: PressureUnit::Psi,
    weight: WeightUnit::Pounds,
};

impl Default for UnitPreferences {
    fn default() -> Self {
        DEFAULT_UNIT_PREFERENCES
    }
}

impl UnitSystem {
    /// Expand the toggle into a full preference record.
    pub fn preferences(self) -> UnitPreferences {
        match self {
            UnitSystem::Metric => METRIC_PREFERENCES,
            UnitSystem::Imperial => IMPERIAL_PREFERENCES,
        }
    }
}

impl UnitPreferences {
    /// Collapse the record back onto the toggle.
    ///
    /// Metric only when all four fields are metric; any imperial field makes
    /// the whole record imperial. Not the inverse of
    /// [`UnitSystem::preferences`] for mixed records.
    pub fn unit_system(&self) -> UnitSystem {
        let all_metric = self.depth == DepthUnit::Meters
            && self.temperature == TemperatureUnit::Celsius
            && self.pressure == PressureUnit::Bar
            && self.weight == WeightUnit::Kilograms;
        if all_metric {
            UnitSystem::Metric
        } else {
            UnitSystem::Imperial
        }
    }

    /// True when the record matches neither system's full expansion.
    pub fn is_mixed(&self) -> bool {
        *self != METRIC_PREFERENCES && *self != IMPERIAL_PREFERENCES
    }

    pub fn with_depth(self, depth: DepthUnit) -> Self {
        Self { depth, ..self }
    }

    pub fn with_temperature(self, temperature: TemperatureUnit) -> Self {
        Self {
            temperature,
            ..self
        }
    }

    pub fn with_pressure(self, pressure: PressureUnit) -> Self {
        Self { pressure, ..self }
    }

    pub fn with_weight(self, weight: WeightUnit) -> Self {
        Self { weight, ..self }
    }
}

pub fn preferences_for_system(system: UnitSystem) -> UnitPreferences {
    system.preferences()
}

pub fn system_for_preferences(preferences: &UnitPreferences) -> UnitSystem {
    preferences.unit_system()
}

pub fn default_unit_preferences() -> UnitPreferences {
    DEFAULT_UNIT_PREFERENCES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_to_preferences() {
        assert_eq!(
            preferences_for_system(UnitSystem::Metric),
            UnitPreferences {
                depth: DepthUnit::Meters,
                temperature: TemperatureUnit::Celsius,
                pressure: PressureUnit::Bar,
                weight: WeightUnit::Kilograms,
            }
        );
        assert_eq!(
            preferences_for_system(UnitSystem::Imperial),
            UnitPreferences {
                depth: DepthUnit::Feet,
                temperature: TemperatureUnit::Fahrenheit,
                pressure: PressureUnit::Psi,
                weight: WeightUnit::Pounds,
            }
        );
    }

    #[test]
    fn test_preferences_to_system() {
        assert_eq!(
            system_for_preferences(&UnitSystem::Metric.preferences()),
            UnitSystem::Metric
        );
        assert_eq!(
            system_for_preferences(&UnitSystem::Imperial.preferences()),
            UnitSystem::Imperial
        );
        assert_eq!(
            system_for_preferences(&default_unit_preferences()),
            UnitSystem::Imperial
        );
    }

    #[test]
    fn test_mixed_preferences_resolve_to_imperial() {
        // Three metric fields and one imperial field is still imperial.
        let mixed = UnitSystem::Metric
            .preferences()
            .with_weight(WeightUnit::Pounds);
        assert_eq!(mixed.unit_system(), UnitSystem::Imperial);
        assert!(mixed.is_mixed());

        // Round trip through the toggle loses the metric fields.
        let expanded = mixed.unit_system().preferences();
        assert_ne!(expanded, mixed);
        assert_eq!(expanded.depth, DepthUnit::Feet);

        let metric_depth_only = DEFAULT_UNIT_PREFERENCES.with_depth(DepthUnit::Meters);
        assert_eq!(metric_depth_only.unit_system(), UnitSystem::Imperial);
    }

    #[test]
    fn test_builders_leave_default_untouched() {
        let custom = UnitPreferences::default()
            .with_temperature(TemperatureUnit::Celsius)
            .with_pressure(PressureUnit::Bar);
        assert_eq!(custom.temperature, TemperatureUnit::Celsius);
        assert_eq!(custom.pressure, PressureUnit::Bar);
        assert_eq!(custom.depth, DepthUnit::Feet);
        assert_eq!(DEFAULT_UNIT_PREFERENCES.temperature, TemperatureUnit::Fahrenheit);
        assert!(!UnitPreferences::default().is_mixed());
    }

    #[test]
    fn test_preferences_serde_shape() {
        let json = serde_json::to_value(UnitSystem::Metric.preferences()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "depth": "m",
                "temperature": "c",
                "pressure": "bar",
                "weight": "kg",
            })
        );

        // Missing fields fall back to the default preference for that field.
        let partial: UnitPreferences =
            serde_json::from_str(r#"{"depth": "m", "weight": "kg"}"#).unwrap();
        assert_eq!(partial.depth, DepthUnit::Meters);
        assert_eq!(partial.weight, WeightUnit::Kilograms);
        assert_eq!(partial.temperature, TemperatureUnit::Fahrenheit);
        assert_eq!(partial.pressure, PressureUnit::Psi);
        assert_eq!(partial.unit_system(), UnitSystem::Imperial);

        assert!(serde_json::from_str::<UnitPreferences>(r#"{"depth": "yd"}"#).is_err());
    }
}
