//! Unit conversion for canonical dive measurements.
//!
//! Every length (depth, distance, visibility) is stored as whole centimeters
//! and every temperature as whole tenths of a degree Celsius. This module
//! converts between those canonical integers and whatever unit the diver
//! picked, parses raw form input, formats values for display, and maps the
//! metric/imperial toggle onto the four granular preferences.
//!
//! # Example
//!
//! ```
//! use divelog_units::units::{
//!     format_depth, parse_depth_input, DepthUnit, RawInput, UnitPreferences, UnitSystem,
//! };
//!
//! // A diver types "60" into a depth field while using feet.
//! let cm = parse_depth_input(&RawInput::from("60"), DepthUnit::Feet);
//! assert_eq!(cm, Some(1829));
//!
//! // Shown back to someone who prefers meters.
//! let shown = format_depth(cm, DepthUnit::Meters);
//! assert_eq!(shown.to_string(), "18 m");
//!
//! assert_eq!(UnitPreferences::default().unit_system(), UnitSystem::Imperial);
//! ```

pub mod bridge;
pub mod convert;
pub mod display;
pub mod input;
pub mod preferences;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::UnitError;

pub use bridge::{from_metric_value, to_metric_value};
pub use convert::{
    bar_to_psi, celsius_to_cx10, checked_celsius_to_cx10, checked_fahrenheit_to_cx10,
    checked_feet_to_cm, checked_meters_to_cm, cm_to_feet, cm_to_meters, cx10_to_celsius,
    cx10_to_fahrenheit, fahrenheit_to_cx10, feet_to_cm, kg_to_lb, lb_to_kg, meters_to_cm,
    psi_to_bar,
};
pub use display::{
    describe_depth, describe_depth_range, describe_temperature, describe_temperature_range,
    format_depth, format_temperature, system_unit_label, unit_label, DisplayValue,
    NarrativeValue, PLACEHOLDER,
};
pub use input::{
    coerce_number, depth_to_canonical, parse_depth_input, parse_depth_text,
    parse_temperature_input, parse_temperature_text, temperature_to_canonical, RawInput,
};
pub use preferences::{
    default_unit_preferences, preferences_for_system, system_for_preferences, UnitPreferences,
    DEFAULT_UNIT_PREFERENCES,
};

/// Canonical length: whole centimeters.
pub type Centimeters = i64;

/// Canonical temperature: Celsius multiplied by ten (250 is 25.0°C).
pub type CelsiusTenths = i64;

/// The coarse metric/imperial toggle shown in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn tag(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepthUnit {
    #[serde(rename = "m")]
    Meters,
    #[serde(rename = "ft")]
    Feet,
}

impl DepthUnit {
    pub fn tag(&self) -> &'static str {
        match self {
            DepthUnit::Meters => "m",
            DepthUnit::Feet => "ft",
        }
    }

    /// Short display label; identical to the tag for lengths.
    pub fn label(&self) -> &'static str {
        self.tag()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[serde(rename = "c")]
    Celsius,
    #[serde(rename = "f")]
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn tag(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "c",
            TemperatureUnit::Fahrenheit => "f",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PressureUnit {
    #[serde(rename = "bar")]
    Bar,
    #[serde(rename = "psi")]
    Psi,
}

impl PressureUnit {
    pub fn tag(&self) -> &'static str {
        match self {
            PressureUnit::Bar => "bar",
            PressureUnit::Psi => "psi",
        }
    }

    pub fn label(&self) -> &'static str {
        self.tag()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightUnit {
    #[serde(rename = "kg")]
    Kilograms,
    #[serde(rename = "lb")]
    Pounds,
}

impl WeightUnit {
    pub fn tag(&self) -> &'static str {
        match self {
            WeightUnit::Kilograms => "kg",
            WeightUnit::Pounds => "lb",
        }
    }

    pub fn label(&self) -> &'static str {
        self.tag()
    }
}

/// Which physical quantity a value measures.
///
/// Distance covers surface swims and visibility; it follows the depth
/// preference and shares the centimeter canonical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuantityKind {
    Depth,
    Distance,
    Temperature,
    Pressure,
    Weight,
}

impl QuantityKind {
    /// Short display label for this quantity under the given preferences.
    pub fn label(&self, preferences: &UnitPreferences) -> &'static str {
        match self {
            QuantityKind::Depth | QuantityKind::Distance => preferences.depth.label(),
            QuantityKind::Temperature => preferences.temperature.label(),
            QuantityKind::Pressure => preferences.pressure.label(),
            QuantityKind::Weight => preferences.weight.label(),
        }
    }
}

fn unknown_unit(quantity: &'static str, tag: &str) -> UnitError {
    debug!(quantity, tag, "rejecting unknown unit tag");
    UnitError::UnknownUnit {
        quantity,
        tag: tag.to_string(),
    }
}

/// Parse a unit system tag arriving from a request payload or form field.
pub fn parse_unit_system(tag: &str) -> Result<UnitSystem, UnitError> {
    tag.parse()
}

impl FromStr for UnitSystem {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            _ => Err(unknown_unit("system", s)),
        }
    }
}

impl FromStr for DepthUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(DepthUnit::Meters),
            "ft" | "foot" | "feet" => Ok(DepthUnit::Feet),
            _ => Err(unknown_unit("depth", s)),
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c" | "°c" | "celsius" => Ok(TemperatureUnit::Celsius),
            "f" | "°f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            _ => Err(unknown_unit("temperature", s)),
        }
    }
}

impl FromStr for PressureUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bar" => Ok(PressureUnit::Bar),
            "psi" => Ok(PressureUnit::Psi),
            _ => Err(unknown_unit("pressure", s)),
        }
    }
}

impl FromStr for WeightUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilogram" | "kilograms" => Ok(WeightUnit::Kilograms),
            "lb" | "lbs" | "pound" | "pounds" => Ok(WeightUnit::Pounds),
            _ => Err(unknown_unit("weight", s)),
        }
    }
}

impl FromStr for QuantityKind {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "depth" => Ok(QuantityKind::Depth),
            "distance" | "visibility" => Ok(QuantityKind::Distance),
            "temperature" | "temp" => Ok(QuantityKind::Temperature),
            "pressure" => Ok(QuantityKind::Pressure),
            "weight" => Ok(QuantityKind::Weight),
            _ => {
                debug!(quantity = s, "rejecting unknown quantity kind");
                Err(UnitError::UnknownQuantity(s.to_string()))
            }
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl fmt::Display for DepthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
