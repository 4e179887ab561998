//! Display formatters: canonical integers to render-ready value/unit pairs.
//!
//! Formatting never fails. A missing canonical value renders as
//! [`PLACEHOLDER`] next to the target unit's label.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::convert::{cm_to_feet, cm_to_meters, cx10_to_celsius, cx10_to_fahrenheit};
use super::{
    CelsiusTenths, Centimeters, DepthUnit, QuantityKind, TemperatureUnit, UnitPreferences,
    UnitSystem,
};

/// Rendered in place of a value that was never recorded.
pub const PLACEHOLDER: &str = "--";

/// A value and its unit label, ready for a template or a widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayValue {
    pub value: String,
    pub unit: String,
}

impl DisplayValue {
    fn new(value: String, unit: &str) -> Self {
        Self {
            value,
            unit: unit.to_string(),
        }
    }

    fn placeholder(unit: &str) -> Self {
        Self::new(PLACEHOLDER.to_string(), unit)
    }

    pub fn is_placeholder(&self) -> bool {
        self.value == PLACEHOLDER
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Degree symbols attach directly: "77°F", but "25 m".
        if self.unit.starts_with('°') {
            write!(f, "{}{}", self.value, self.unit)
        } else {
            write!(f, "{} {}", self.value, self.unit)
        }
    }
}

/// Round half away from zero and render without a decimal point.
fn whole(value: f64) -> String {
    (value.round() as i64).to_string()
}

pub fn format_depth(cm: Option<Centimeters>, unit: DepthUnit) -> DisplayValue {
    let Some(cm) = cm else {
        return DisplayValue::placeholder(unit.label());
    };
    let value = match unit {
        DepthUnit::Meters => cm_to_meters(cm),
        DepthUnit::Feet => cm_to_feet(cm),
    };
    DisplayValue::new(whole(value), unit.label())
}

pub fn format_temperature(cx10: Option<CelsiusTenths>, unit: TemperatureUnit) -> DisplayValue {
    let Some(cx10) = cx10 else {
        return DisplayValue::placeholder(unit.label());
    };
    let value = match unit {
        TemperatureUnit::Celsius => cx10_to_celsius(cx10),
        TemperatureUnit::Fahrenheit => cx10_to_fahrenheit(cx10),
    };
    DisplayValue::new(whole(value), unit.label())
}

// ============================================================================
// Narrative formatting
// ============================================================================

/// A value headed for generated prose: either a canonical number or a
/// phrase the narrative service already wrote ("as deep as visibility allows").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NarrativeValue {
    Canonical(i64),
    Phrase(String),
}

impl From<i64> for NarrativeValue {
    fn from(value: i64) -> Self {
        NarrativeValue::Canonical(value)
    }
}

impl From<&str> for NarrativeValue {
    fn from(value: &str) -> Self {
        NarrativeValue::Phrase(value.to_string())
    }
}

pub fn describe_depth(value: &NarrativeValue, unit: DepthUnit) -> String {
    match value {
        NarrativeValue::Canonical(cm) => format_depth(Some(*cm), unit).to_string(),
        NarrativeValue::Phrase(phrase) => phrase.clone(),
    }
}

pub fn describe_temperature(value: &NarrativeValue, unit: TemperatureUnit) -> String {
    match value {
        NarrativeValue::Canonical(cx10) => format_temperature(Some(*cx10), unit).to_string(),
        NarrativeValue::Phrase(phrase) => phrase.clone(),
    }
}

/// "18-25 m" for two numbers; phrases are passed through ("18 m to the reef floor").
pub fn describe_depth_range(
    shallow: &NarrativeValue,
    deep: &NarrativeValue,
    unit: DepthUnit,
) -> String {
    match (shallow, deep) {
        (NarrativeValue::Canonical(low), NarrativeValue::Canonical(high)) => numeric_range(
            format_depth(Some(*low), unit),
            format_depth(Some(*high), unit),
        ),
        _ => format!(
            "{} to {}",
            describe_depth(shallow, unit),
            describe_depth(deep, unit)
        ),
    }
}

pub fn describe_temperature_range(
    low: &NarrativeValue,
    high: &NarrativeValue,
    unit: TemperatureUnit,
) -> String {
    match (low, high) {
        (NarrativeValue::Canonical(a), NarrativeValue::Canonical(b)) => numeric_range(
            format_temperature(Some(*a), unit),
            format_temperature(Some(*b), unit),
        ),
        _ => format!(
            "{} to {}",
            describe_temperature(low, unit),
            describe_temperature(high, unit)
        ),
    }
}

fn numeric_range(low: DisplayValue, high: DisplayValue) -> String {
    if low.value == high.value {
        return low.to_string();
    }
    // A hyphen between negative numbers reads as subtraction.
    let separator = if low.value.starts_with('-') || high.value.starts_with('-') {
        " to "
    } else {
        "-"
    };
    DisplayValue {
        value: format!("{}{}{}", low.value, separator, high.value),
        unit: low.unit,
    }
    .to_string()
}

// ============================================================================
// Labels
// ============================================================================

pub fn unit_label(kind: QuantityKind, preferences: &UnitPreferences) -> String {
    kind.label(preferences).to_string()
}

pub fn system_unit_label(kind: QuantityKind, system: UnitSystem) -> String {
    kind.label(&system.preferences()).to_string()
}
