//! Input parsers: raw form values to canonical integers.
//!
//! The numeric core (`depth_to_canonical`, `temperature_to_canonical`) is a
//! total function over `Option<f64>`. The `parse_*` adapters sit at the UI and
//! HTTP boundary and coerce text first. Absent, empty and unparseable input
//! all collapse to `None`, as do numbers whose canonical value would not fit
//! in an `i64`; NaN never escapes.

use nom::number::complete::recognize_float;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::convert::{
    checked_celsius_to_cx10, checked_fahrenheit_to_cx10, checked_feet_to_cm, checked_meters_to_cm,
};
use super::{CelsiusTenths, Centimeters, DepthUnit, TemperatureUnit};

/// A form field as it arrives from the UI or a JSON payload.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawInput {
    Number(f64),
    Text(String),
    #[default]
    Absent,
}

impl From<f64> for RawInput {
    fn from(value: f64) -> Self {
        RawInput::Number(value)
    }
}

impl From<&str> for RawInput {
    fn from(value: &str) -> Self {
        RawInput::Text(value.to_string())
    }
}

impl From<String> for RawInput {
    fn from(value: String) -> Self {
        RawInput::Text(value)
    }
}

impl<T: Into<RawInput>> From<Option<T>> for RawInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawInput::Absent, Into::into)
    }
}

/// Coerce a raw value into a finite number.
///
/// Text must be a complete decimal literal once surrounding whitespace is
/// trimmed: `"15"`, `"-2.5"`, `".5"`, `"1e3"`. Anything else is `None`.
pub fn coerce_number(raw: &RawInput) -> Option<f64> {
    match raw {
        RawInput::Number(n) => finite(*n),
        RawInput::Text(text) => parse_decimal(text),
        RawInput::Absent => None,
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

fn parse_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parsed = match recognize_float::<&str, nom::error::Error<&str>>(trimmed) {
        Ok(("", literal)) => literal.parse::<f64>().ok().and_then(finite),
        _ => None,
    };
    if parsed.is_none() {
        debug!(input_len = trimmed.len(), "discarding non-numeric input");
    }
    parsed
}

/// Canonical centimeters for a depth, distance or visibility value.
pub fn depth_to_canonical(value: Option<f64>, unit: DepthUnit) -> Option<Centimeters> {
    let value = value.and_then(finite)?;
    match unit {
        DepthUnit::Meters => checked_meters_to_cm(value),
        DepthUnit::Feet => checked_feet_to_cm(value),
    }
}

/// Canonical tenths of a degree Celsius for a temperature value.
pub fn temperature_to_canonical(
    value: Option<f64>,
    unit: TemperatureUnit,
) -> Option<CelsiusTenths> {
    let value = value.and_then(finite)?;
    match unit {
        TemperatureUnit::Celsius => checked_celsius_to_cx10(value),
        TemperatureUnit::Fahrenheit => checked_fahrenheit_to_cx10(value),
    }
}

pub fn parse_depth_input(raw: &RawInput, unit: DepthUnit) -> Option<Centimeters> {
    depth_to_canonical(coerce_number(raw), unit)
}

pub fn parse_temperature_input(raw: &RawInput, unit: TemperatureUnit) -> Option<CelsiusTenths> {
    temperature_to_canonical(coerce_number(raw), unit)
}

/// Text-field variant of [`parse_depth_input`], as exposed to the mobile app.
pub fn parse_depth_text(raw: Option<String>, unit: DepthUnit) -> Option<Centimeters> {
    parse_depth_input(&RawInput::from(raw), unit)
}

/// Text-field variant of [`parse_temperature_input`], as exposed to the mobile app.
pub fn parse_temperature_text(raw: Option<String>, unit: TemperatureUnit) -> Option<CelsiusTenths> {
    parse_temperature_input(&RawInput::from(raw), unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(&RawInput::from(12.5)), Some(12.5));
        assert_eq!(coerce_number(&RawInput::from("15")), Some(15.0));
        assert_eq!(coerce_number(&RawInput::from("  -2.5 ")), Some(-2.5));
        assert_eq!(coerce_number(&RawInput::from(".5")), Some(0.5));
        assert_eq!(coerce_number(&RawInput::from("1e3")), Some(1000.0));
        assert_eq!(coerce_number(&RawInput::from("+7")), Some(7.0));
    }

    #[test]
    fn test_coerce_number_rejects_garbage() {
        assert_eq!(coerce_number(&RawInput::Absent), None);
        assert_eq!(coerce_number(&RawInput::from("")), None);
        assert_eq!(coerce_number(&RawInput::from("   ")), None);
        assert_eq!(coerce_number(&RawInput::from("abc")), None);
        assert_eq!(coerce_number(&RawInput::from("12ft")), None);
        assert_eq!(coerce_number(&RawInput::from("1.2.3")), None);
        assert_eq!(coerce_number(&RawInput::from("NaN")), None);
        assert_eq!(coerce_number(&RawInput::from("inf")), None);
        assert_eq!(coerce_number(&RawInput::from("1e999")), None);
        assert_eq!(coerce_number(&RawInput::from(f64::NAN)), None);
        assert_eq!(coerce_number(&RawInput::from(f64::INFINITY)), None);
    }

    #[test]
    fn test_parse_depth_input() {
        assert_eq!(parse_depth_input(&RawInput::from(25.0), DepthUnit::Meters), Some(2500));
        assert_eq!(parse_depth_input(&RawInput::from("15"), DepthUnit::Meters), Some(1500));
        assert_eq!(parse_depth_input(&RawInput::from(60.0), DepthUnit::Feet), Some(1829));
        assert_eq!(parse_depth_input(&RawInput::from("100"), DepthUnit::Feet), Some(3048));
        assert_eq!(parse_depth_input(&RawInput::Absent, DepthUnit::Meters), None);
    }

    #[test]
    fn test_parse_depth_absent_for_every_unit() {
        for unit in [DepthUnit::Meters, DepthUnit::Feet] {
            assert_eq!(parse_depth_input(&RawInput::Absent, unit), None);
            assert_eq!(parse_depth_input(&RawInput::from(""), unit), None);
            assert_eq!(parse_depth_input(&RawInput::from("deep"), unit), None);
            assert_eq!(parse_depth_text(None, unit), None);
            assert_eq!(depth_to_canonical(Some(f64::NAN), unit), None);
        }
    }

    #[test]
    fn test_parse_temperature_input() {
        assert_eq!(
            parse_temperature_input(&RawInput::from(25.0), TemperatureUnit::Celsius),
            Some(250)
        );
        assert_eq!(
            parse_temperature_input(&RawInput::from("24"), TemperatureUnit::Celsius),
            Some(240)
        );
        assert_eq!(
            parse_temperature_input(&RawInput::from(77.0), TemperatureUnit::Fahrenheit),
            Some(250)
        );
        assert_eq!(
            parse_temperature_input(&RawInput::from("78"), TemperatureUnit::Fahrenheit),
            Some(256)
        );
        assert_eq!(
            parse_temperature_input(&RawInput::Absent, TemperatureUnit::Fahrenheit),
            None
        );
    }

    #[test]
    fn test_parse_temperature_absent_for_every_unit() {
        for unit in [TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit] {
            assert_eq!(parse_temperature_input(&RawInput::from(""), unit), None);
            assert_eq!(parse_temperature_input(&RawInput::from("warm"), unit), None);
            assert_eq!(parse_temperature_text(None, unit), None);
            assert_eq!(temperature_to_canonical(Some(f64::INFINITY), unit), None);
        }
    }

    #[test]
    fn test_huge_finite_input_is_absent() {
        for text in ["1e300", "-1e300", "1e18"] {
            let raw = RawInput::from(text);
            for unit in [DepthUnit::Meters, DepthUnit::Feet] {
                assert_eq!(parse_depth_input(&raw, unit), None, "{text} {unit}");
            }
        }
        for text in ["1e300", "-1e300", "1e19"] {
            let raw = RawInput::from(text);
            for unit in [TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit] {
                assert_eq!(parse_temperature_input(&raw, unit), None, "{text} {unit}");
            }
        }
        assert_eq!(depth_to_canonical(Some(f64::MAX), DepthUnit::Feet), None);
        assert_eq!(
            temperature_to_canonical(Some(f64::MIN), TemperatureUnit::Celsius),
            None
        );
    }

    #[test]
    fn test_large_but_representable_input_is_kept() {
        assert_eq!(
            parse_depth_input(&RawInput::from("1e12"), DepthUnit::Meters),
            Some(100_000_000_000_000)
        );
    }

    #[test]
    fn test_zero_is_not_absent() {
        assert_eq!(parse_depth_input(&RawInput::from("0"), DepthUnit::Feet), Some(0));
        assert_eq!(
            parse_temperature_input(&RawInput::from(32.0), TemperatureUnit::Fahrenheit),
            Some(0)
        );
    }

    #[test]
    fn test_parse_text_variants() {
        assert_eq!(parse_depth_text(Some("18.5".to_string()), DepthUnit::Meters), Some(1850));
        assert_eq!(
            parse_temperature_text(Some(" 78 ".to_string()), TemperatureUnit::Fahrenheit),
            Some(256)
        );
    }

    #[test]
    fn test_raw_input_from_json() {
        let number: RawInput = serde_json::from_str("25").unwrap();
        assert_eq!(number, RawInput::Number(25.0));
        let text: RawInput = serde_json::from_str("\"15\"").unwrap();
        assert_eq!(text, RawInput::Text("15".to_string()));
        let absent: RawInput = serde_json::from_str("null").unwrap();
        assert_eq!(absent, RawInput::Absent);
    }
}
