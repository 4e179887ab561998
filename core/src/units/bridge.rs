//! Bridging between UI-entered values and metric values.
//!
//! Endpoints that understand canonical units accept plain meters, Celsius,
//! bar and kilograms. Imperial lengths and temperatures travel through their
//! canonical integer on the way, so the metric value an endpoint receives
//! converts back to exactly what the input parsers would have stored. Depths
//! and temperatures whose canonical integer would not fit are absent in
//! either system.

use super::convert::{
    bar_to_psi, checked_meters_to_cm, cm_to_feet, cm_to_meters, cx10_to_celsius,
    cx10_to_fahrenheit, kg_to_lb, lb_to_kg, psi_to_bar,
};
use super::input::{coerce_number, depth_to_canonical, temperature_to_canonical, RawInput};
use super::{DepthUnit, QuantityKind, TemperatureUnit, UnitSystem};

/// Convert a value typed in the active unit system into its metric equivalent.
pub fn to_metric_value(raw: &RawInput, kind: QuantityKind, system: UnitSystem) -> Option<f64> {
    let value = coerce_number(raw)?;
    Some(match (kind, system) {
        (QuantityKind::Depth | QuantityKind::Distance, UnitSystem::Metric) => {
            depth_to_canonical(Some(value), DepthUnit::Meters)?;
            value
        }
        (QuantityKind::Depth | QuantityKind::Distance, UnitSystem::Imperial) => {
            cm_to_meters(depth_to_canonical(Some(value), DepthUnit::Feet)?)
        }
        (QuantityKind::Temperature, UnitSystem::Metric) => {
            temperature_to_canonical(Some(value), TemperatureUnit::Celsius)?;
            value
        }
        (QuantityKind::Temperature, UnitSystem::Imperial) => cx10_to_celsius(
            temperature_to_canonical(Some(value), TemperatureUnit::Fahrenheit)?,
        ),
        (QuantityKind::Pressure | QuantityKind::Weight, UnitSystem::Metric) => value,
        (QuantityKind::Pressure, UnitSystem::Imperial) => psi_to_bar(value),
        (QuantityKind::Weight, UnitSystem::Imperial) => lb_to_kg(value),
    })
}

/// Convert a metric value into the active unit system for a form field.
///
/// The result is unrounded; the caller decides display precision.
pub fn from_metric_value(metric: Option<f64>, kind: QuantityKind, system: UnitSystem) -> Option<f64> {
    let value = metric.filter(|v| v.is_finite())?;
    Some(match (kind, system) {
        (QuantityKind::Depth | QuantityKind::Distance, UnitSystem::Metric) => {
            checked_meters_to_cm(value)?;
            value
        }
        (QuantityKind::Depth | QuantityKind::Distance, UnitSystem::Imperial) => {
            cm_to_feet(checked_meters_to_cm(value)?)
        }
        (QuantityKind::Temperature, UnitSystem::Metric) => {
            temperature_to_canonical(Some(value), TemperatureUnit::Celsius)?;
            value
        }
        (QuantityKind::Temperature, UnitSystem::Imperial) => {
            cx10_to_fahrenheit(temperature_to_canonical(Some(value), TemperatureUnit::Celsius)?)
        }
        (QuantityKind::Pressure | QuantityKind::Weight, UnitSystem::Metric) => value,
        (QuantityKind::Pressure, UnitSystem::Imperial) => bar_to_psi(value),
        (QuantityKind::Weight, UnitSystem::Imperial) => kg_to_lb(value),
    })
}
