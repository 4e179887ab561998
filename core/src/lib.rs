pub mod error;
pub mod units;

uniffi::include_scaffolding!("diveunits");

pub use error::UnitError;
pub use units::{
    celsius_to_cx10, checked_celsius_to_cx10, checked_fahrenheit_to_cx10, checked_feet_to_cm,
    checked_meters_to_cm, cm_to_feet, cm_to_meters, cx10_to_celsius, cx10_to_fahrenheit,
    default_unit_preferences, fahrenheit_to_cx10, feet_to_cm, format_depth, format_temperature,
    meters_to_cm, parse_depth_text, parse_temperature_text, parse_unit_system,
    preferences_for_system, system_for_preferences, system_unit_label, unit_label, CelsiusTenths,
    Centimeters, DepthUnit, DisplayValue, PressureUnit, QuantityKind, TemperatureUnit,
    UnitPreferences, UnitSystem, WeightUnit,
};
