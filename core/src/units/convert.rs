//! Primitive converters between physical units and canonical integers.
//!
//! Conversions into a canonical unit round exactly once, immediately, so the
//! stored value is always whole. Conversions out of a canonical unit return
//! the unrounded `f64`; rounding happens only at the display boundary, so
//! toggling units back and forth never compounds error.

use super::{CelsiusTenths, Centimeters};

// ============================================================================
// Conversion Constants
// ============================================================================

/// Centimeters per meter.
pub const CM_PER_METER: f64 = 100.0;

/// Centimeters per international foot (exact).
pub const CM_PER_FOOT: f64 = 30.48;

/// Canonical temperature scale: tenths of a degree Celsius.
pub const CX10_PER_CELSIUS: f64 = 10.0;

/// Pounds per square inch in one bar.
pub const PSI_PER_BAR: f64 = 14.503_773_773;

/// Avoirdupois pounds per kilogram.
pub const LB_PER_KG: f64 = 2.204_622_621_8;

/// Round half away from zero and narrow to a canonical integer.
///
/// Out-of-range values saturate and NaN becomes zero. Anything fed by user
/// input goes through [`checked_canonical`] instead.
fn to_canonical(value: f64) -> i64 {
    value.round() as i64
}

/// Round half away from zero, or `None` when the result is NaN, infinite or
/// outside the `i64` range.
fn checked_canonical(value: f64) -> Option<i64> {
    let rounded = value.round();
    // `i64::MAX as f64` is 2^63, one past the largest i64.
    let in_range = rounded >= i64::MIN as f64 && rounded < i64::MAX as f64;
    (rounded.is_finite() && in_range).then_some(rounded as i64)
}

// ============================================================================
// Length
// ============================================================================

/// Meters to canonical centimeters. Saturates outside the `i64` range; see
/// [`checked_meters_to_cm`].
pub fn meters_to_cm(meters: f64) -> Centimeters {
    to_canonical(meters * CM_PER_METER)
}

pub fn checked_meters_to_cm(meters: f64) -> Option<Centimeters> {
    checked_canonical(meters * CM_PER_METER)
}

pub fn cm_to_meters(cm: Centimeters) -> f64 {
    cm as f64 / CM_PER_METER
}

/// Feet to canonical centimeters. `feet_to_cm(10.0)` is 305 (304.8 rounded).
pub fn feet_to_cm(feet: f64) -> Centimeters {
    to_canonical(feet * CM_PER_FOOT)
}

pub fn checked_feet_to_cm(feet: f64) -> Option<Centimeters> {
    checked_canonical(feet * CM_PER_FOOT)
}

/// Canonical centimeters to feet, unrounded.
pub fn cm_to_feet(cm: Centimeters) -> f64 {
    cm as f64 / CM_PER_FOOT
}

// ============================================================================
// Temperature
// ============================================================================

pub fn celsius_to_cx10(celsius: f64) -> CelsiusTenths {
    to_canonical(celsius * CX10_PER_CELSIUS)
}

pub fn checked_celsius_to_cx10(celsius: f64) -> Option<CelsiusTenths> {
    checked_canonical(celsius * CX10_PER_CELSIUS)
}

pub fn cx10_to_celsius(cx10: CelsiusTenths) -> f64 {
    cx10 as f64 / CX10_PER_CELSIUS
}

fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

pub fn fahrenheit_to_cx10(fahrenheit: f64) -> CelsiusTenths {
    to_canonical(fahrenheit_to_celsius(fahrenheit) * CX10_PER_CELSIUS)
}

pub fn checked_fahrenheit_to_cx10(fahrenheit: f64) -> Option<CelsiusTenths> {
    checked_canonical(fahrenheit_to_celsius(fahrenheit) * CX10_PER_CELSIUS)
}

/// Canonical temperature to Fahrenheit, unrounded.
pub fn cx10_to_fahrenheit(cx10: CelsiusTenths) -> f64 {
    cx10_to_celsius(cx10) * 9.0 / 5.0 + 32.0
}

// ============================================================================
// Pressure and weight (no canonical integer form)
// ============================================================================

pub fn bar_to_psi(bar: f64) -> f64 {
    bar * PSI_PER_BAR
}

pub fn psi_to_bar(psi: f64) -> f64 {
    psi / PSI_PER_BAR
}

pub fn kg_to_lb(kg: f64) -> f64 {
    kg * LB_PER_KG
}

pub fn lb_to_kg(lb: f64) -> f64 {
    lb / LB_PER_KG
}
