//! Linear unit helpers.
//!
//! Geometry is unit-agnostic; the architectural layer works in millimetres
//! and writes large dimensions in metres.

/// Millimetres per metre.
pub const MM_PER_M: f64 = 1000.0;

/// Converts metres to millimetres.
#[must_use]
pub fn meters(value: f64) -> f64 {
    value * MM_PER_M
}

/// A length already in millimetres, the library unit. Pairs with [`meters`]
/// so dimensions read with their unit at the call site.
#[must_use]
pub fn millimeters(value: f64) -> f64 {
    value
}

/// Converts millimetres to metres.
#[must_use]
pub fn to_meters(millimeters: f64) -> f64 {
    millimeters / MM_PER_M
}
