//! Circle-from-chord utilities.
//!
//! The sagitta `s` of an arc is the distance from the chord midpoint to the
//! arc. For chord length `c` and radius `r`: `s = r - sqrt(r² - (c/2)²)`, and
//! conversely `r = s/2 + c²/(8s)`.

use crate::error::{GeometryError, Result};

/// Sagitta of the minor arc over a chord of length `chord` in a circle of
/// `radius`.
///
/// # Errors
///
/// Returns `GeometryError::ParameterOutOfRange` if `radius` is not positive
/// or `chord` is outside `[0, 2 * radius]`.
pub fn sagitta(radius: f64, chord: f64) -> Result<f64> {
    if !(radius > 0.0 && radius.is_finite()) {
        return Err(GeometryError::ParameterOutOfRange {
            parameter: "radius",
            value: radius,
            min: 0.0,
            max: f64::INFINITY,
        }
        .into());
    }
    if !(0.0..=2.0 * radius).contains(&chord) {
        return Err(GeometryError::ParameterOutOfRange {
            parameter: "chord",
            value: chord,
            min: 0.0,
            max: 2.0 * radius,
        }
        .into());
    }
    let half = chord * 0.5;
    Ok(radius - (radius * radius - half * half).sqrt())
}

/// Radius of the circle through a chord of length `chord` whose arc has the
/// given `sagitta`.
///
/// # Errors
///
/// Returns `GeometryError::ParameterOutOfRange` if `sagitta` is not positive
/// or `chord` is negative.
pub fn radius_from_chord(chord: f64, sagitta: f64) -> Result<f64> {
    if !(sagitta > 0.0 && sagitta.is_finite()) {
        return Err(GeometryError::ParameterOutOfRange {
            parameter: "sagitta",
            value: sagitta,
            min: 0.0,
            max: f64::INFINITY,
        }
        .into());
    }
    if !(chord >= 0.0 && chord.is_finite()) {
        return Err(GeometryError::ParameterOutOfRange {
            parameter: "chord",
            value: chord,
            min: 0.0,
            max: f64::INFINITY,
        }
        .into());
    }
    Ok(sagitta * 0.5 + chord * chord / (8.0 * sagitta))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn semicircle_sagitta_is_radius() {
        assert_relative_eq!(sagitta(5.0, 10.0).unwrap(), 5.0);
    }

    #[test]
    fn zero_chord_has_zero_sagitta() {
        assert_relative_eq!(sagitta(5.0, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn radius_round_trips_through_sagitta() {
        let s = sagitta(1200.0, 1800.0).unwrap();
        assert_relative_eq!(radius_from_chord(1800.0, s).unwrap(), 1200.0, max_relative = 1e-12);
    }

    #[test]
    fn chord_longer_than_diameter_fails() {
        assert!(sagitta(1.0, 2.5).is_err());
    }

    #[test]
    fn non_positive_sagitta_fails() {
        assert!(radius_from_chord(10.0, 0.0).is_err());
        assert!(radius_from_chord(10.0, -1.0).is_err());
    }
}
