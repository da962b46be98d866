mod ballistic;
mod clothoid;
mod droplet;
mod fibonacci;
mod sawtooth;
mod sine;

pub use ballistic::Ballistic;
pub use clothoid::{clothoid, GeneralizedClothoid, CLOTHOID_SERIES_LIMIT};
pub use droplet::DropletWave;
pub use fibonacci::FibonacciSpiral;
pub use sawtooth::SawtoothWave;
pub use sine::SineWave;

use crate::error::{GeometryError, OperationError, Result};
use crate::math::PathPoint;

/// A parametric curve sampled into an ordered point sequence.
///
/// All parameters live on the implementing struct; sampling is a pure
/// function of them.
pub trait SampledCurve {
    /// Point type of the produced path.
    type Point: PathPoint;

    /// Samples the curve.
    ///
    /// # Errors
    ///
    /// Returns an error if a required parameter is missing or out of range.
    fn sample(&self) -> Result<Vec<Self::Point>>;
}

/// Sine of an angle in degrees.
pub(crate) fn sin_deg(degrees: f64) -> f64 {
    degrees.to_radians().sin()
}

/// Cosine of an angle in degrees.
pub(crate) fn cos_deg(degrees: f64) -> f64 {
    degrees.to_radians().cos()
}

/// Checks that `value` is finite and strictly positive.
pub(crate) fn require_positive(parameter: &'static str, value: f64) -> Result<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::ParameterOutOfRange {
            parameter,
            value,
            min: 0.0,
            max: f64::INFINITY,
        }
        .into())
    }
}

/// Checks that `value` is finite.
pub(crate) fn require_finite(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::ParameterOutOfRange {
            parameter,
            value,
            min: f64::MIN,
            max: f64::MAX,
        }
        .into())
    }
}

/// Upper bound on the number of samples or offsets a single call produces.
pub const MAX_SAMPLES: usize = 1 << 24;

/// Number of samples `floor(length / step) + 1` covering `[0, length]`.
///
/// # Errors
///
/// Returns `OperationError::InvalidInput` if the count is not finite or would
/// exceed [`MAX_SAMPLES`].
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub(crate) fn sample_count(length: f64, step: f64) -> Result<usize> {
    // Nudge so that exact multiples are not lost to rounding (e.g. 0.3 / 0.1).
    let steps = (length / step + 1e-9).floor();
    if steps.is_nan() || steps >= MAX_SAMPLES as f64 {
        return Err(OperationError::InvalidInput(format!(
            "{length} / {step} needs more than {MAX_SAMPLES} samples"
        ))
        .into());
    }
    Ok(steps.max(0.0) as usize + 1)
}
