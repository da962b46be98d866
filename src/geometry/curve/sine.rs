use tracing::{debug, instrument};

use super::{require_finite, require_positive, sample_count, sin_deg, SampledCurve};
use crate::error::{OperationError, Result};
use crate::math::Point2;

/// A sine wave along the X axis.
///
/// The wavelength is either given directly or derived as `length / period`.
/// The phase shift is a distance along X, converted to degrees against the
/// wavelength.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineWave {
    length: f64,
    amplitude: f64,
    wavelength: Option<f64>,
    period: Option<f64>,
    resolution: f64,
    phase_shift: f64,
    y_move: f64,
}

impl SineWave {
    /// Creates a wave of `length` and `amplitude`; set the wavelength or
    /// period before sampling.
    #[must_use]
    pub fn new(length: f64, amplitude: f64) -> Self {
        Self {
            length,
            amplitude,
            wavelength: None,
            period: None,
            resolution: 1.0,
            phase_shift: 0.0,
            y_move: 0.0,
        }
    }

    /// Sets the wavelength. Takes precedence over [`Self::with_period`].
    #[must_use]
    pub fn with_wavelength(mut self, wavelength: f64) -> Self {
        self.wavelength = Some(wavelength);
        self
    }

    /// Sets the number of full waves over the length.
    #[must_use]
    pub fn with_period(mut self, period: f64) -> Self {
        self.period = Some(period);
        self
    }

    /// Sets the sampling step along X (default 1).
    #[must_use]
    pub fn with_resolution(mut self, resolution: f64) -> Self {
        self.resolution = resolution;
        self
    }

    /// Sets the phase shift as a distance along X (default 0).
    #[must_use]
    pub fn with_phase_shift(mut self, phase_shift: f64) -> Self {
        self.phase_shift = phase_shift;
        self
    }

    /// Sets a constant Y offset (default 0).
    #[must_use]
    pub fn with_y_move(mut self, y_move: f64) -> Self {
        self.y_move = y_move;
        self
    }

    /// Resolves the effective wavelength.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if neither wavelength nor period
    /// is set, and a range error if the result is not positive.
    pub fn wavelength(&self) -> Result<f64> {
        let wavelength = match (self.wavelength, self.period) {
            (Some(w), _) => w,
            (None, Some(p)) => {
                require_positive("period", p)?;
                self.length / p
            }
            (None, None) => {
                return Err(OperationError::InvalidInput(
                    "sine wave needs a wavelength or a period".to_owned(),
                )
                .into());
            }
        };
        require_positive("wavelength", wavelength)?;
        Ok(wavelength)
    }

    /// Y value at position `x`.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::wavelength`] errors.
    pub fn value_at(&self, x: f64) -> Result<f64> {
        let wavelength = self.wavelength()?;
        Ok(self.y_at(x, wavelength))
    }

    fn y_at(&self, x: f64, wavelength: f64) -> f64 {
        let phase_angle = 360.0 * self.phase_shift / wavelength;
        self.amplitude * sin_deg(360.0 * x / wavelength + phase_angle) + self.y_move
    }
}

impl SampledCurve for SineWave {
    type Point = Point2;

    #[instrument(level = "trace", skip_all)]
    fn sample(&self) -> Result<Vec<Point2>> {
        require_positive("length", self.length)?;
        require_positive("resolution", self.resolution)?;
        require_finite("amplitude", self.amplitude)?;
        let wavelength = self.wavelength()?;

        let n = sample_count(self.length, self.resolution)?;
        debug!(samples = n, wavelength, "sampling sine wave");
        #[allow(clippy::cast_precision_loss)]
        let points = (0..n)
            .map(|i| {
                let x = i as f64 * self.resolution;
                Point2::new(x, self.y_at(x, wavelength))
            })
            .collect();
        Ok(points)
    }
}
