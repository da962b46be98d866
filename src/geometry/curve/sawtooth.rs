use tracing::{debug, instrument};

use super::{require_finite, require_positive, sample_count, SampledCurve};
use crate::error::Result;
use crate::math::Point2;

/// A triangular wave: within each wavelength the first half rises linearly
/// from `-amplitude` to `+amplitude` and the second half falls back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SawtoothWave {
    total_length: f64,
    amplitude: f64,
    wavelength: f64,
    interval: f64,
    phase_shift: f64,
    y_move: f64,
}

impl SawtoothWave {
    /// Creates a wave sampled every `interval` over `total_length`.
    #[must_use]
    pub fn new(total_length: f64, amplitude: f64, wavelength: f64, interval: f64) -> Self {
        Self {
            total_length,
            amplitude,
            wavelength,
            interval,
            phase_shift: 0.0,
            y_move: 0.0,
        }
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

    /// Y value at position `x`. Assumes a positive wavelength.
    #[must_use]
    pub fn value_at(&self, x: f64) -> f64 {
        let wl = self.wavelength;
        let pos = (x + self.phase_shift).rem_euclid(wl);
        let half = wl * 0.5;
        let y = if pos < half {
            -self.amplitude + 2.0 * self.amplitude * pos / half
        } else {
            self.amplitude - 2.0 * self.amplitude * (pos - half) / half
        };
        y + self.y_move
    }
}

impl SampledCurve for SawtoothWave {
    type Point = Point2;

    #[instrument(level = "trace", skip_all)]
    fn sample(&self) -> Result<Vec<Point2>> {
        require_positive("total_length", self.total_length)?;
        require_positive("wavelength", self.wavelength)?;
        require_positive("interval", self.interval)?;
        require_finite("amplitude", self.amplitude)?;

        let n = sample_count(self.total_length, self.interval)?;
        debug!(samples = n, "sampling sawtooth wave");
        #[allow(clippy::cast_precision_loss)]
        let points = (0..n)
            .map(|i| {
                let x = i as f64 * self.interval;
                Point2::new(x, self.value_at(x))
            })
            .collect();
        Ok(points)
    }
}
