use super::{require_positive, sample_count, SampledCurve};
use crate::error::Result;
use crate::math::Point3;

/// A parabolic arc in the XZ plane, peaking at `height` over the origin and
/// landing at `x = ±range/2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ballistic {
    pub range: f64,
    pub height: f64,
    /// Sampling step along X used by [`SampledCurve::sample`].
    pub step: f64,
}

impl Default for Ballistic {
    fn default() -> Self {
        Self {
            range: 4000.0,
            height: 1000.0,
            step: 100.0,
        }
    }
}

impl Ballistic {
    /// Point on the trajectory at `x`; `y` is always 0.
    ///
    /// # Errors
    ///
    /// Returns a range error if `range` is not positive.
    pub fn evaluate(&self, x: f64) -> Result<Point3> {
        require_positive("range", self.range)?;
        let half = self.range / 2.0;
        Ok(Point3::new(x, 0.0, self.height * (1.0 - (x / half).powi(2))))
    }
}

impl SampledCurve for Ballistic {
    type Point = Point3;

    #[allow(clippy::cast_precision_loss)]
    fn sample(&self) -> Result<Vec<Point3>> {
        require_positive("step", self.step)?;
        let start = -self.range / 2.0;
        (0..sample_count(self.range, self.step)?)
            .map(|i| self.evaluate(start + i as f64 * self.step))
            .collect()
    }
}
