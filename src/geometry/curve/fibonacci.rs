use tracing::{debug, instrument};

use super::{cos_deg, require_positive, sin_deg, SampledCurve};
use crate::error::{OperationError, Result};
use crate::math::bounds::{bounding_size, center_path};
use crate::math::{Point2, TOLERANCE};

/// Golden ratio `(1 + sqrt(5)) / 2`.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Radius at angle zero before any rescaling.
const BASE_RADIUS: f64 = 10.0;

/// A golden spiral: the radius grows by a factor of φ every 90°.
///
/// The sampled point set is uniformly scaled to fit `max_width` and/or
/// `max_height`; with both set the tighter bound wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FibonacciSpiral {
    pub max_width: Option<f64>,
    pub max_height: Option<f64>,
    /// Number of angular steps.
    pub points: usize,
    /// Angular step in degrees.
    pub angle_step: f64,
    /// Recentre the result on its bounding-box centre.
    pub center: bool,
}

impl Default for FibonacciSpiral {
    fn default() -> Self {
        Self {
            max_width: None,
            max_height: None,
            points: 360,
            angle_step: 1.0,
            center: false,
        }
    }
}

impl FibonacciSpiral {
    #[must_use]
    pub fn with_max_width(mut self, max_width: f64) -> Self {
        self.max_width = Some(max_width);
        self
    }

    #[must_use]
    pub fn with_max_height(mut self, max_height: f64) -> Self {
        self.max_height = Some(max_height);
        self
    }

    #[must_use]
    pub fn with_points(mut self, points: usize, angle_step: f64) -> Self {
        self.points = points;
        self.angle_step = angle_step;
        self
    }

    #[must_use]
    pub fn centered(mut self, center: bool) -> Self {
        self.center = center;
        self
    }

    /// Unscaled radius at `angle` degrees.
    #[must_use]
    pub fn radius_at(angle: f64) -> f64 {
        BASE_RADIUS * PHI.powf(angle / 90.0)
    }

    fn scale_for(limit: Option<f64>, extent: f64) -> Result<Option<f64>> {
        let Some(limit) = limit else {
            return Ok(None);
        };
        require_positive("max extent", limit)?;
        if extent < TOLERANCE {
            return Err(OperationError::Failed(
                "spiral has zero extent and cannot be scaled".to_owned(),
            )
            .into());
        }
        Ok(Some(limit / extent))
    }
}

impl SampledCurve for FibonacciSpiral {
    type Point = Point2;

    #[instrument(level = "trace", skip_all)]
    fn sample(&self) -> Result<Vec<Point2>> {
        require_positive("angle_step", self.angle_step)?;
        if self.points == 0 {
            return Err(OperationError::InvalidInput(
                "spiral needs at least one angular step".to_owned(),
            )
            .into());
        }

        #[allow(clippy::cast_precision_loss)]
        let raw: Vec<Point2> = (0..=self.points)
            .map(|i| {
                let a = i as f64 * self.angle_step;
                let r = Self::radius_at(a);
                Point2::new(r * cos_deg(a), r * sin_deg(a))
            })
            .collect();

        let size = bounding_size(&raw, None)?;
        let sx = Self::scale_for(self.max_width, size.width)?;
        let sy = Self::scale_for(self.max_height, size.height)?;
        let scale = match (sx, sy) {
            (Some(a), Some(b)) => a.min(b),
            (Some(s), None) | (None, Some(s)) => s,
            (None, None) => 1.0,
        };
        debug!(samples = raw.len(), scale, "sampled fibonacci spiral");

        let scaled: Vec<Point2> = raw.iter().map(|p| Point2::from(p.coords * scale)).collect();
        if self.center {
            center_path(&scaled)
        } else {
            Ok(scaled)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn radius_grows_by_phi_per_quarter_turn() {
        let r0 = FibonacciSpiral::radius_at(0.0);
        let r90 = FibonacciSpiral::radius_at(90.0);
        assert_relative_eq!(r0, 10.0);
        assert_relative_eq!(r90 / r0, PHI);
    }

    #[test]
    fn golden_ratio_constant() {
        assert_relative_eq!(PHI, (1.0 + 5.0_f64.sqrt()) / 2.0);
    }

    #[test]
    fn default_sample_count() {
        let pts = FibonacciSpiral::default().sample().unwrap();
        assert_eq!(pts.len(), 361);
        assert_abs_diff_eq!(pts[0].x, 10.0);
        assert_abs_diff_eq!(pts[0].y, 0.0);
    }

    #[test]
    fn max_width_rescales_to_exact_width() {
        let pts = FibonacciSpiral::default().with_max_width(100.0).sample().unwrap();
        let size = bounding_size(&pts, None).unwrap();
        assert_relative_eq!(size.width, 100.0, max_relative = 1e-9);
    }

    #[test]
    fn both_limits_use_the_tighter_scale() {
        let pts = FibonacciSpiral::default()
            .with_max_width(100.0)
            .with_max_height(20.0)
            .sample()
            .unwrap();
        let size = bounding_size(&pts, None).unwrap();
        assert!(size.width <= 100.0 + 1e-9);
        assert_relative_eq!(size.height, 20.0, max_relative = 1e-9);
    }

    #[test]
    fn centered_spiral_has_centered_bounds() {
        let pts = FibonacciSpiral::default()
            .with_max_width(50.0)
            .centered(true)
            .sample()
            .unwrap();
        let b = crate::math::bounds::bounds(&pts).unwrap();
        assert_abs_diff_eq!(b.min.x + b.max.x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(b.min.y + b.max.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_points_fails() {
        let spiral = FibonacciSpiral::default().with_points(0, 1.0);
        assert!(spiral.sample().is_err());
    }

    #[test]
    fn non_positive_limit_fails() {
        assert!(FibonacciSpiral::default().with_max_width(0.0).sample().is_err());
    }
}
