use tracing::{debug, instrument, warn};

use super::{cos_deg, require_finite, require_positive, sin_deg, SampledCurve};
use crate::error::{OperationError, Result};
use crate::math::Point2;

/// Largest `|u|` for which the truncated Fresnel series in [`clothoid`] is
/// considered accurate.
pub const CLOTHOID_SERIES_LIMIT: f64 = 1.0;

/// Point on an Euler spiral at parameter `t`, for end radius `r` and length `l`.
///
/// Uses the clothoid parameter `A = sqrt(r * l)` and the normalized parameter
/// `u = t * l / A`, with the 5th-order truncated series
///
/// ```text
/// C(u) ≈ u (1 - u²/10 + u⁴/216)
/// S(u) ≈ (u³/3) (1 - u²/14 + u⁴/336)
/// ```
///
/// returning `[A * C(u), A * S(u)]`. Accuracy degrades quickly once `|u|`
/// exceeds [`CLOTHOID_SERIES_LIMIT`]; such calls log a warning but still
/// return the series value.
///
/// # Errors
///
/// Returns `GeometryError::ParameterOutOfRange` if `r` or `l` is not positive
/// or `t` is not finite.
pub fn clothoid(t: f64, r: f64, l: f64) -> Result<Point2> {
    require_positive("r", r)?;
    require_positive("l", l)?;
    require_finite("t", t)?;

    let a = (r * l).sqrt();
    let u = t * l / a;
    if u.abs() > CLOTHOID_SERIES_LIMIT {
        warn!(u, limit = CLOTHOID_SERIES_LIMIT, "clothoid series evaluated outside its accurate range");
    }
    let u2 = u * u;
    let u4 = u2 * u2;
    let c = u * (1.0 - u2 / 10.0 + u4 / 216.0);
    let s = (u * u2 / 3.0) * (1.0 - u2 / 14.0 + u4 / 336.0);
    Ok(Point2::new(a * c, a * s))
}

/// A clothoid with linearly varying curvature, integrated numerically.
///
/// The heading in degrees is `θ(s) = ½·κ'·s² + κ₀·s + θ₀`; positions follow
/// from trapezoidal integration of `(cos θ, sin θ)` over arc length, starting
/// at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneralizedClothoid {
    /// Total arc length.
    pub s_max: f64,
    /// Curvature rate `κ'` (degrees per unit², heading units).
    pub kappa_prime: f64,
    /// Initial curvature `κ₀` (degrees per unit).
    pub kappa_0: f64,
    /// Initial heading `θ₀` in degrees.
    pub theta_0: f64,
    /// Number of output points, including the start point.
    pub num_points: usize,
}

impl GeneralizedClothoid {
    /// Heading in degrees at arc length `s`.
    #[must_use]
    pub fn heading(&self, s: f64) -> f64 {
        0.5 * self.kappa_prime * s * s + self.kappa_0 * s + self.theta_0
    }
}

impl SampledCurve for GeneralizedClothoid {
    type Point = Point2;

    #[instrument(level = "trace", skip_all)]
    fn sample(&self) -> Result<Vec<Point2>> {
        require_positive("s_max", self.s_max)?;
        require_finite("kappa_prime", self.kappa_prime)?;
        require_finite("kappa_0", self.kappa_0)?;
        require_finite("theta_0", self.theta_0)?;
        if self.num_points < 2 {
            return Err(OperationError::InvalidInput(format!(
                "clothoid needs at least 2 points, got {}",
                self.num_points
            ))
            .into());
        }

        #[allow(clippy::cast_precision_loss)]
        let ds = self.s_max / (self.num_points - 1) as f64;
        let mut points = Vec::with_capacity(self.num_points);
        let (mut x, mut y) = (0.0, 0.0);
        let mut prev = self.heading(0.0);
        points.push(Point2::new(x, y));
        for i in 1..self.num_points {
            #[allow(clippy::cast_precision_loss)]
            let theta = self.heading(i as f64 * ds);
            x += 0.5 * ds * (cos_deg(prev) + cos_deg(theta));
            y += 0.5 * ds * (sin_deg(prev) + sin_deg(theta));
            points.push(Point2::new(x, y));
            prev = theta;
        }
        debug!(samples = points.len(), ds, "integrated generalized clothoid");
        Ok(points)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::path::path_length;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn clothoid_starts_at_origin() {
        let p = clothoid(0.0, 100.0, 50.0).unwrap();
        assert_abs_diff_eq!(p.x, 0.0);
        assert_abs_diff_eq!(p.y, 0.0);
    }

    #[test]
    fn clothoid_matches_series() {
        // r = l = 1 gives A = 1 and u = t.
        let p = clothoid(0.5, 1.0, 1.0).unwrap();
        let u: f64 = 0.5;
        let c = u * (1.0 - u.powi(2) / 10.0 + u.powi(4) / 216.0);
        let s = u.powi(3) / 3.0 * (1.0 - u.powi(2) / 14.0 + u.powi(4) / 336.0);
        assert_relative_eq!(p.x, c);
        assert_relative_eq!(p.y, s);
    }

    #[test]
    fn clothoid_is_odd_in_t() {
        let a = clothoid(0.3, 20.0, 10.0).unwrap();
        let b = clothoid(-0.3, 20.0, 10.0).unwrap();
        assert_relative_eq!(a.x, -b.x);
        assert_relative_eq!(a.y, -b.y);
    }

    #[test]
    fn clothoid_rejects_non_positive_radius() {
        assert!(clothoid(0.5, 0.0, 1.0).is_err());
        assert!(clothoid(0.5, 1.0, -1.0).is_err());
    }

    #[test]
    fn zero_curvature_is_a_straight_line() {
        let curve = GeneralizedClothoid {
            s_max: 10.0,
            kappa_prime: 0.0,
            kappa_0: 0.0,
            theta_0: 90.0,
            num_points: 11,
        };
        let pts = curve.sample().unwrap();
        assert_eq!(pts.len(), 11);
        assert_abs_diff_eq!(pts[10].x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(pts[10].y, 10.0, epsilon = 1e-9);
    }

    #[test]
    fn constant_curvature_stays_on_circle() {
        // 36 degrees per unit over 10 units: a full circle of circumference 10.
        let curve = GeneralizedClothoid {
            s_max: 10.0,
            kappa_prime: 0.0,
            kappa_0: 36.0,
            theta_0: 0.0,
            num_points: 2001,
        };
        let pts = curve.sample().unwrap();
        let end = pts[pts.len() - 1];
        assert_abs_diff_eq!(end.x, 0.0, epsilon = 1e-3);
        assert_abs_diff_eq!(end.y, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn arc_length_is_preserved() {
        let curve = GeneralizedClothoid {
            s_max: 5.0,
            kappa_prime: 4.0,
            kappa_0: 2.0,
            theta_0: 15.0,
            num_points: 501,
        };
        let pts = curve.sample().unwrap();
        assert_relative_eq!(path_length(&pts), 5.0, max_relative = 1e-3);
    }

    #[test]
    fn needs_two_points() {
        let curve = GeneralizedClothoid {
            s_max: 5.0,
            kappa_prime: 0.0,
            kappa_0: 0.0,
            theta_0: 0.0,
            num_points: 1,
        };
        assert!(curve.sample().is_err());
    }
}
