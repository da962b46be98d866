use super::{require_positive, sample_count, sin_deg};
use crate::error::Result;
use crate::math::Point2;

/// A damped radial ripple spreading from a point, like a drop hitting water.
///
/// The wavefront travels at `speed`; points it has not reached yet are flat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropletWave {
    pub amplitude: f64,
    /// Ripple wavelength.
    pub length: f64,
    pub speed: f64,
    /// Exponential damping per unit radius.
    pub damping: f64,
}

impl Default for DropletWave {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            length: 10.0,
            speed: 5.0,
            damping: 0.5,
        }
    }
}

impl DropletWave {
    /// Surface height at radius `r` and time `t`.
    ///
    /// Exactly `0.0` while the wavefront (`speed * t`) is short of `r`.
    ///
    /// # Errors
    ///
    /// Returns a range error if the wavelength is not positive.
    pub fn evaluate(&self, r: f64, t: f64) -> Result<f64> {
        require_positive("length", self.length)?;
        let front = self.speed * t;
        if front < r {
            return Ok(0.0);
        }
        let phase = 360.0 * (r - front) / self.length;
        Ok(self.amplitude * (-self.damping * r).exp() * sin_deg(phase))
    }

    /// Radial profile `(r, height)` at time `t`, sampled every `step` from 0
    /// to `r_max`.
    ///
    /// # Errors
    ///
    /// Returns a range error if `r_max`, `step` or the wavelength is not positive.
    #[allow(clippy::cast_precision_loss)]
    pub fn sample_profile(&self, t: f64, r_max: f64, step: f64) -> Result<Vec<Point2>> {
        require_positive("r_max", r_max)?;
        require_positive("step", step)?;
        (0..sample_count(r_max, step)?)
            .map(|i| {
                let r = i as f64 * step;
                Ok(Point2::new(r, self.evaluate(r, t)?))
            })
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn flat_beyond_the_wavefront() {
        let wave = DropletWave::default();
        for r in [5.000_001, 6.0, 10.0, 100.0] {
            assert!(wave.evaluate(r, 1.0).unwrap() == 0.0, "r={r}");
        }
    }

    #[test]
    fn damped_inside_the_wavefront() {
        let wave = DropletWave::default();
        // r - speed*t = -2.5 is a quarter wavelength back: sin(-90°) = -1.
        let h = wave.evaluate(2.5, 1.0).unwrap();
        assert!((h + (-1.25_f64).exp()).abs() < 1e-12, "h={h}");
    }

    #[test]
    fn amplitude_decays_with_radius() {
        let wave = DropletWave {
            speed: 100.0,
            ..DropletWave::default()
        };
        let near = wave.evaluate(2.5, 1.0).unwrap().abs();
        let far = wave.evaluate(12.5, 1.0).unwrap().abs();
        assert!(far < near);
    }

    #[test]
    fn profile_samples() {
        let profile = DropletWave::default().sample_profile(1.0, 10.0, 0.5).unwrap();
        assert_eq!(profile.len(), 21);
        assert!(profile.iter().filter(|p| p.x > 5.0).all(|p| p.y == 0.0));
    }

    #[test]
    fn zero_wavelength_fails() {
        let wave = DropletWave {
            length: 0.0,
            ..DropletWave::default()
        };
        assert!(wave.evaluate(2.5, 1.0).is_err());
        assert!(wave.sample_profile(1.0, 10.0, 0.5).is_err());
    }

    #[test]
    fn profile_rejects_bad_step() {
        assert!(DropletWave::default().sample_profile(1.0, 10.0, 0.0).is_err());
    }
}
