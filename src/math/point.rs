use super::{Point2, Point3, TOLERANCE};
use crate::error::{GeometryError, Result};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Point2 {}
    impl Sealed for super::Point3 {}
}

/// A point usable in a path: implemented only by [`Point2`] and [`Point3`].
///
/// Dimension-agnostic functions (lengths, bounds, centring) are generic over
/// this trait, so a path is always made of 2- or 3-component points.
pub trait PathPoint: Copy + std::fmt::Debug + sealed::Sealed {
    /// Number of coordinates (2 or 3).
    const DIM: usize;

    /// Returns the coordinate along `axis` (0 = x, 1 = y, 2 = z).
    fn coord(&self, axis: usize) -> f64;

    /// Builds a point from a per-axis generator.
    fn from_fn(f: impl FnMut(usize) -> f64) -> Self;

    /// Parses a point of this dimension from a loose coordinate slice.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidPoint` if `coords` is not a valid point,
    /// or `GeometryError::DimensionMismatch` if it has the wrong dimension.
    fn from_coords(coords: &[f64]) -> Result<Self>;

    /// Returns the coordinates as a `Vec`.
    fn to_vec(&self) -> Vec<f64> {
        (0..Self::DIM).map(|axis| self.coord(axis)).collect()
    }

    /// Returns `true` if every coordinate is finite.
    fn is_finite(&self) -> bool {
        (0..Self::DIM).all(|axis| self.coord(axis).is_finite())
    }
}

/// Checks that `point` has only finite coordinates.
///
/// # Errors
///
/// Returns `GeometryError::InvalidPoint` otherwise.
pub fn require_finite_point<P: PathPoint>(point: &P) -> Result<()> {
    if point.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::InvalidPoint(point.to_vec()).into())
    }
}

impl PathPoint for Point2 {
    const DIM: usize = 2;

    fn coord(&self, axis: usize) -> f64 {
        self[axis]
    }

    fn from_fn(mut f: impl FnMut(usize) -> f64) -> Self {
        let x = f(0);
        let y = f(1);
        Point2::new(x, y)
    }

    fn from_coords(coords: &[f64]) -> Result<Self> {
        match AnyPoint::from_coords(coords)? {
            AnyPoint::Planar(p) => Ok(p),
            AnyPoint::Spatial(_) => Err(GeometryError::DimensionMismatch {
                expected: 2,
                found: 3,
            }
            .into()),
        }
    }
}

impl PathPoint for Point3 {
    const DIM: usize = 3;

    fn coord(&self, axis: usize) -> f64 {
        self[axis]
    }

    fn from_fn(mut f: impl FnMut(usize) -> f64) -> Self {
        let x = f(0);
        let y = f(1);
        let z = f(2);
        Point3::new(x, y, z)
    }

    fn from_coords(coords: &[f64]) -> Result<Self> {
        match AnyPoint::from_coords(coords)? {
            AnyPoint::Spatial(p) => Ok(p),
            AnyPoint::Planar(_) => Err(GeometryError::DimensionMismatch {
                expected: 3,
                found: 2,
            }
            .into()),
        }
    }
}

/// A point of either dimension, parsed from untyped input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyPoint {
    Planar(Point2),
    Spatial(Point3),
}

impl AnyPoint {
    /// Parses a point from 2 or 3 finite coordinates.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidPoint` for any other input.
    pub fn from_coords(coords: &[f64]) -> Result<Self> {
        if !is_point(coords) {
            return Err(GeometryError::InvalidPoint(coords.to_vec()).into());
        }
        match *coords {
            [x, y] => Ok(Self::Planar(Point2::new(x, y))),
            [x, y, z] => Ok(Self::Spatial(Point3::new(x, y, z))),
            _ => Err(GeometryError::InvalidPoint(coords.to_vec()).into()),
        }
    }

    /// Returns the number of coordinates.
    #[must_use]
    pub fn dim(&self) -> usize {
        match self {
            Self::Planar(_) => 2,
            Self::Spatial(_) => 3,
        }
    }
}

/// Returns `true` if `coords` holds exactly 2 or 3 finite numbers.
#[must_use]
pub fn is_point(coords: &[f64]) -> bool {
    matches!(coords.len(), 2 | 3) && coords.iter().all(|c| c.is_finite())
}

/// Returns `true` if `points` is exactly two valid, distinct points of the
/// same dimension.
#[must_use]
pub fn is_line<C: AsRef<[f64]>>(points: &[C]) -> bool {
    let [a, b] = points else {
        return false;
    };
    let (a, b) = (a.as_ref(), b.as_ref());
    if !is_point(a) || !is_point(b) || a.len() != b.len() {
        return false;
    }
    let len_sq: f64 = a.iter().zip(b).map(|(p, q)| (q - p).powi(2)).sum();
    len_sq.sqrt() >= TOLERANCE
}

/// Euclidean distance between two points of the same dimension.
#[must_use]
pub fn line_length<P: PathPoint>(a: &P, b: &P) -> f64 {
    (0..P::DIM)
        .map(|axis| (b.coord(axis) - a.coord(axis)).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Arithmetic mean of two points.
#[must_use]
pub fn midpoint<P: PathPoint>(a: &P, b: &P) -> P {
    P::from_fn(|axis| (a.coord(axis) + b.coord(axis)) * 0.5)
}
