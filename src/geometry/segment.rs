use crate::error::{GeometryError, OperationError, Result};
use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::{
    line_length, midpoint, require_finite_point, PathPoint, Point2, Point3, Vector2, TOLERANCE,
};

/// A finite line segment between two distinct points of the same dimension.
///
/// Finiteness and distinctness are checked at construction, so every
/// `Segment` is a valid input to the intersection routines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<P> {
    start: P,
    end: P,
}

/// A planar segment.
pub type Segment2 = Segment<Point2>;

/// A spatial segment.
pub type Segment3 = Segment<Point3>;

impl<P: PathPoint> Segment<P> {
    /// Creates a segment from two explicit endpoints.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidPoint` for a non-finite coordinate and
    /// `GeometryError::DegenerateSegment` if the endpoints coincide.
    pub fn new(start: P, end: P) -> Result<Self> {
        require_finite_point(&start)?;
        require_finite_point(&end)?;
        if line_length(&start, &end) < TOLERANCE {
            return Err(GeometryError::DegenerateSegment(start.to_vec()).into());
        }
        Ok(Self { start, end })
    }

    /// Creates a segment from a pre-formed endpoint pair.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateSegment` if the endpoints coincide.
    pub fn from_pair([start, end]: [P; 2]) -> Result<Self> {
        Self::new(start, end)
    }

    /// Creates a segment from loosely typed coordinates.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` unless exactly two points are
    /// given, and propagates point parsing and degeneracy errors.
    pub fn from_coords<C: AsRef<[f64]>>(points: &[C]) -> Result<Self> {
        let [a, b] = points else {
            return Err(OperationError::InvalidInput(format!(
                "a segment needs exactly 2 points, got {}",
                points.len()
            ))
            .into());
        };
        Self::new(P::from_coords(a.as_ref())?, P::from_coords(b.as_ref())?)
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &P {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &P {
        &self.end
    }

    /// Returns both endpoints.
    #[must_use]
    pub fn points(&self) -> [P; 2] {
        [self.start, self.end]
    }

    /// Returns the Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        line_length(&self.start, &self.end)
    }

    /// Returns the midpoint.
    #[must_use]
    pub fn midpoint(&self) -> P {
        midpoint(&self.start, &self.end)
    }

    /// Returns the same segment walked in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Returns a copy moved by `offset`.
    ///
    /// # Errors
    ///
    /// Fails like [`Self::new`] if the offset is not finite or collapses the
    /// endpoints to rounding.
    pub fn translated(&self, offset: &P) -> Result<Self> {
        let shift = |p: &P| P::from_fn(|axis| p.coord(axis) + offset.coord(axis));
        Self::new(shift(&self.start), shift(&self.end))
    }
}

impl Segment2 {
    /// Returns the (non-normalized) direction `end - start`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    /// Intersection point of two finite segments.
    ///
    /// `None` when the segments are parallel (cross product below `eps`) or
    /// when the lines meet outside either segment.
    #[must_use]
    pub fn intersection(&self, other: &Segment2, eps: f64) -> Option<Point2> {
        segment_segment_intersect_2d(&self.start, &self.end, &other.start, &other.end, eps)
            .map(|(pt, _, _)| pt)
    }
}
