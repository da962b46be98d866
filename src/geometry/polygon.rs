use super::Segment2;
use crate::error::{GeometryError, Result};
use crate::math::bounds::{bounding_size, bounds, center_path, BoundingSize, Bounds};
use crate::math::path::signed_area_2d;
use crate::math::polygon_2d::{any_hit, closed_edges, collect_hits};
use crate::math::{require_finite_point, Point2};

/// A closed planar polygon with at least 3 vertices.
///
/// The closing edge from the last vertex back to the first is implicit.
/// No convexity or simplicity is assumed.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2>,
}

impl Polygon {
    /// Creates a polygon from its vertex ring.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewVertices` for fewer than 3 vertices and
    /// `GeometryError::InvalidPoint` for a non-finite vertex.
    pub fn new(vertices: Vec<Point2>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices(vertices.len()).into());
        }
        vertices.iter().try_for_each(require_finite_point)?;
        Ok(Self { vertices })
    }

    /// Returns the vertex ring.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Iterates the edges, closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = (&Point2, &Point2)> {
        closed_edges(&self.vertices)
    }

    /// Unsigned enclosed area (shoelace).
    #[must_use]
    pub fn area(&self) -> f64 {
        signed_area_2d(&self.vertices).abs()
    }

    /// Min/max corners.
    ///
    /// # Errors
    ///
    /// Never fails for a constructed polygon; the signature follows [`bounds`].
    pub fn bounds(&self) -> Result<Bounds<Point2>> {
        bounds(&self.vertices)
    }

    /// `[width, height, 0]` of the bounding box.
    ///
    /// # Errors
    ///
    /// Never fails for a constructed polygon; the signature follows [`bounding_size`].
    pub fn bounding_size(&self) -> Result<BoundingSize> {
        bounding_size(&self.vertices, None)
    }

    /// Returns a copy translated so its bounding-box centre is the origin.
    ///
    /// # Errors
    ///
    /// Never fails for a constructed polygon; the signature follows [`center_path`].
    pub fn centered(&self) -> Result<Self> {
        Ok(Self {
            vertices: center_path(&self.vertices)?,
        })
    }

    /// Distinct crossing points of `line` with the polygon boundary, in edge order.
    #[must_use]
    pub fn intersections(&self, line: &Segment2, eps: f64) -> Vec<Point2> {
        collect_hits(line, &self.vertices, eps)
    }

    /// Returns `true` if `line` crosses the boundary anywhere.
    #[must_use]
    pub fn intersects(&self, line: &Segment2, eps: f64) -> bool {
        any_hit(line, &self.vertices, eps)
    }
}
