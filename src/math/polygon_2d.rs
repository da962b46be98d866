use super::path::dedup_points;
use super::Point2;
use crate::error::{GeometryError, Result};
use crate::geometry::Segment2;

/// Iterates the edges of a closed ring, including the wrap-around edge from
/// the last vertex back to the first.
pub(crate) fn closed_edges(path: &[Point2]) -> impl Iterator<Item = (&Point2, &Point2)> {
    let n = path.len();
    (0..n).map(move |i| (&path[i], &path[(i + 1) % n]))
}

pub(crate) fn collect_hits(line: &Segment2, path: &[Point2], eps: f64) -> Vec<Point2> {
    let hits: Vec<Point2> = closed_edges(path)
        .filter_map(|(a, b)| {
            super::intersect_2d::segment_segment_intersect_2d(line.start(), line.end(), a, b, eps)
                .map(|(pt, _, _)| pt)
        })
        .collect();
    // A crossing through a shared vertex is reported by both adjacent edges.
    dedup_points(&hits, eps)
}

pub(crate) fn any_hit(line: &Segment2, path: &[Point2], eps: f64) -> bool {
    closed_edges(path).any(|(a, b)| {
        super::intersect_2d::segment_segment_intersect_2d(line.start(), line.end(), a, b, eps)
            .is_some()
    })
}

fn require_ring(path: &[Point2]) -> Result<()> {
    if path.len() < 3 {
        return Err(GeometryError::TooFewVertices(path.len()).into());
    }
    Ok(())
}

/// All points where `line` crosses the closed polygon `path`.
///
/// Hits are reported in edge traversal order (not sorted along the line),
/// with points closer than `eps` to an earlier hit removed.
///
/// # Errors
///
/// Returns `GeometryError::TooFewVertices` if `path` has fewer than 3 vertices.
pub fn line_polygon_intersection(line: &Segment2, path: &[Point2], eps: f64) -> Result<Vec<Point2>> {
    require_ring(path)?;
    Ok(collect_hits(line, path, eps))
}

/// Returns `true` as soon as `line` crosses any edge of the closed polygon
/// `path`, without computing the full hit set.
///
/// # Errors
///
/// Returns `GeometryError::TooFewVertices` if `path` has fewer than 3 vertices.
pub fn line_intersects_polygon(line: &Segment2, path: &[Point2], eps: f64) -> Result<bool> {
    require_ring(path)?;
    Ok(any_hit(line, path, eps))
}
