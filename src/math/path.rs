use super::{line_length, PathPoint, Point2};

/// Total length of an open polyline (sum of consecutive segment lengths).
#[must_use]
pub fn path_length<P: PathPoint>(path: &[P]) -> f64 {
    path.windows(2).map(|w| line_length(&w[0], &w[1])).sum()
}

/// Removes points lying within `eps` of an earlier kept point.
///
/// Keeps first occurrences in input order. Pairwise O(n²), intended for the
/// small hit lists produced by intersection queries.
#[must_use]
pub fn dedup_points<P: PathPoint>(points: &[P], eps: f64) -> Vec<P> {
    let mut kept: Vec<P> = Vec::with_capacity(points.len());
    for p in points {
        if kept.iter().all(|k| line_length(k, p) > eps) {
            kept.push(*p);
        }
    }
    kept
}

/// Translates every point of a path by `offset` (one value per axis).
#[must_use]
pub fn translate_path<P: PathPoint>(path: &[P], offset: &P) -> Vec<P> {
    path.iter()
        .map(|p| P::from_fn(|axis| p.coord(axis) + offset.coord(axis)))
        .collect()
}

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}
