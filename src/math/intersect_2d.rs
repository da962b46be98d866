use super::{Point2, Vector2};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` unless the
/// cross product of the directions is below `eps` (parallel or degenerate).
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
    eps: f64,
) -> Option<(f64, f64)> {
    let cross = d1.x * d2.y - d1.y * d2.x;
    if cross.abs() < eps {
        return None;
    }
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / cross;
    let u = (dx * d1.y - dy * d1.x) / cross;
    Some((t, u))
}

/// Bounded segment-segment intersection in 2D.
///
/// Returns `(intersection_point, t, u)` where `t` and `u` are in `[0, 1]`.
/// A hit up to `eps` (a distance) past either segment's end is accepted and
/// its parameters clamped, so hits at shared endpoints are not lost to
/// rounding. The slack is scaled by each segment's length.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
    eps: f64,
) -> Option<(Point2, f64, f64)> {
    let da = *a1 - *a0;
    let db = *b1 - *b0;

    let (t, u) = line_line_intersect_2d(a0, &da, b0, &db, eps)?;

    let in_range = |v: f64, len: f64| {
        let slack = eps / len;
        v >= -slack && v <= 1.0 + slack
    };
    if in_range(t, da.norm()) && in_range(u, db.norm()) {
        let t_clamped = t.clamp(0.0, 1.0);
        let pt = *a0 + da * t_clamped;
        Some((pt, t_clamped, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}
