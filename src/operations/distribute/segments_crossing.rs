use tracing::{debug, instrument, trace};

use super::{Anchor, Direction};
use crate::error::{OperationError, Result};
use crate::geometry::curve::{sample_count, MAX_SAMPLES};
use crate::geometry::{Polygon, Segment2};
use crate::math::bounds::bounds;
use crate::math::{Point2, INTERSECT_EPS};

/// Lays out parallel lines at a fixed spacing, each clipped to a polygon mask.
///
/// Used for repeating members that must fit an irregular plan: deck boards,
/// slats, grille bars.
///
/// # Algorithm
///
/// 1. Centre the mask on its bounding box.
/// 2. Place line offsets across the perpendicular extent: symmetric around the
///    centre for [`Anchor::Center`], or stepping inward from the anchored edge.
/// 3. For each offset build a candidate spanning the full mask extent (plus
///    one spacing of overshoot) and intersect it with the mask.
/// 4. Keep the candidate only if it yields exactly two distinct points.
///    Tangent touches and multi-crossings of concave masks are dropped.
///
/// Results are in the centred mask frame; see [`Self::execute_in_place`] for
/// the mask's own frame.
#[derive(Debug)]
pub struct SegmentsCrossing {
    mask: Vec<Point2>,
    spacing: f64,
    direction: Direction,
    anchor: Anchor,
    eps: f64,
}

impl SegmentsCrossing {
    /// Creates a new distribution operation.
    #[must_use]
    pub fn new(mask: Vec<Point2>, spacing: f64, direction: Direction, anchor: Anchor) -> Self {
        Self {
            mask,
            spacing,
            direction,
            anchor,
            eps: INTERSECT_EPS,
        }
    }

    /// Overrides the intersection epsilon (default [`INTERSECT_EPS`]).
    #[must_use]
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Executes the distribution in the centred mask frame.
    ///
    /// Segments are returned in increasing offset order, each oriented along
    /// the positive X (horizontal) or Y (vertical) axis. A spacing larger than
    /// the mask is a valid layout and may produce a single line or none.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if the spacing is not a positive finite
    ///   number, or the anchor does not belong to the direction
    /// - `GeometryError::TooFewVertices` if the mask has fewer than 3 vertices
    #[instrument(level = "debug", skip_all)]
    pub fn execute(&self) -> Result<Vec<Segment2>> {
        self.validate()?;
        let mask = Polygon::new(self.mask.clone())?.centered()?;
        let size = mask.bounding_size()?;

        let (along, across) = match self.direction {
            Direction::Horizontal => (size.width, size.height),
            Direction::Vertical => (size.height, size.width),
        };
        let reach = along * 0.5 + self.spacing;
        let offsets = self.offsets(across * 0.5)?;
        debug!(
            spacing = self.spacing,
            direction = ?self.direction,
            anchor = ?self.anchor,
            candidates = offsets.len(),
            "distributing segments"
        );

        let mut segments = Vec::with_capacity(offsets.len());
        for offset in offsets {
            let candidate = self.candidate(offset, reach)?;
            let hits = mask.intersections(&candidate, self.eps);
            let [a, b] = hits[..] else {
                trace!(offset, hits = hits.len(), "candidate dropped");
                continue;
            };
            let segment = Segment2::new(a, b)?;
            segments.push(if self.along_axis(&a) > self.along_axis(&b) {
                segment.reversed()
            } else {
                segment
            });
        }
        debug!(segments = segments.len(), "distribution complete");
        Ok(segments)
    }

    /// Executes the distribution and moves the result back into the mask's
    /// original coordinates.
    ///
    /// # Errors
    ///
    /// Same as [`Self::execute`].
    pub fn execute_in_place(&self) -> Result<Vec<Segment2>> {
        let segments = self.execute()?;
        let shift = bounds(&self.mask)?.center();
        segments.iter().map(|s| s.translated(&shift)).collect()
    }

    fn validate(&self) -> Result<()> {
        if !(self.spacing > 0.0 && self.spacing.is_finite()) {
            return Err(OperationError::InvalidInput(format!(
                "spacing must be positive, got {}",
                self.spacing
            ))
            .into());
        }
        if !self.anchor.accepts(self.direction) {
            return Err(OperationError::InvalidInput(format!(
                "anchor {:?} is not valid for {:?} lines",
                self.anchor, self.direction
            ))
            .into());
        }
        Ok(())
    }

    /// Line offsets across the mask, ascending.
    #[allow(clippy::cast_precision_loss)]
    fn offsets(&self, half: f64) -> Result<Vec<f64>> {
        let s = self.spacing;
        let offsets = match self.anchor {
            Anchor::Center => {
                let n = sample_count(half, s)? - 1;
                let last = n
                    .checked_mul(2)
                    .filter(|&last| last < MAX_SAMPLES)
                    .ok_or_else(|| {
                        OperationError::InvalidInput(format!(
                            "spacing {s} yields too many lines"
                        ))
                    })?;
                (0..=last).map(|k| (k as f64 - n as f64) * s).collect()
            }
            Anchor::Fwd | Anchor::Left => (0..sample_count(2.0 * half, s)?)
                .map(|k| -half + k as f64 * s)
                .collect(),
            Anchor::Back | Anchor::Right => (0..sample_count(2.0 * half, s)?)
                .rev()
                .map(|k| half - k as f64 * s)
                .collect(),
        };
        Ok(offsets)
    }

    fn candidate(&self, offset: f64, reach: f64) -> Result<Segment2> {
        match self.direction {
            Direction::Horizontal => {
                Segment2::new(Point2::new(-reach, offset), Point2::new(reach, offset))
            }
            Direction::Vertical => {
                Segment2::new(Point2::new(offset, -reach), Point2::new(offset, reach))
            }
        }
    }

    fn along_axis(&self, p: &Point2) -> f64 {
        match self.direction {
            Direction::Horizontal => p.x,
            Direction::Vertical => p.y,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ArchgeoError;
    use std::f64::consts::TAU;

    #[allow(clippy::cast_precision_loss)]
    fn circle(radius: f64, segments: usize) -> Vec<Point2> {
        (0..segments)
            .map(|i| {
                let a = TAU * i as f64 / segments as f64;
                Point2::new(radius * a.cos(), radius * a.sin())
            })
            .collect()
    }

    fn rect(w: f64, h: f64) -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(w, 0.0),
            Point2::new(w, h),
            Point2::new(0.0, h),
        ]
    }

    fn offsets_y(segments: &[Segment2]) -> Vec<f64> {
        segments.iter().map(|s| s.start().y).collect()
    }

    fn assert_offsets(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "actual={actual:?}");
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-9, "actual={actual:?} expected={expected:?}");
        }
    }

    #[test]
    fn circle_mask_centered_horizontal() {
        let op = SegmentsCrossing::new(circle(5.0, 64), 2.0, Direction::Horizontal, Anchor::Center);
        let segments = op.execute().unwrap();
        assert_eq!(segments.len(), 5);
        assert_offsets(&offsets_y(&segments), &[-4.0, -2.0, 0.0, 2.0, 4.0]);
        for s in &segments {
            assert!(s.length() > 0.0);
            for p in s.points() {
                assert!(p.x.abs() <= 5.0 + 1e-9 && p.y.abs() <= 5.0 + 1e-9, "p={p:?}");
            }
            assert!(s.start().x < s.end().x);
        }
    }

    #[test]
    fn rectangle_mask_vertical_lines_span_full_height() {
        let op = SegmentsCrossing::new(rect(95.0, 40.0), 10.0, Direction::Vertical, Anchor::Center);
        let segments = op.execute().unwrap();
        assert_eq!(segments.len(), 9);
        for s in &segments {
            assert!((s.length() - 40.0).abs() < 1e-9);
            assert!(s.start().y < s.end().y);
        }
        let xs: Vec<f64> = segments.iter().map(|s| s.start().x).collect();
        assert_offsets(&xs, &[-40.0, -30.0, -20.0, -10.0, 0.0, 10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn fwd_anchor_starts_at_front_edge() {
        let op = SegmentsCrossing::new(circle(5.0, 64), 3.0, Direction::Horizontal, Anchor::Fwd);
        let segments = op.execute().unwrap();
        // The tangent line at y = -5 is dropped.
        assert_offsets(&offsets_y(&segments), &[-2.0, 1.0, 4.0]);
    }

    #[test]
    fn back_anchor_starts_at_back_edge() {
        let op = SegmentsCrossing::new(circle(5.0, 64), 3.0, Direction::Horizontal, Anchor::Back);
        let segments = op.execute().unwrap();
        assert_offsets(&offsets_y(&segments), &[-4.0, -1.0, 2.0]);
    }

    #[test]
    fn left_and_right_anchors() {
        let left = SegmentsCrossing::new(circle(5.0, 64), 3.0, Direction::Vertical, Anchor::Left)
            .execute()
            .unwrap();
        let right = SegmentsCrossing::new(circle(5.0, 64), 3.0, Direction::Vertical, Anchor::Right)
            .execute()
            .unwrap();
        let xs = |v: &[Segment2]| v.iter().map(|s| s.start().x).collect::<Vec<_>>();
        assert_offsets(&xs(&left), &[-2.0, 1.0, 4.0]);
        assert_offsets(&xs(&right), &[-4.0, -1.0, 2.0]);
    }

    #[test]
    fn concave_multi_crossings_are_dropped() {
        // U shape: the notch splits the upper half into two legs.
        let mask = vec![
            Point2::new(0.0, 0.0),
            Point2::new(30.0, 0.0),
            Point2::new(30.0, 20.0),
            Point2::new(20.0, 20.0),
            Point2::new(20.0, 10.0),
            Point2::new(10.0, 10.0),
            Point2::new(10.0, 20.0),
            Point2::new(0.0, 20.0),
        ];
        let op = SegmentsCrossing::new(mask, 5.0, Direction::Horizontal, Anchor::Center);
        let segments = op.execute_in_place().unwrap();
        assert_offsets(&offsets_y(&segments), &[0.0, 5.0]);
        for s in &segments {
            assert!((s.start().x).abs() < 1e-9);
            assert!((s.end().x - 30.0).abs() < 1e-9);
        }
    }

    #[test]
    fn in_place_restores_mask_frame() {
        let op = SegmentsCrossing::new(rect(95.0, 40.0), 10.0, Direction::Vertical, Anchor::Center);
        let segments = op.execute_in_place().unwrap();
        let first = &segments[0];
        assert!((first.start().x - 7.5).abs() < 1e-9);
        assert!(first.start().y.abs() < 1e-9);
        assert!((first.end().y - 40.0).abs() < 1e-9);
    }

    #[test]
    fn spacing_larger_than_mask_is_not_an_error() {
        let centered = SegmentsCrossing::new(circle(5.0, 64), 20.0, Direction::Horizontal, Anchor::Center)
            .execute()
            .unwrap();
        assert_eq!(centered.len(), 1);
        let fwd = SegmentsCrossing::new(circle(5.0, 64), 20.0, Direction::Horizontal, Anchor::Fwd)
            .execute()
            .unwrap();
        assert!(fwd.is_empty());
    }

    #[test]
    fn invalid_spacing_fails() {
        for spacing in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let op = SegmentsCrossing::new(rect(10.0, 10.0), spacing, Direction::Horizontal, Anchor::Center);
            assert!(op.execute().is_err(), "spacing={spacing}");
        }
    }

    #[test]
    fn mismatched_anchor_fails() {
        let op = SegmentsCrossing::new(rect(10.0, 10.0), 1.0, Direction::Horizontal, Anchor::Left);
        assert!(op.execute().is_err());
        let op = SegmentsCrossing::new(rect(10.0, 10.0), 1.0, Direction::Vertical, Anchor::Back);
        assert!(op.execute().is_err());
    }

    #[test]
    fn vanishing_spacing_fails_instead_of_overflowing() {
        for anchor in [Anchor::Center, Anchor::Fwd, Anchor::Back] {
            let op = SegmentsCrossing::new(rect(10.0, 10.0), 1e-300, Direction::Horizontal, anchor);
            assert!(
                matches!(op.execute(), Err(ArchgeoError::Operation(OperationError::InvalidInput(_)))),
                "anchor={anchor:?}"
            );
        }
    }

    #[test]
    fn degenerate_mask_fails() {
        let mask = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        let op = SegmentsCrossing::new(mask, 1.0, Direction::Horizontal, Anchor::Center);
        assert!(op.execute().is_err());
    }
}
