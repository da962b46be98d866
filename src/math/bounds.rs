use super::{PathPoint, Point2};
use crate::error::{OperationError, Result};

/// Axis-aligned bounds of a path: the per-axis minimum and maximum corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<P> {
    /// Minimum corner.
    pub min: P,
    /// Maximum corner.
    pub max: P,
}

impl<P: PathPoint> Bounds<P> {
    /// Returns the centre of the bounds.
    #[must_use]
    pub fn center(&self) -> P {
        super::midpoint(&self.min, &self.max)
    }

    /// Returns the extent (`max - min`) along `axis`.
    #[must_use]
    pub fn extent(&self, axis: usize) -> f64 {
        self.max.coord(axis) - self.min.coord(axis)
    }
}

/// Extents of a path's bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingSize {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl BoundingSize {
    /// Returns `[width, height, depth]`.
    #[must_use]
    pub fn to_array(self) -> [f64; 3] {
        [self.width, self.height, self.depth]
    }
}

/// Computes the min/max corners of a path.
///
/// # Errors
///
/// Returns `OperationError::InvalidInput` if the path is empty.
pub fn bounds<P: PathPoint>(path: &[P]) -> Result<Bounds<P>> {
    let Some((first, rest)) = path.split_first() else {
        return Err(OperationError::InvalidInput("bounds of an empty path".to_owned()).into());
    };
    let mut min = *first;
    let mut max = *first;
    for p in rest {
        let (lo, hi) = (min, max);
        min = P::from_fn(|axis| lo.coord(axis).min(p.coord(axis)));
        max = P::from_fn(|axis| hi.coord(axis).max(p.coord(axis)));
    }
    Ok(Bounds { min, max })
}

/// Computes `[width, height, depth]` of a path's bounding box.
///
/// For planar paths the depth is `0`, or `z_override` when given (a 2D
/// profile about to be extruded reports its extrusion length). The override
/// does not apply to 3D paths, whose depth is always measured.
///
/// # Errors
///
/// Returns `OperationError::InvalidInput` if the path is empty.
pub fn bounding_size<P: PathPoint>(path: &[P], z_override: Option<f64>) -> Result<BoundingSize> {
    let b = bounds(path)?;
    let depth = if P::DIM >= 3 {
        b.extent(2)
    } else {
        z_override.unwrap_or(0.0)
    };
    Ok(BoundingSize {
        width: b.extent(0),
        height: b.extent(1),
        depth,
    })
}

/// Translates a path so that its bounding-box centre lies at the origin.
///
/// # Errors
///
/// Returns `OperationError::InvalidInput` if the path is empty.
pub fn center_path<P: PathPoint>(path: &[P]) -> Result<Vec<P>> {
    let c = bounds(path)?.center();
    Ok(path
        .iter()
        .map(|p| P::from_fn(|axis| p.coord(axis) - c.coord(axis)))
        .collect())
}

/// Returns the 4 corners of the XY bounding rectangle of a point set,
/// clockwise from bottom-left: `[min.x, min.y]`, `[min.x, max.y]`,
/// `[max.x, max.y]`, `[max.x, min.y]`.
///
/// # Errors
///
/// Returns `OperationError::InvalidInput` if `points` is empty.
pub fn bounding_rect<P: PathPoint>(points: &[P]) -> Result<[Point2; 4]> {
    let b = bounds(points)?;
    let (x0, y0) = (b.min.coord(0), b.min.coord(1));
    let (x1, y1) = (b.max.coord(0), b.max.coord(1));
    Ok([
        Point2::new(x0, y0),
        Point2::new(x0, y1),
        Point2::new(x1, y1),
        Point2::new(x1, y0),
    ])
}
