pub mod arc;
pub mod bounds;
pub mod intersect_2d;
pub mod path;
pub mod point;
pub mod polygon_2d;

pub use point::{
    is_line, is_point, line_length, midpoint, require_finite_point, AnyPoint, PathPoint,
};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for coincidence checks (degenerate segments,
/// zero extents).
pub const TOLERANCE: f64 = 1e-10;

/// Default epsilon for intersection tests and duplicate-hit removal.
pub const INTERSECT_EPS: f64 = 1e-6;
