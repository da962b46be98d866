pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod units;

pub use error::{ArchgeoError, Result};
