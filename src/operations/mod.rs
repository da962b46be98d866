pub mod distribute;

pub use distribute::{Anchor, Direction, SegmentsCrossing};
