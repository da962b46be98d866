pub mod curve;
pub mod polygon;
pub mod segment;

pub use curve::{
    clothoid, Ballistic, DropletWave, FibonacciSpiral, GeneralizedClothoid, SampledCurve,
    SawtoothWave, SineWave,
};
pub use polygon::Polygon;
pub use segment::{Segment, Segment2, Segment3};
