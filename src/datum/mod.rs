//! Geodetic datums and coordinate conversions

pub mod china;
pub mod coordinate;
pub mod transform;

pub use china::{
    bd09_to_gcj02, bd09_to_wgs84, gcj02_to_bd09, gcj02_to_wgs84, out_of_china, wgs84_to_bd09,
    wgs84_to_gcj02,
};
pub use coordinate::Coordinate;
pub use transform::{Datum, DatumTransform};
