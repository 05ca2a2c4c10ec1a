//! coordkit - Chinese geodetic datum conversions for Rust
//!
//! coordkit converts geographic coordinates among WGS84 (the global GPS
//! datum), GCJ02 (China's obfuscated "Mars" datum), and BD09 (Baidu Maps'
//! further-obfuscated variant of GCJ02). Every conversion is a pure,
//! closed-form computation: no external projection library, no I/O, no
//! shared state, safe to call from any number of threads.
//!
//! # Examples
//!
//! ## Direct function calls
//!
//! ```
//! use coordkit::{wgs84_to_gcj02, gcj02_to_bd09};
//!
//! let (gcj_lng, gcj_lat) = wgs84_to_gcj02(116.404, 39.915);
//! let (bd_lng, bd_lat) = gcj02_to_bd09(gcj_lng, gcj_lat);
//! println!("BD09: ({}, {})", bd_lng, bd_lat);
//! ```
//!
//! ## Datum-driven dispatch
//!
//! ```
//! use coordkit::{Coordinate, Datum, DatumTransform};
//!
//! let transform = DatumTransform::new(Datum::Wgs84, Datum::Bd09);
//! let bd = transform.transform(Coordinate::new(121.4737, 31.2304));
//! println!("BD09: ({}, {})", bd.lng, bd.lat);
//! ```
//!
//! Points outside mainland China's bounding box pass through the WGS84/GCJ02
//! conversions unchanged; the datums coincide there by convention.

pub mod datum;
pub mod error;

pub use datum::{
    bd09_to_gcj02, bd09_to_wgs84, gcj02_to_bd09, gcj02_to_wgs84, out_of_china, wgs84_to_bd09,
    wgs84_to_gcj02, Coordinate, Datum, DatumTransform,
};
pub use error::{Error, Result};
