use crate::datum::china;
use crate::datum::coordinate::Coordinate;
use crate::error::{Error, Result};
use rayon::prelude::*;
use std::fmt;
use std::str::FromStr;

/// Represents the supported geodetic datums
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Datum {
    /// World Geodetic System 1984, the global GPS datum
    Wgs84,
    /// China's obfuscated variant of WGS84 ("Mars coordinates")
    Gcj02,
    /// Baidu's further-obfuscated variant of GCJ02
    Bd09,
}

impl Datum {
    /// Returns the conventional name of this datum
    pub fn name(&self) -> &'static str {
        match self {
            Datum::Wgs84 => "WGS84",
            Datum::Gcj02 => "GCJ02",
            Datum::Bd09 => "BD09",
        }
    }
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Datum {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "wgs84" => Ok(Datum::Wgs84),
            "gcj02" => Ok(Datum::Gcj02),
            "bd09" | "bd09ll" => Ok(Datum::Bd09),
            _ => Err(Error::UnknownDatum(s.to_string())),
        }
    }
}

/// Transforms coordinates between the supported geodetic datums
pub struct DatumTransform {
    from_datum: Datum,
    to_datum: Datum,
}

impl DatumTransform {
    /// Creates a new datum transformation between two datums
    pub fn new(from_datum: Datum, to_datum: Datum) -> Self {
        Self {
            from_datum,
            to_datum,
        }
    }

    /// Transforms a coordinate between datums.
    ///
    /// The conversions are closed-form and total, so unlike PROJ-backed
    /// transforms this cannot fail. Conversions between datums are
    /// approximations of the same physical location; round trips through
    /// GCJ02 carry a small residual error.
    pub fn transform(&self, coord: Coordinate) -> Coordinate {
        let (lng, lat) = match (self.from_datum, self.to_datum) {
            (Datum::Wgs84, Datum::Gcj02) => china::wgs84_to_gcj02(coord.lng, coord.lat),
            (Datum::Wgs84, Datum::Bd09) => china::wgs84_to_bd09(coord.lng, coord.lat),
            (Datum::Gcj02, Datum::Wgs84) => china::gcj02_to_wgs84(coord.lng, coord.lat),
            (Datum::Gcj02, Datum::Bd09) => china::gcj02_to_bd09(coord.lng, coord.lat),
            (Datum::Bd09, Datum::Wgs84) => china::bd09_to_wgs84(coord.lng, coord.lat),
            (Datum::Bd09, Datum::Gcj02) => china::bd09_to_gcj02(coord.lng, coord.lat),
            _ => (coord.lng, coord.lat),
        };
        Coordinate::new(lng, lat)
    }

    /// Transforms multiple coordinates in bulk, in parallel
    pub fn transform_many(&self, coords: &[Coordinate]) -> Vec<Coordinate> {
        coords
            .par_iter()
            .map(|&coord| self.transform(coord))
            .collect()
    }

    /// Returns the inverse transformation
    pub fn inverse(&self) -> DatumTransform {
        DatumTransform::new(self.to_datum, self.from_datum)
    }

    /// Returns the source datum
    pub fn from_datum(&self) -> Datum {
        self.from_datum
    }

    /// Returns the target datum
    pub fn to_datum(&self) -> Datum {
        self.to_datum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datum_name() {
        assert_eq!(Datum::Wgs84.name(), "WGS84");
        assert_eq!(Datum::Gcj02.name(), "GCJ02");
        assert_eq!(Datum::Bd09.name(), "BD09");
    }

    #[test]
    fn test_datum_from_str() {
        assert_eq!("WGS84".parse::<Datum>().unwrap(), Datum::Wgs84);
        assert_eq!("gcj02".parse::<Datum>().unwrap(), Datum::Gcj02);
        assert_eq!("bd09ll".parse::<Datum>().unwrap(), Datum::Bd09);

        let err = "epsg:4326".parse::<Datum>().unwrap_err();
        assert!(err.to_string().contains("epsg:4326"));
    }

    #[test]
    fn test_transform_creation() {
        let transform = DatumTransform::new(Datum::Wgs84, Datum::Gcj02);
        assert_eq!(transform.from_datum(), Datum::Wgs84);
        assert_eq!(transform.to_datum(), Datum::Gcj02);
    }

    #[test]
    fn test_transform_identity() {
        let transform = DatumTransform::new(Datum::Bd09, Datum::Bd09);
        let coord = Coordinate::new(116.404, 39.915);
        assert_eq!(transform.transform(coord), coord);
    }

    #[test]
    fn test_transform_matches_direct_call() {
        let transform = DatumTransform::new(Datum::Gcj02, Datum::Bd09);
        let result = transform.transform(Coordinate::new(116.404, 39.915));
        let (lng, lat) = china::gcj02_to_bd09(116.404, 39.915);
        assert_eq!(result, Coordinate::new(lng, lat));
    }

    #[test]
    fn test_transform_many_matches_single() {
        let transform = DatumTransform::new(Datum::Wgs84, Datum::Bd09);
        let coords = vec![
            Coordinate::new(116.404, 39.915),
            Coordinate::new(121.4737, 31.2304),
            Coordinate::new(0.0, 0.0),
        ];

        let results = transform.transform_many(&coords);
        assert_eq!(results.len(), coords.len());
        for (coord, result) in coords.iter().zip(&results) {
            assert_eq!(*result, transform.transform(*coord));
        }
    }

    #[test]
    fn test_inverse_roundtrip() {
        let transform = DatumTransform::new(Datum::Gcj02, Datum::Bd09);
        let coord = Coordinate::new(116.404, 39.915);
        let back = transform.inverse().transform(transform.transform(coord));
        assert!((back.lng - coord.lng).abs() < 1e-6);
        assert!((back.lat - coord.lat).abs() < 1e-6);
    }
}
