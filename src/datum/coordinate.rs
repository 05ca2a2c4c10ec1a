use serde::{Deserialize, Serialize};

/// Represents a geographic point in decimal degrees, in any supported datum
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lng: f64,
    pub lat: f64,
}

impl Coordinate {
    /// Creates a new coordinate from longitude/latitude in degrees
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Returns the coordinate as a `(lng, lat)` pair
    pub fn into_pair(self) -> (f64, f64) {
        (self.lng, self.lat)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lng, lat): (f64, f64)) -> Self {
        Self { lng, lat }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_new() {
        let coord = Coordinate::new(116.404, 39.915);
        assert_eq!(coord.lng, 116.404);
        assert_eq!(coord.lat, 39.915);
    }

    #[test]
    fn test_coordinate_from_pair() {
        let coord = Coordinate::from((121.4737, 31.2304));
        assert_eq!(coord.into_pair(), (121.4737, 31.2304));
    }

    #[test]
    fn test_coordinate_serde_roundtrip() {
        let coord = Coordinate::new(116.404, 39.915);
        let json = serde_json::to_string(&coord).unwrap();
        assert!(json.contains("\"lng\""));
        assert!(json.contains("\"lat\""));

        let back: Coordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, coord);
    }
}
