//! Closed-form conversions among WGS84, GCJ02, and BD09.
//!
//! GCJ02 applies a location-dependent nonlinear offset to WGS84 inside
//! mainland China; BD09 applies a further polar-coordinate transform on top
//! of GCJ02. All functions here are pure and total over finite doubles: no
//! validation is performed, and implausible inputs produce whatever the
//! formulas produce.

/// Angular unit used by the BD09 correction terms: pi * 3000 / 180.
const X_PI: f64 = 3.14159265358979324 * 3000.0 / 180.0;

const PI: f64 = 3.1415926535897932384626;

/// Krasovsky 1940 ellipsoid semi-major axis, meters.
const A: f64 = 6378245.0;

/// Krasovsky 1940 squared eccentricity: (a^2 - b^2) / a^2 with 1/f = 298.3.
const EE: f64 = 0.00669342162296594323;

/// Returns true unless the point lies strictly inside mainland China's
/// bounding box (lng 73.66..135.05, lat 3.86..53.55). Boundary values count
/// as outside. GCJ02 obfuscation is only defined inside this box.
pub fn out_of_china(lng: f64, lat: f64) -> bool {
    !(lng > 73.66 && lng < 135.05 && lat > 3.86 && lat < 53.55)
}

/// Converts a WGS84 coordinate to GCJ02.
///
/// Points outside China are returned unchanged; there the two datums
/// coincide by convention.
pub fn wgs84_to_gcj02(lng: f64, lat: f64) -> (f64, f64) {
    if out_of_china(lng, lat) {
        return (lng, lat);
    }
    let (dlng, dlat) = offset(lng, lat);
    (lng + dlng, lat + dlat)
}

/// Converts a GCJ02 coordinate back to WGS84.
///
/// The forward transform has no closed-form inverse. This applies the
/// forward offset to the GCJ02 input and reflects the result through the
/// input point, which is the conventional approximation; the residual error
/// is on the order of 1e-5 degrees.
pub fn gcj02_to_wgs84(lng: f64, lat: f64) -> (f64, f64) {
    if out_of_china(lng, lat) {
        return (lng, lat);
    }
    let (dlng, dlat) = offset(lng, lat);
    let mglng = lng + dlng;
    let mglat = lat + dlat;
    (lng * 2.0 - mglng, lat * 2.0 - mglat)
}

/// Converts a GCJ02 coordinate to BD09.
pub fn gcj02_to_bd09(lng: f64, lat: f64) -> (f64, f64) {
    let z = (lng * lng + lat * lat).sqrt() + 0.00002 * (lat * X_PI).sin();
    let theta = lat.atan2(lng) + 0.000003 * (lng * X_PI).cos();
    let bd_lng = z * theta.cos() + 0.0065;
    let bd_lat = z * theta.sin() + 0.006;
    (bd_lng, bd_lat)
}

/// Converts a BD09 coordinate to GCJ02.
pub fn bd09_to_gcj02(lng: f64, lat: f64) -> (f64, f64) {
    let x = lng - 0.0065;
    let y = lat - 0.006;
    let z = (x * x + y * y).sqrt() - 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) - 0.000003 * (x * X_PI).cos();
    let gcj_lng = z * theta.cos();
    let gcj_lat = z * theta.sin();
    (gcj_lng, gcj_lat)
}

/// Converts a WGS84 coordinate to BD09 via GCJ02.
pub fn wgs84_to_bd09(lng: f64, lat: f64) -> (f64, f64) {
    let (gcj_lng, gcj_lat) = wgs84_to_gcj02(lng, lat);
    gcj02_to_bd09(gcj_lng, gcj_lat)
}

/// Converts a BD09 coordinate to WGS84 via GCJ02.
pub fn bd09_to_wgs84(lng: f64, lat: f64) -> (f64, f64) {
    let (gcj_lng, gcj_lat) = bd09_to_gcj02(lng, lat);
    gcj02_to_wgs84(gcj_lng, gcj_lat)
}

/// Computes the GCJ02 offset in degrees at a WGS84 point inside China.
///
/// The empirical series is expanded around 105E/35N; the raw offsets are
/// scaled from ellipsoid-surface meters to degrees using the local radius of
/// curvature of the Krasovsky 1940 ellipsoid at the given latitude.
fn offset(lng: f64, lat: f64) -> (f64, f64) {
    let dlat = transform_lat(lng - 105.0, lat - 35.0);
    let dlng = transform_lng(lng - 105.0, lat - 35.0);
    let radlat = lat / 180.0 * PI;
    let magic = radlat.sin();
    let magic = 1.0 - EE * magic * magic;
    let sqrtmagic = magic.sqrt();
    let dlat = (dlat * 180.0) / ((A * (1.0 - EE)) / (magic * sqrtmagic) * PI);
    let dlng = (dlng * 180.0) / (A / sqrtmagic * radlat.cos() * PI);
    (dlng, dlat)
}

fn transform_lng(x: f64, y: f64) -> f64 {
    let mut ret =
        300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}

fn transform_lat(x: f64, y: f64) -> f64 {
    let mut ret =
        -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}
