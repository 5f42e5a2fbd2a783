//! Longitude/latitude projections.
//!
//! Angles are in degrees. Planar projections return [`Point`]s in meters;
//! the spherical projection returns a y-up `Vector3` for 3D scenes.

use nalgebra::Vector3;
use shapekit_core::Point;
use std::f64::consts::PI;

/// Half the equatorial circumference of the WGS84 sphere, in meters
pub const MERCATOR_HALF_EXTENT: f64 = 20037508.34;

/// Latitude beyond which the Mercator y coordinate diverges
pub const MERCATOR_MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Web Mercator projection of a `(lon, lat)` pair.
///
/// Latitudes at the poles project to infinite y; clamp with
/// [`MERCATOR_MAX_LATITUDE`] first if that matters.
pub fn mercator(lon: f64, lat: f64) -> Point {
    let x = lon * MERCATOR_HALF_EXTENT / 180.0;
    let y = ((90.0 + lat) * PI / 360.0).tan().ln() / (PI / 180.0);
    Point::new(x, y * MERCATOR_HALF_EXTENT / 180.0)
}

/// Place a `(lon, lat)` pair on a sphere of `radius` centered at the
/// origin.
///
/// The frame is y-up with longitude 0 on +x. Longitude is negated so that
/// east lies towards -z, matching a right-handed scene viewed from +z.
pub fn lon_lat_to_xyz(radius: f64, lon: f64, lat: f64) -> Vector3<f64> {
    let lon = -lon.to_radians();
    let lat = lat.to_radians();
    Vector3::new(
        radius * lat.cos() * lon.cos(),
        radius * lat.sin(),
        radius * lat.cos() * lon.sin(),
    )
}
