//! # Shapekit Geometry
//!
//! Scene-building helpers that sit next to the path interpreter:
//!
//! - [`polygon`]: even-odd containment and interior grid sampling
//! - [`geo`]: Mercator and spherical projection of longitude/latitude
//! - [`curve`]: Catmull-Rom splines and arched connector curves
//! - [`bounds`]: 2D/3D bounding boxes and flat coordinate buffers
//!
//! Planar values use [`shapekit_core::Point`]; spatial values use
//! `nalgebra` points and vectors.

pub mod bounds;
pub mod curve;
pub mod geo;
pub mod polygon;

pub use bounds::{polyline_from_flat, Bounds2, Bounds3};
pub use curve::{arched_curve, ArchOptions, CatmullRom, CurveType};
pub use geo::{lon_lat_to_xyz, mercator, MERCATOR_HALF_EXTENT, MERCATOR_MAX_LATITUDE};
pub use polygon::{is_point_in_polygon, GridOptions, Polygon};
pub use shapekit_core::GeometryError;

pub use nalgebra::{Point3, Vector3};
