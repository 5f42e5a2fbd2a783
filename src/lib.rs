//! # Shapekit
//!
//! Geometry helpers for building 3D scenes from vector and geographic data:
//! - SVG path data interpreted into drawing operations
//! - Polygon containment and interior grid sampling
//! - Mercator and spherical projection of longitude/latitude
//! - Catmull-Rom arches between two points
//! - Viewer options and a frame-paced tick loop
//!
//! ## Architecture
//!
//! Shapekit is organized as a workspace with multiple crates:
//!
//! 1. **shapekit-core** - Point type, errors, tick registry and frame pacer
//! 2. **shapekit-path** - SVG path data interpreter and lyon conversion
//! 3. **shapekit-geometry** - Polygons, projections, curves, bounds
//! 4. **shapekit-settings** - Viewer options, deep merge, persistence
//! 5. **shapekit** - This crate and the command line tool

pub use shapekit_geometry as geometry;
pub use shapekit_path as path;
pub use shapekit_settings as settings;

pub use shapekit_core::{
    ConfigError, Error, FrameLoop, FramePacer, FrameTime, GeometryError, MalformedPathError,
    Point, Result, Tick, TickId,
};
pub use shapekit_geometry::{GridOptions, Polygon};
pub use shapekit_path::{interpret, DrawOp, ShapeOutline};
pub use shapekit_settings::ViewerOptions;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Sample a grid inside the first subpath of `path_data`.
///
/// The subpath is flattened within `tolerance` and treated as a closed
/// polygon. Path data without any subpath yields an empty grid.
pub fn grid_in_path(
    path_data: &str,
    tolerance: f64,
    options: &GridOptions,
) -> Result<Vec<Point>> {
    let outline = interpret(path_data)?;
    let Some(boundary) = outline.flatten(tolerance).into_iter().next() else {
        tracing::debug!("Path data has no subpaths, grid is empty");
        return Ok(Vec::new());
    };

    Ok(Polygon::new(boundary).grid(options)?)
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting on stderr
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    // stdout carries command output
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
