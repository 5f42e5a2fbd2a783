//! # Shapekit Core
//!
//! Core types shared across the Shapekit workspace.
//! Provides the planar point type, the unified error types, and the
//! per-frame callback registry that drives a viewer's animation loop.

pub mod error;
pub mod point;
pub mod tick;

pub use error::{ConfigError, Error, GeometryError, MalformedPathError, Result};
pub use point::Point;
pub use tick::{FrameLoop, FramePacer, FrameTime, Tick, TickCallback, TickId, DEFAULT_GROUP};
