//! Shapekit Settings Crate
//!
//! Viewer options: defaults, deep merging of partial overrides, validation,
//! and JSON/TOML persistence.

pub mod config;
pub mod merge;

pub use config::{CameraOptions, RendererBackend, RendererOptions, ViewerOptions};
pub use merge::assign;
