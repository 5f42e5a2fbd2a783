//! # Shapekit Path
//!
//! Interprets SVG path data (the `d` attribute of `<path>`) into an ordered
//! list of drawing operations that any 2D vector renderer or triangulator
//! can consume.
//!
//! ## Supported commands
//!
//! `M m L l H h V v C c S s Q q T t A a Z z`. Uppercase letters take
//! absolute coordinates, lowercase letters are relative to the cursor.
//! Coordinates that follow a command's arguments without a new letter repeat
//! the command (a repeated moveto becomes a lineto).
//!
//! Elliptical arcs are drawn as circles: when the radii differ a warning is
//! logged and `rx` is used for both.
//!
//! ## Usage
//!
//! ```rust
//! use shapekit_path::{interpret, DrawOp};
//!
//! let outline = interpret("M0,0 H10 V10 Z").unwrap();
//! assert_eq!(outline.ops()[1], DrawOp::LineTo { x: 10.0, y: 0.0 });
//!
//! // Hand the outline to lyon for tessellation or flattening.
//! let polylines = outline.flatten(0.1);
//! assert_eq!(polylines.len(), 1);
//! ```

mod arc;
pub mod interpreter;
pub mod outline;
mod scanner;

pub use interpreter::{ArcArgs, PathInterpreter};
pub use outline::{DrawOp, ShapeOutline, MIN_FLATTEN_TOLERANCE};
pub use shapekit_core::MalformedPathError;

/// Interpret path data into a [`ShapeOutline`].
///
/// Shorthand for [`PathInterpreter::interpret`].
pub fn interpret(path: &str) -> Result<ShapeOutline, MalformedPathError> {
    PathInterpreter::interpret(path)
}
