//! Error handling for Shapekit
//!
//! Provides the error types shared by every layer of the workspace:
//! - Path errors (malformed path data)
//! - Geometry errors (invalid buffers, grid parameters)
//! - Config errors (options files and validation)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Path data error type
///
/// Raised by the path interpreter. Interpretation is all-or-nothing, so
/// either variant means no outline was produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedPathError {
    /// A command letter outside `MmLlHhVvCcSsQqTtAaZz` was read
    #[error("Unknown path command '{command}' at offset {offset}")]
    UnknownCommand {
        /// The unrecognized character.
        command: char,
        /// Byte offset of the character in the path data.
        offset: usize,
    },

    /// A command ran out of numeric arguments
    #[error("Expected a number for path command '{command}' at offset {offset}")]
    ExpectedNumber {
        /// The command that was being read.
        command: char,
        /// Byte offset where a number was expected.
        offset: usize,
    },
}

impl MalformedPathError {
    /// Byte offset in the path data where interpretation stopped
    pub fn offset(&self) -> usize {
        match self {
            Self::UnknownCommand { offset, .. } | Self::ExpectedNumber { offset, .. } => *offset,
        }
    }
}

/// Geometry error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A flat coordinate buffer does not split into whole tuples
    #[error("Invalid coordinate buffer: length {len} is not a multiple of {stride}")]
    InvalidBuffer {
        /// The buffer length.
        len: usize,
        /// The tuple width expected.
        stride: usize,
    },

    /// A curve or polygon was built from too few points
    #[error("Too few points: expected at least {expected}, got {actual}")]
    TooFewPoints {
        /// Minimum number of points.
        expected: usize,
        /// Number of points supplied.
        actual: usize,
    },

    /// Grid sampling parameters are unusable
    #[error("Invalid grid: {reason}")]
    InvalidGrid {
        /// The reason the grid parameters were rejected.
        reason: String,
    },
}

/// Configuration error type
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    /// The file extension is neither `.json` nor `.toml`
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// A value failed validation
    #[error("Invalid option '{key}': {reason}")]
    Invalid {
        /// Dotted key of the offending option.
        key: String,
        /// The reason the value is invalid.
        reason: String,
    },

    /// The document could not be parsed or serialized
    #[error("Failed to parse options: {0}")]
    Parse(String),
}

/// Main error type for Shapekit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Path data error
    #[error(transparent)]
    Path(#[from] MalformedPathError),

    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a path data error
    pub fn is_path_error(&self) -> bool {
        matches!(self, Error::Path(_))
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
