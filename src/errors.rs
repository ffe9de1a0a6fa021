// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the layout library

use std::fmt;

/// Result type alias using ControlsError
pub type ControlsResult<T> = Result<T, ControlsError>;

/// Errors surfaced by the layout library
///
/// Geometry computations themselves never fail (degenerate input produces
/// zero geometry); errors only arise around configuration persistence.
#[derive(Debug, Clone)]
pub enum ControlsError {
    /// Configuration could not be read or parsed
    Config(String),
    /// Filesystem errors while loading or saving configuration
    Io(String),
}

impl fmt::Display for ControlsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlsError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ControlsError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ControlsError {}

impl From<std::io::Error> for ControlsError {
    fn from(err: std::io::Error) -> Self {
        ControlsError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ControlsError {
    fn from(err: serde_json::Error) -> Self {
        ControlsError::Config(err.to_string())
    }
}
