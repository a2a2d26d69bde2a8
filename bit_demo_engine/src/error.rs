//! Error types for the Bit demo engine
//!
//! This module defines the error types used throughout the demo engine,
//! including camera configuration, projection setup and window initialization.

use std::fmt;

/// Result type for Bit demo engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Bit demo engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// A numeric parameter was rejected (non-positive speed, zero aspect, NaN...)
    InvalidParameter(String),

    /// Initialization failed (event loop, window, application context)
    InitializationFailed(String),

    /// Windowing system error reported while running the event loop
    WindowError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::WindowError(msg) => write!(f, "Window error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
