//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while preparing or checking a regression test
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to write an image
    #[error("failed to write image '{path}': {message}")]
    ImageWrite { path: String, message: String },

    /// A fixture description could not be turned into an image
    #[error("invalid fixture: {0}")]
    Fixture(String),

    /// Raster-level failure while composing a fixture
    #[error("core error: {0}")]
    Core(#[from] glyphscan_core::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
