//! Error types for glyphscan-recog

use thiserror::Error;

/// Errors that can occur during recognition operations
#[derive(Debug, Error)]
pub enum RecogError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] glyphscan_core::Error),

    /// Reading a font directory or decoding a glyph image failed
    #[error("I/O error: {0}")]
    Io(#[from] glyphscan_io::IoError),

    /// A glyph template has no foreground pixels or zero size
    #[error("invalid template '{name}': {width}x{height} image with no usable foreground")]
    InvalidTemplate {
        name: String,
        width: u32,
        height: u32,
    },

    /// The correlation primitive rejected its input
    #[error("correlation failed: {0}")]
    CorrelationFailure(String),

    /// Invalid parameter provided
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// No font family with this name has been loaded
    #[error("unknown font family: {0}")]
    UnknownFamily(String),

    /// A glyph file name could not be decoded into a symbol name
    #[error("invalid symbol name '{file_name}': {message}")]
    InvalidSymbolName { file_name: String, message: String },
}

/// Result type for recognition operations
pub type RecogResult<T> = Result<T, RecogError>;
