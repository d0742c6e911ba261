// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Compression(CompressionError),
}

/// Reasons the compressor can reject a payload.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompressionError {
    /// The dropped file contained no bytes.
    EmptyInput,

    /// The payload could not be decoded as an image.
    Decode(String),

    /// Re-encoding the image failed.
    Encode(String),

    /// The background worker panicked or was cancelled.
    Worker(String),
}

impl CompressionError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            CompressionError::EmptyInput => "error-compression-empty",
            CompressionError::Decode(_) => "error-compression-decode",
            CompressionError::Encode(_) => "error-compression-encode",
            CompressionError::Worker(_) => "error-compression-worker",
        }
    }
}

impl fmt::Display for CompressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompressionError::EmptyInput => write!(f, "Image file is empty"),
            CompressionError::Decode(msg) => write!(f, "Failed to decode image: {}", msg),
            CompressionError::Encode(msg) => write!(f, "Failed to encode image: {}", msg),
            CompressionError::Worker(msg) => write!(f, "Compression worker failed: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Compression(e) => write!(f, "Compression Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<CompressionError> for Error {
    fn from(err: CompressionError) -> Self {
        Error::Compression(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
