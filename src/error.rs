//! Unified error types for the photo viewer application.

use std::fmt;

/// Application-specific errors.
#[derive(Debug)]
pub enum AppError {
    /// Error loading or decoding an image file
    ImageLoad(String),
    /// Error scanning directory for image files
    DirectoryScan(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ImageLoad(msg) => write!(f, "Image load error: {}", msg),
            AppError::DirectoryScan(msg) => write!(f, "Directory scan error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::ImageLoad(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::DirectoryScan(err.to_string())
    }
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, AppError>;

/// Errors raised by the list adapter when the toolkit breaks its contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// A row was bound to a position outside `[0, len)`.
    IndexOutOfRange { position: i64, len: usize },
}

impl fmt::Display for AdapterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { position, len } => {
                write!(f, "Row position {} out of range (item count {})", position, len)
            }
        }
    }
}

impl std::error::Error for AdapterError {}

/// Errors that can occur while saving a photo to the pictures collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// The media store declined to allocate a writable entry.
    NoTarget,
    /// Encoding or writing failed.
    WriteFailed(String),
    /// The export was cancelled before any work started.
    Cancelled,
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTarget => write!(f, "No writable gallery entry available"),
            Self::WriteFailed(msg) => write!(f, "Failed to write image: {}", msg),
            Self::Cancelled => write!(f, "Export cancelled"),
        }
    }
}

impl std::error::Error for ExportError {}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::WriteFailed(err.to_string())
    }
}

impl From<image::ImageError> for ExportError {
    fn from(err: image::ImageError) -> Self {
        ExportError::WriteFailed(err.to_string())
    }
}
