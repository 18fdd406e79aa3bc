use std::error;
use std::fmt;

/// Errors produced by QR code construction and rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Content does not fit in a version 40 symbol at the requested
    /// error correction level.
    ContentTooLarge,
    /// Content is empty or cannot be represented in any encoding mode.
    InvalidContent,
    /// Requested raster size is not a positive number of pixels.
    InvalidSize,
    /// A codeword or module count did not match the specification tables.
    /// Indicates a table or logic defect, never a caller mistake.
    InternalConsistency(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ContentTooLarge => {
                write!(f, "content too large: exceeds version 40 capacity at this error correction level")
            }
            Error::InvalidContent => write!(
                f,
                "invalid content: input is empty or cannot be represented in any encoding mode"
            ),
            Error::InvalidSize => write!(f, "invalid size: raster target must be positive"),
            Error::InternalConsistency(detail) => {
                write!(f, "internal consistency error: {}", detail)
            }
        }
    }
}

impl error::Error for Error {}
