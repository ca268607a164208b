//! Error types.

use alloc::string::String;
use core::{fmt, num::ParseIntError};

/// Result type with `drunken-bishop`'s [`Error`] as the error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Base64 payload of a SHA-256 fingerprint is malformed.
    Base64(base64ct::Error),

    /// Segment of a colon-separated MD5 fingerprint is not a hex byte.
    HexSegment {
        /// Zero-based index of the offending segment.
        index: usize,

        /// Underlying integer parsing error.
        err: ParseIntError,
    },

    /// Decoded fingerprint has the wrong length for its hash mode.
    Length {
        /// Digest size of the hash mode.
        expected: usize,

        /// Number of bytes actually decoded.
        actual: usize,
    },

    /// Hash mode is neither `md5` nor `sha256`.
    ModeUnsupported {
        /// Hash mode as given by the caller.
        mode: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Base64(err) => write!(f, "Base64 encoding error: {err}"),
            Error::HexSegment { index, err } => {
                write!(f, "invalid hex byte at fingerprint segment {index}: {err}")
            }
            Error::Length { expected, actual } => write!(
                f,
                "fingerprint length invalid (expected {expected} bytes, got {actual})"
            ),
            Error::ModeUnsupported { mode } => write!(f, "unsupported hashing mode: {mode}"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Base64(err) => Some(err),
            Self::HexSegment { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl From<base64ct::Error> for Error {
    fn from(err: base64ct::Error) -> Error {
        Error::Base64(err)
    }
}
