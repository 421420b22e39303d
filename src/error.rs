//! Error types for symbol construction

use thiserror::Error;

/// Errors reported to callers before any matrix state is touched
#[derive(Error, Debug)]
pub enum QrError {
    /// A character has no single-byte (Latin-1) representation
    #[error("unsupported character {ch:?} at position {position}: only U+0000..=U+00FF can be byte-encoded")]
    UnsupportedCharacter {
        /// Offending character
        ch: char,
        /// Character index within the input text
        position: usize,
    },
    /// Input does not fit the requested version, or any supported version
    #[error("text too long: {length} bytes, capacity is {capacity} bytes")]
    TextTooLong {
        /// Input length in bytes
        length: usize,
        /// Largest byte count that would have fit
        capacity: usize,
    },
    /// Version outside the supported range
    #[error("unsupported version {0}: only versions 1 and 2 are supported")]
    UnsupportedVersion(u8),
    /// Error correction designator outside L/M/Q/H
    #[error("invalid error correction level {0:?}: expected one of L, M, Q, H")]
    InvalidECLevel(String),
    /// Failure while writing a rendered symbol
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, QrError>;
