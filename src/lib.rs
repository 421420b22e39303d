//! qr_forge - QR code symbol encoder
//!
//! Encodes short text into QR Code Model 2 symbols, versions 1 (21x21) and
//! 2 (25x25), byte mode, error correction level L. Every stage is exposed so
//! the intermediate matrices can be inspected.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

mod debug;

/// QR code encoding stages (bitstream, Reed-Solomon, layout, masking, format)
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (QrSymbol, ModuleMatrix, BitMatrix, Version, etc.)
pub mod models;
/// Stage orchestration and per-stage snapshots
pub mod pipeline;
/// Image and text rendering of finished symbols
pub mod render;
/// Helpers shared by the command-line tool
pub mod tools;

pub use error::{QrError, Result};
pub use models::{BitMatrix, ECLevel, MaskPattern, Module, ModuleMatrix, QrSymbol, Version};
pub use pipeline::{EncodeOptions, PipelineStages, encode_with_stages};
pub use render::RenderOptions;

use encoder::bitstream::latin1_bytes;
use pipeline::encode_payload;

/// Encode text into the smallest version that fits
///
/// # Arguments
/// * `text` - Characters in U+0000..=U+00FF, encoded one byte each
///
/// # Errors
/// `UnsupportedCharacter` for any character outside Latin-1, `TextTooLong`
/// when the text does not fit version 2
pub fn encode(text: &str) -> Result<QrSymbol> {
    encode_with_options(text, &EncodeOptions::default())
}

/// Encode text into a specific version (1 or 2)
pub fn encode_with_version(text: &str, version: u8) -> Result<QrSymbol> {
    encode_with_options(text, &EncodeOptions::with_version(version))
}

/// Encode text with explicit options
pub fn encode_with_options(text: &str, options: &EncodeOptions) -> Result<QrSymbol> {
    let payload = latin1_bytes(text)?;
    encode_payload(&payload, options)
}

/// Encode raw bytes, optionally pinned to a version
pub fn encode_bytes(payload: &[u8], version: Option<u8>) -> Result<QrSymbol> {
    encode_payload(
        payload,
        &EncodeOptions {
            version,
            ..EncodeOptions::default()
        },
    )
}

/// Encoder with reusable options
pub struct Encoder {
    options: EncodeOptions,
}

impl Encoder {
    /// Create an encoder with default settings (auto version)
    pub fn new() -> Self {
        Self {
            options: EncodeOptions::default(),
        }
    }

    /// Create an encoder pinned to one version
    pub fn with_version(version: u8) -> Self {
        Self {
            options: EncodeOptions::with_version(version),
        }
    }

    /// Force sequential or parallel mask evaluation
    pub fn parallel_masks(mut self, parallel: bool) -> Self {
        self.options.parallel_masks = Some(parallel);
        self
    }

    /// Current options
    pub fn options(&self) -> &EncodeOptions {
        &self.options
    }

    /// Encode text
    pub fn encode(&self, text: &str) -> Result<QrSymbol> {
        encode_with_options(text, &self.options)
    }

    /// Encode raw bytes
    pub fn encode_bytes(&self, payload: &[u8]) -> Result<QrSymbol> {
        encode_payload(payload, &self.options)
    }

    /// Encode text and keep every intermediate stage
    pub fn encode_with_stages(&self, text: &str) -> Result<PipelineStages> {
        let payload = latin1_bytes(text)?;
        encode_with_stages(&payload, &self.options)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_hello() {
        let symbol = encode("HELLO").unwrap();
        assert_eq!(symbol.version, Version::MIN);
        assert_eq!(symbol.size(), 21);
        assert_eq!(symbol.error_correction, ECLevel::L);
    }

    #[test]
    fn test_latin1_accepted_beyond_ascii() {
        let symbol = encode("café ÿ").unwrap();
        assert_eq!(symbol.version, Version::MIN);
    }

    #[test]
    fn test_errors_before_matrix() {
        assert!(matches!(
            encode("ok €"),
            Err(QrError::UnsupportedCharacter { ch: '€', position: 3 })
        ));
        assert!(matches!(encode_with_version("x", 0), Err(QrError::UnsupportedVersion(0))));
        assert!(matches!(
            encode_bytes(&[0u8; 40], None),
            Err(QrError::TextTooLong { length: 40, .. })
        ));
    }

    #[test]
    fn test_encoder_matches_free_functions() {
        let encoder = Encoder::with_version(2).parallel_masks(false);
        let a = encoder.encode("HELLO").unwrap();
        let b = encode_with_version("HELLO", 2).unwrap();
        assert_eq!(a.version, Version::MAX);
        assert_eq!(a.modules, b.modules);
        assert_eq!(encoder.encode_bytes(b"HELLO").unwrap().modules, a.modules);
        assert_eq!(
            encoder.encode_with_stages("HELLO").unwrap().final_symbol.modules,
            a.modules
        );
    }
}
