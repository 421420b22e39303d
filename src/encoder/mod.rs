//! QR code encoding modules
//!
//! Stages run in this order for every symbol:
//! - Bitstream construction (mode, count, payload, terminator, padding)
//! - Reed-Solomon error correction codewords
//! - Function pattern layout and data placement
//! - Mask search with penalty scoring, then format information

/// BCH(15,5) code for format information
pub mod bch;
/// Bitstream construction for byte-mode segments
pub mod bitstream;
/// Environment knobs read once per process
pub mod config;
/// Format information placement and read-back
pub mod format;
/// Finder, separator, alignment, timing and format-area reservation
pub mod function_patterns;
/// Mask application and candidate selection
pub mod mask;
/// Penalty rules used to rank mask candidates
pub mod penalty;
/// Zigzag placement of codeword bits
pub mod placement;
/// Reed-Solomon error correction over GF(256)
pub mod reed_solomon;
/// Per-version capacity and layout tables
pub mod tables;

use crate::debug::trace_stage;
use crate::error::Result;
use bitstream::BitBuffer;
use reed_solomon::ReedSolomonEncoder;
use tables::VersionSpec;

/// Data codewords followed by their error correction codewords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodewordSet {
    /// Padded data codewords
    pub data: Vec<u8>,
    /// Reed-Solomon codewords for `data`
    pub ecc: Vec<u8>,
}

impl CodewordSet {
    /// Build the padded data codewords and ECC for `payload`
    pub fn build(payload: &[u8], spec: &VersionSpec) -> Result<Self> {
        let data = bitstream::encode_data_bits(payload, spec)?.to_bytes();
        let ecc = ReedSolomonEncoder::new(spec.ecc_codewords).encode(&data);
        trace_stage!(
            "[codewords] v{} data={} ecc={}",
            spec.version,
            data.len(),
            ecc.len()
        );
        Ok(Self { data, ecc })
    }

    /// Data then ECC, in placement order
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut all = Vec::with_capacity(self.data.len() + self.ecc.len());
        all.extend_from_slice(&self.data);
        all.extend_from_slice(&self.ecc);
        all
    }

    /// Every codeword bit, most significant bit of each codeword first
    pub fn to_bits(&self) -> Vec<bool> {
        BitBuffer::from_bytes(&self.to_bytes()).as_bits().to_vec()
    }

    /// Total codewords, data and ECC
    pub fn len(&self) -> usize {
        self.data.len() + self.ecc.len()
    }

    /// True when there are no codewords at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
