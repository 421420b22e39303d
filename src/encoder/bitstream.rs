/// Byte-mode bitstream construction
use crate::debug::trace_stage;
use crate::encoder::tables::{COUNT_BITS, MODE_BITS, MODE_BYTE, PAD_CODEWORDS, VersionSpec};
use crate::error::{QrError, Result};

/// Append-only bit sequence, most significant bit first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    bits: Vec<bool>,
}

impl BitBuffer {
    /// Empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty buffer with room for `bits` bits
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: Vec::with_capacity(bits),
        }
    }

    /// Append the low `count` bits of `value`, MSB first
    pub fn push_bits(&mut self, value: u32, count: usize) {
        assert!(count <= 32, "cannot push {count} bits from a u32");
        for i in (0..count).rev() {
            self.bits.push((value >> i) & 1 != 0);
        }
    }

    /// Append all eight bits of `byte`, MSB first
    pub fn push_byte(&mut self, byte: u8) {
        self.push_bits(byte as u32, 8);
    }

    /// Number of bits written so far
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True before any bit is written
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Bits in write order
    pub fn as_bits(&self) -> &[bool] {
        &self.bits
    }

    /// Pack into bytes; the length must be a whole number of bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        assert!(self.bits.len() % 8 == 0, "bitstream of {} bits is not byte aligned", self.bits.len());
        self.bits
            .chunks(8)
            .map(|chunk| chunk.iter().fold(0u8, |acc, &b| (acc << 1) | b as u8))
            .collect()
    }

    /// Expand bytes into a bitstream, MSB first
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut buffer = Self::with_capacity(bytes.len() * 8);
        for &byte in bytes {
            buffer.push_byte(byte);
        }
        buffer
    }
}

/// Padding added by [`finish`], reported for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddingReport {
    /// Zero bits of the terminator, at most four
    pub terminator_bits: usize,
    /// Zero bits added to reach a byte boundary
    pub alignment_bits: usize,
    /// Alternating 0xEC/0x11 codewords appended
    pub pad_codewords: usize,
}

/// Convert text to single-byte code points (Latin-1)
pub fn latin1_bytes(text: &str) -> Result<Vec<u8>> {
    text.chars()
        .enumerate()
        .map(|(position, ch)| {
            u8::try_from(u32::from(ch)).map_err(|_| QrError::UnsupportedCharacter { ch, position })
        })
        .collect()
}

/// Mode indicator, character count and payload
pub fn encode_segment(payload: &[u8], spec: &VersionSpec) -> Result<BitBuffer> {
    let capacity = spec.byte_capacity();
    if payload.len() > capacity {
        return Err(QrError::TextTooLong {
            length: payload.len(),
            capacity,
        });
    }

    let mut bits = BitBuffer::with_capacity(spec.data_bits());
    bits.push_bits(MODE_BYTE, MODE_BITS);
    bits.push_bits(payload.len() as u32, COUNT_BITS);
    for &byte in payload {
        bits.push_byte(byte);
    }
    Ok(bits)
}

/// Terminator, byte alignment and pad codewords up to exactly `capacity` bits
pub fn finish(bits: &mut BitBuffer, capacity: usize) -> PaddingReport {
    assert!(
        bits.len() <= capacity,
        "segment of {} bits overruns capacity of {} bits",
        bits.len(),
        capacity
    );
    assert!(capacity % 8 == 0, "capacity must be whole codewords");

    let terminator_bits = (capacity - bits.len()).min(4);
    bits.push_bits(0, terminator_bits);

    let alignment_bits = (8 - bits.len() % 8) % 8;
    bits.push_bits(0, alignment_bits);

    let mut pad_codewords = 0;
    while bits.len() < capacity {
        bits.push_byte(PAD_CODEWORDS[pad_codewords % 2]);
        pad_codewords += 1;
    }

    PaddingReport {
        terminator_bits,
        alignment_bits,
        pad_codewords,
    }
}

/// Full data bitstream for `payload`: exactly `spec.data_bits()` long
pub fn encode_data_bits(payload: &[u8], spec: &VersionSpec) -> Result<BitBuffer> {
    let mut bits = encode_segment(payload, spec)?;
    let report = finish(&mut bits, spec.data_bits());
    trace_stage!(
        "[bitstream] v{} payload={}B terminator={} align={} pad_codewords={}",
        spec.version,
        payload.len(),
        report.terminator_bits,
        report.alignment_bits,
        report.pad_codewords
    );
    assert_eq!(bits.len(), spec.data_bits(), "bitstream length mismatch");
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::tables::version_spec;
    use crate::models::Version;

    fn v1() -> &'static VersionSpec {
        version_spec(Version::MIN)
    }

    fn v2() -> &'static VersionSpec {
        version_spec(Version::MAX)
    }

    #[test]
    fn test_hello_codewords() {
        let bits = encode_data_bits(b"HELLO", v1()).unwrap();
        let bytes = bits.to_bytes();
        assert_eq!(bytes.len(), 19);
        // 0100 | 00000101 | 'H' ... then terminator and alternating pads
        assert_eq!(&bytes[..7], &[0x40, 0x54, 0x84, 0x54, 0xC4, 0xC4, 0xF0]);
        assert_eq!(bytes[7], 0xEC);
        assert_eq!(bytes[8], 0x11);
        assert_eq!(bytes[18], 0x11);
    }

    #[test]
    fn test_length_is_capacity() {
        for len in 0..=17 {
            let payload = vec![b'a'; len];
            assert_eq!(encode_data_bits(&payload, v1()).unwrap().len(), 152);
        }
        for len in 0..=32 {
            let payload = vec![0xFFu8; len];
            assert_eq!(encode_data_bits(&payload, v2()).unwrap().len(), 272);
        }
    }

    #[test]
    fn test_zero_slack_boundary() {
        // 12 header bits + 17 bytes leaves exactly one terminator nibble
        let mut bits = encode_segment(&[0x55; 17], v1()).unwrap();
        assert_eq!(bits.len(), 148);
        let report = finish(&mut bits, 152);
        assert_eq!(report.terminator_bits, 4);
        assert_eq!(report.alignment_bits, 0);
        assert_eq!(report.pad_codewords, 0);
        assert_eq!(bits.len(), 152);
    }

    #[test]
    fn test_terminator_clipped_to_capacity() {
        let mut bits = BitBuffer::new();
        for _ in 0..15 {
            bits.push_bits(0b10_1010_1010, 10);
        }
        let report = finish(&mut bits, 152);
        assert_eq!(report.terminator_bits, 2);
        assert_eq!(bits.len(), 152);

        let mut full = BitBuffer::from_bytes(&[0xAB; 19]);
        let report = finish(&mut full, 152);
        assert_eq!(report.terminator_bits, 0);
        assert_eq!(report.pad_codewords, 0);
        assert_eq!(full.to_bytes(), vec![0xAB; 19]);
    }

    #[test]
    fn test_too_long_is_rejected() {
        let err = encode_data_bits(&[0u8; 18], v1()).unwrap_err();
        assert!(matches!(err, QrError::TextTooLong { length: 18, capacity: 17 }));
        // The data codeword count is not a payload capacity
        assert!(encode_data_bits(&[0u8; 19], v1()).is_err());
        assert!(encode_data_bits(&[0u8; 33], v2()).is_err());
    }

    #[test]
    fn test_latin1() {
        assert_eq!(latin1_bytes("Añb").unwrap(), vec![b'A', 0xF1, b'b']);
        assert_eq!(latin1_bytes("\u{ff}").unwrap(), vec![0xFF]);
        let err = latin1_bytes("ab€").unwrap_err();
        assert!(matches!(err, QrError::UnsupportedCharacter { ch: '€', position: 2 }));
    }
}
