/// Format information: error correction level and mask id, BCH protected
use crate::encoder::bch;
use crate::models::{ECLevel, MaskPattern, Module, ModuleMatrix};

/// Format info is 15 bits (5 data + 10 ECC), stored twice in the symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatInfo {
    pub ec_level: ECLevel,
    pub mask_pattern: MaskPattern,
}

impl FormatInfo {
    /// Descriptor for one level and mask
    pub fn new(ec_level: ECLevel, mask_pattern: MaskPattern) -> Self {
        Self {
            ec_level,
            mask_pattern,
        }
    }

    /// The 5 protected bits: EC level (2) then mask (3)
    pub fn data_bits(&self) -> u8 {
        (self.ec_level.format_bits() << 3) | self.mask_pattern.id()
    }

    /// Masked 15-bit descriptor
    pub fn encode(&self) -> u16 {
        bch::encode_format(self.data_bits())
    }

    /// Decode a 15-bit descriptor (tolerates up to 3 flipped bits)
    pub fn decode(descriptor: u16) -> Option<Self> {
        let data = bch::decode_format(descriptor)?;
        Some(Self {
            ec_level: ECLevel::from_format_bits(data >> 3),
            mask_pattern: MaskPattern::from_bits(data),
        })
    }

    /// Write both copies into `matrix`; index 0 is the most significant bit
    pub fn place(&self, matrix: &mut ModuleMatrix) -> u16 {
        let descriptor = self.encode();
        let size = matrix.size();
        for (idx, (primary, secondary)) in primary_positions()
            .into_iter()
            .zip(secondary_positions(size))
            .enumerate()
        {
            let module = Module::from_bit(descriptor_bit(descriptor, idx));
            matrix.set(primary.0, primary.1, module);
            matrix.set(secondary.0, secondary.1, module);
        }
        descriptor
    }

    /// Read and decode the copy around the top-left finder
    pub fn extract(matrix: &ModuleMatrix) -> Option<Self> {
        Self::decode(read_bits(matrix, &primary_positions()))
    }

    /// Read and decode the copy split between the other two finders
    pub fn extract_secondary(matrix: &ModuleMatrix) -> Option<Self> {
        Self::decode(read_bits(matrix, &secondary_positions(matrix.size())))
    }
}

fn descriptor_bit(descriptor: u16, idx: usize) -> bool {
    (descriptor >> (14 - idx)) & 1 == 1
}

fn read_bits(matrix: &ModuleMatrix, positions: &[(usize, usize); 15]) -> u16 {
    positions
        .iter()
        .fold(0u16, |bits, &(x, y)| (bits << 1) | matrix.is_dark(x, y) as u16)
}

/// (x, y) of descriptor bits 0..15 next to the top-left finder:
/// row 8 columns 0-5, 7, 8, then column 8 rows 7, 5..0 (skips timing)
pub fn primary_positions() -> [(usize, usize); 15] {
    let mut positions = [(0, 0); 15];
    for (idx, slot) in positions.iter_mut().enumerate() {
        *slot = match idx {
            0..=5 => (idx, 8),
            6 => (7, 8),
            7 => (8, 8),
            8 => (8, 7),
            _ => (8, 14 - idx),
        };
    }
    positions
}

/// (x, y) of descriptor bits 0..15 in the mirrored copy:
/// column 8 from the bottom edge upward, then row 8 from column size-8 rightward
pub fn secondary_positions(size: usize) -> [(usize, usize); 15] {
    let mut positions = [(0, 0); 15];
    for (idx, slot) in positions.iter_mut().enumerate() {
        *slot = if idx < 7 {
            (8, size - 1 - idx)
        } else {
            (size - 15 + idx, 8)
        };
    }
    positions
}
