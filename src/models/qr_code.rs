use std::fmt;
use std::str::FromStr;

use super::{BitMatrix, ModuleMatrix};
use crate::encoder::tables::{self, VersionSpec};
use crate::error::{QrError, Result};

/// QR code version (1 or 2 for this encoder)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest supported version (21x21)
    pub const MIN: Version = Version(1);
    /// Largest supported version (25x25)
    pub const MAX: Version = Version(2);

    /// Validate a version number
    pub fn new(number: u8) -> Result<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&number) {
            Ok(Version(number))
        } else {
            Err(QrError::UnsupportedVersion(number))
        }
    }

    /// All supported versions, smallest first
    pub fn all() -> impl Iterator<Item = Version> {
        (Self::MIN.0..=Self::MAX.0).map(Version)
    }

    /// Get the version number
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(&self) -> usize {
        4 * self.0 as usize + 17
    }

    /// Capacity and layout constants for this version
    pub fn spec(&self) -> &'static VersionSpec {
        tables::version_spec(*self)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ECLevel {
    /// Low (~7% recovery capacity)
    L,
    /// Medium (~15% recovery capacity)
    M,
    /// Quartile (~25% recovery capacity)
    Q,
    /// High (~30% recovery capacity)
    H,
}

impl ECLevel {
    /// All four levels in format-bit order of the standard tables
    pub const ALL: [ECLevel; 4] = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];

    /// 2-bit indicator used in format information (L=01, M=00, Q=11, H=10)
    pub fn format_bits(self) -> u8 {
        match self {
            ECLevel::L => 0b01,
            ECLevel::M => 0b00,
            ECLevel::Q => 0b11,
            ECLevel::H => 0b10,
        }
    }

    /// Inverse of [`ECLevel::format_bits`]
    pub fn from_format_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0b01 => ECLevel::L,
            0b00 => ECLevel::M,
            0b11 => ECLevel::Q,
            _ => ECLevel::H,
        }
    }

    /// Parse a single-letter designator (case-insensitive)
    pub fn from_char(c: char) -> Result<Self> {
        match c.to_ascii_uppercase() {
            'L' => Ok(ECLevel::L),
            'M' => Ok(ECLevel::M),
            'Q' => Ok(ECLevel::Q),
            'H' => Ok(ECLevel::H),
            _ => Err(QrError::InvalidECLevel(c.to_string())),
        }
    }
}

impl FromStr for ECLevel {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => ECLevel::from_char(c),
            _ => Err(QrError::InvalidECLevel(s.to_string())),
        }
    }
}

impl fmt::Display for ECLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            ECLevel::L => 'L',
            ECLevel::M => 'M',
            ECLevel::Q => 'Q',
            ECLevel::H => 'H',
        };
        write!(f, "{c}")
    }
}

/// Mask pattern (0-7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MaskPattern {
    /// (i + j) % 2 == 0
    Pattern0 = 0,
    /// i % 2 == 0
    Pattern1 = 1,
    /// j % 3 == 0
    Pattern2 = 2,
    /// (i + j) % 3 == 0
    Pattern3 = 3,
    /// (i/2 + j/3) % 2 == 0
    Pattern4 = 4,
    /// (i*j)%2 + (i*j)%3 == 0
    Pattern5 = 5,
    /// ((i*j)%2 + (i*j)%3) % 2 == 0
    Pattern6 = 6,
    /// ((i+j)%2 + (i*j)%3) % 2 == 0
    Pattern7 = 7,
}

impl MaskPattern {
    /// Every mask in ascending id order
    pub const ALL: [MaskPattern; 8] = [
        MaskPattern::Pattern0,
        MaskPattern::Pattern1,
        MaskPattern::Pattern2,
        MaskPattern::Pattern3,
        MaskPattern::Pattern4,
        MaskPattern::Pattern5,
        MaskPattern::Pattern6,
        MaskPattern::Pattern7,
    ];

    /// Get mask pattern from the low three bits
    pub fn from_bits(bits: u8) -> Self {
        Self::ALL[(bits & 0x07) as usize]
    }

    /// Mask id, 0-7
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Check if module at row `i`, column `j` is inverted by this mask
    pub fn is_masked(&self, i: usize, j: usize) -> bool {
        match self {
            MaskPattern::Pattern0 => (i + j) % 2 == 0,
            MaskPattern::Pattern1 => i % 2 == 0,
            MaskPattern::Pattern2 => j % 3 == 0,
            MaskPattern::Pattern3 => (i + j) % 3 == 0,
            MaskPattern::Pattern4 => (i / 2 + j / 3) % 2 == 0,
            MaskPattern::Pattern5 => ((i * j) % 2 + (i * j) % 3) == 0,
            MaskPattern::Pattern6 => (((i * j) % 2) + ((i * j) % 3)) % 2 == 0,
            MaskPattern::Pattern7 => (((i + j) % 2) + ((i * j) % 3)) % 2 == 0,
        }
    }
}

impl TryFrom<u8> for MaskPattern {
    type Error = u8;

    fn try_from(id: u8) -> std::result::Result<Self, u8> {
        if id < 8 { Ok(Self::from_bits(id)) } else { Err(id) }
    }
}

/// Finished QR symbol
#[derive(Debug, Clone)]
pub struct QrSymbol {
    /// Resolved QR code version
    pub version: Version,
    /// Error correction level
    pub error_correction: ECLevel,
    /// Mask pattern selected by the penalty search
    pub mask_pattern: MaskPattern,
    /// Penalty score of the selected mask
    pub penalty: u32,
    /// 15-bit format descriptor written into the symbol
    pub format_bits: u16,
    /// Module matrix; remainder cells may be unset and read as light
    pub modules: ModuleMatrix,
}

impl QrSymbol {
    /// Width and height in modules
    pub fn size(&self) -> usize {
        self.modules.size()
    }

    /// True when the module at (x, y) is dark
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        self.modules.is_dark(x, y)
    }

    /// Packed rendered view (true = black, false = white)
    pub fn to_bit_matrix(&self) -> BitMatrix {
        self.modules.to_bit_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_size() {
        assert_eq!(Version::new(1).unwrap().size(), 21);
        assert_eq!(Version::new(2).unwrap().size(), 25);
        assert_eq!(Version::all().count(), 2);
    }

    #[test]
    fn test_unsupported_version() {
        assert!(matches!(Version::new(0), Err(QrError::UnsupportedVersion(0))));
        assert!(matches!(Version::new(3), Err(QrError::UnsupportedVersion(3))));
    }

    #[test]
    fn test_ec_level() {
        for level in ECLevel::ALL {
            assert_eq!(ECLevel::from_format_bits(level.format_bits()), level);
        }
        assert_eq!(ECLevel::L.format_bits(), 0b01);
        assert_eq!("q".parse::<ECLevel>().unwrap(), ECLevel::Q);
        assert!(matches!("X".parse::<ECLevel>(), Err(QrError::InvalidECLevel(_))));
        assert!(matches!("LM".parse::<ECLevel>(), Err(QrError::InvalidECLevel(_))));
    }

    #[test]
    fn test_mask_pattern() {
        let mask = MaskPattern::Pattern0;
        assert!(mask.is_masked(0, 0));
        assert!(!mask.is_masked(0, 1));
        assert!(mask.is_masked(1, 1));

        // Pattern4 uses floor division on both axes
        assert!(MaskPattern::Pattern4.is_masked(1, 2));
        assert!(!MaskPattern::Pattern4.is_masked(2, 0));

        assert_eq!(MaskPattern::try_from(7), Ok(MaskPattern::Pattern7));
        assert_eq!(MaskPattern::try_from(8), Err(8));
        for (id, mask) in MaskPattern::ALL.iter().enumerate() {
            assert_eq!(mask.id() as usize, id);
        }
    }
}
