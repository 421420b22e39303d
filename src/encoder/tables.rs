use crate::models::Version;

/// Per-version constants for byte mode at error correction level L
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionSpec {
    /// Version number, 1 or 2
    pub version: u8,
    /// Modules per side
    pub size: usize,
    /// Data codewords (bytes), header and padding included
    pub data_codewords: usize,
    /// Error correction codewords, single block
    pub ecc_codewords: usize,
    /// Alignment pattern center coordinates (row/column candidates)
    pub alignment_centers: &'static [usize],
    /// Unreserved cells left over after all codewords are placed
    pub remainder_bits: usize,
}

// Values from the QR Code Model 2 tables, level L. Both versions use a single
// Reed-Solomon block, so no interleaving is required.
static VERSION_SPECS: [VersionSpec; 2] = [
    VersionSpec {
        version: 1,
        size: 21,
        data_codewords: 19,
        ecc_codewords: 7,
        alignment_centers: &[],
        remainder_bits: 0,
    },
    VersionSpec {
        version: 2,
        size: 25,
        data_codewords: 34,
        ecc_codewords: 10,
        alignment_centers: &[6, 18],
        remainder_bits: 7,
    },
];

/// Byte-mode indicator
pub const MODE_BYTE: u32 = 0b0100;
/// Mode indicator width in bits
pub const MODE_BITS: usize = 4;
/// Character count width for byte mode, versions 1-9
pub const COUNT_BITS: usize = 8;
/// Pad codewords appended after the terminator, alternating
pub const PAD_CODEWORDS: [u8; 2] = [0xEC, 0x11];

/// Table entry for `version`
pub fn version_spec(version: Version) -> &'static VersionSpec {
    &VERSION_SPECS[version.number() as usize - 1]
}

impl VersionSpec {
    /// Data capacity in bits
    pub fn data_bits(&self) -> usize {
        self.data_codewords * 8
    }

    /// Total codewords placed in the symbol
    pub fn total_codewords(&self) -> usize {
        self.data_codewords + self.ecc_codewords
    }

    /// Largest payload in bytes that fits after the mode and count header
    pub fn byte_capacity(&self) -> usize {
        (self.data_bits() - MODE_BITS - COUNT_BITS) / 8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacities() {
        let v1 = version_spec(Version::MIN);
        let v2 = version_spec(Version::MAX);
        assert_eq!(v1.data_bits(), 152);
        assert_eq!(v2.data_bits(), 272);
        assert_eq!(v1.byte_capacity(), 17);
        assert_eq!(v2.byte_capacity(), 32);
        assert_eq!(v1.total_codewords(), 26);
        assert_eq!(v2.total_codewords(), 44);
    }

    #[test]
    fn test_sizes_match_version_formula() {
        for version in Version::all() {
            let spec = version_spec(version);
            assert_eq!(spec.version, version.number());
            assert_eq!(spec.size, version.size());
        }
    }
}
