/// Compact bit matrix, one bit per cell, addressed as (x, y) = (column, row)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create a new bit matrix with all bits cleared
    pub fn new(width: usize, height: usize) -> Self {
        let bytes_needed = (width * height).div_ceil(8);
        Self {
            width,
            height,
            data: vec![0; bytes_needed],
        }
    }

    /// Create a square matrix of `size` x `size`
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Get matrix width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get matrix height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get bit at (x, y); out-of-bounds reads are false
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y * self.width + x;
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Set bit at (x, y); out-of-bounds writes are ignored
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y * self.width + x;
        let bit = 1 << (index % 8);
        if value {
            self.data[index / 8] |= bit;
        } else {
            self.data[index / 8] &= !bit;
        }
    }

    /// Number of set bits
    pub fn count_ones(&self) -> usize {
        // Padding bits in the last byte are never set, so a plain popcount is exact.
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }
}
