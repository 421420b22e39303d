/// BCH(15,5) code protecting the format information
///
/// Generator polynomial: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
pub const FORMAT_GENERATOR: u16 = 0b101_0011_0111;
/// Fixed XOR mask applied to every format descriptor
pub const FORMAT_XOR_MASK: u16 = 0b101_0100_0001_0010;

/// 10-bit remainder of `data << 10` divided by the generator
pub fn format_remainder(data: u8) -> u16 {
    let mut rem = ((data & 0x1F) as u16) << 10;
    for i in (10..15).rev() {
        if (rem >> i) & 1 == 1 {
            rem ^= FORMAT_GENERATOR << (i - 10);
        }
    }
    rem & 0x3FF
}

/// Masked 15-bit descriptor for 5 data bits
pub fn encode_format(data: u8) -> u16 {
    let data = (data & 0x1F) as u16;
    ((data << 10) | format_remainder(data as u8)) ^ FORMAT_XOR_MASK
}

/// True when `descriptor` is an exact codeword
pub fn check_format(descriptor: u16) -> bool {
    let unmasked = descriptor ^ FORMAT_XOR_MASK;
    format_remainder((unmasked >> 10) as u8) == unmasked & 0x3FF
}

/// Recover the 5 data bits, correcting up to 3 bit errors
pub fn decode_format(descriptor: u16) -> Option<u8> {
    let descriptor = descriptor & 0x7FFF;
    let (data, distance) = (0u8..32)
        .map(|data| (data, (encode_format(data) ^ descriptor).count_ones()))
        .min_by_key(|&(_, distance)| distance)?;
    if distance <= 3 { Some(data) } else { None }
}
