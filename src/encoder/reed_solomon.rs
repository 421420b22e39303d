/// Reed-Solomon error correction codewords for QR codes
/// QR codes use RS over GF(256) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
/// GF(256) field operations using log/exp tables
pub struct Gf256;

static LOG_TABLE: [u8; 256] = [
    0, 0, 1, 25, 2, 50, 26, 198, 3, 223, 51, 238, 27, 104, 199, 75, 4, 100, 224, 14, 52, 141, 239,
    129, 28, 193, 105, 248, 200, 8, 76, 113, 5, 138, 101, 47, 225, 36, 15, 33, 53, 147, 142, 218,
    240, 18, 130, 69, 29, 181, 194, 125, 106, 39, 249, 185, 201, 154, 9, 120, 77, 228, 114, 166, 6,
    191, 139, 98, 102, 221, 48, 253, 226, 152, 37, 179, 16, 145, 34, 136, 54, 208, 148, 206, 143,
    150, 219, 189, 241, 210, 19, 92, 131, 56, 70, 64, 30, 66, 182, 163, 195, 72, 126, 110, 107, 58,
    40, 84, 250, 133, 186, 61, 202, 94, 155, 159, 10, 21, 121, 43, 78, 212, 229, 172, 115, 243,
    167, 87, 7, 112, 192, 247, 140, 128, 99, 13, 103, 74, 222, 237, 49, 197, 254, 24, 227, 165,
    153, 119, 38, 184, 180, 124, 17, 68, 146, 217, 35, 32, 137, 46, 55, 63, 209, 91, 149, 188, 207,
    205, 144, 135, 151, 178, 220, 252, 190, 97, 242, 86, 211, 171, 20, 42, 93, 158, 132, 60, 57,
    83, 71, 109, 65, 162, 31, 45, 67, 216, 183, 123, 164, 118, 196, 23, 73, 236, 127, 12, 111, 246,
    108, 161, 59, 82, 41, 157, 85, 170, 251, 96, 134, 177, 187, 204, 62, 90, 203, 89, 95, 176, 156,
    169, 160, 81, 11, 245, 22, 235, 122, 117, 44, 215, 79, 174, 213, 233, 230, 231, 173, 232, 116,
    214, 244, 234, 168, 80, 88, 175,
];

static EXP_TABLE: [u8; 256] = [
    1, 2, 4, 8, 16, 32, 64, 128, 29, 58, 116, 232, 205, 135, 19, 38, 76, 152, 45, 90, 180, 117,
    234, 201, 143, 3, 6, 12, 24, 48, 96, 192, 157, 39, 78, 156, 37, 74, 148, 53, 106, 212, 181,
    119, 238, 193, 159, 35, 70, 140, 5, 10, 20, 40, 80, 160, 93, 186, 105, 210, 185, 111, 222, 161,
    95, 190, 97, 194, 153, 47, 94, 188, 101, 202, 137, 15, 30, 60, 120, 240, 253, 231, 211, 187,
    107, 214, 177, 127, 254, 225, 223, 163, 91, 182, 113, 226, 217, 175, 67, 134, 17, 34, 68, 136,
    13, 26, 52, 104, 208, 189, 103, 206, 129, 31, 62, 124, 248, 237, 199, 147, 59, 118, 236, 197,
    151, 51, 102, 204, 133, 23, 46, 92, 184, 109, 218, 169, 79, 158, 33, 66, 132, 21, 42, 84, 168,
    77, 154, 41, 82, 164, 85, 170, 73, 146, 57, 114, 228, 213, 183, 115, 230, 209, 191, 99, 198,
    145, 63, 126, 252, 229, 215, 179, 123, 246, 241, 255, 227, 219, 171, 75, 150, 49, 98, 196, 149,
    55, 110, 220, 165, 87, 174, 65, 130, 25, 50, 100, 200, 141, 7, 14, 28, 56, 112, 224, 221, 167,
    83, 166, 81, 162, 89, 178, 121, 242, 249, 239, 195, 155, 43, 86, 172, 69, 138, 9, 18, 36, 72,
    144, 61, 122, 244, 245, 247, 243, 251, 235, 203, 139, 11, 22, 44, 88, 176, 125, 250, 233, 207,
    131, 27, 54, 108, 216, 173, 71, 142, 1,
];

impl Gf256 {
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_a = LOG_TABLE[a as usize] as usize;
        let log_b = LOG_TABLE[b as usize] as usize;
        EXP_TABLE[(log_a + log_b) % 255]
    }

    /// alpha^n for the field generator alpha = 2
    pub fn exp(n: usize) -> u8 {
        EXP_TABLE[n % 255]
    }
}

/// Systematic Reed-Solomon encoder, generator roots alpha^0 .. alpha^(n-1)
#[derive(Debug, Clone)]
pub struct ReedSolomonEncoder {
    /// Generator coefficients in descending order, monic leading term dropped
    generator: Vec<u8>,
}

impl ReedSolomonEncoder {
    pub fn new(num_ecc_codewords: usize) -> Self {
        assert!(
            (1..=68).contains(&num_ecc_codewords),
            "unsupported ECC codeword count {num_ecc_codewords}"
        );
        let mut poly = vec![1u8];
        for i in 0..num_ecc_codewords {
            // poly *= (x + alpha^i)
            let root = Gf256::exp(i);
            let mut next = vec![0u8; poly.len() + 1];
            for (j, &coeff) in poly.iter().enumerate() {
                next[j] ^= coeff;
                next[j + 1] ^= Gf256::mul(coeff, root);
            }
            poly = next;
        }
        Self {
            generator: poly[1..].to_vec(),
        }
    }

    pub fn num_ecc_codewords(&self) -> usize {
        self.generator.len()
    }

    /// Remainder of data * x^n divided by the generator
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        let n = self.generator.len();
        let mut remainder = vec![0u8; n];
        for &d in data {
            let factor = d ^ remainder[0];
            remainder.rotate_left(1);
            remainder[n - 1] = 0;
            for (r, &g) in remainder.iter_mut().zip(&self.generator) {
                *r ^= Gf256::mul(g, factor);
            }
        }
        remainder
    }

    /// Codeword evaluated at each generator root; all zero for a valid block
    pub fn syndromes(&self, codeword: &[u8]) -> Vec<u8> {
        (0..self.generator.len())
            .map(|i| {
                let x = Gf256::exp(i);
                // Descending convention: codeword[0] is the coefficient of x^(len-1)
                codeword
                    .iter()
                    .fold(0u8, |acc, &c| Gf256::mul(acc, x) ^ c)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gf256_basic() {
        // 0 * anything = 0
        assert_eq!(Gf256::mul(0, 5), 0);
        assert_eq!(Gf256::mul(5, 0), 0);
        assert_eq!(Gf256::mul(1, 123), 123);
        // alpha^8 reduces by the field polynomial 0x11D
        assert_eq!(Gf256::mul(128, 2), 29);
    }

    #[test]
    fn test_gf256_exp() {
        // alpha^255 = 1 (order of the multiplicative group)
        assert_eq!(Gf256::exp(255), 1);
        assert_eq!(Gf256::exp(256), 2);
        assert_eq!(Gf256::exp(260), Gf256::exp(5));
        assert_eq!(Gf256::exp(5), 32);
    }

    #[test]
    fn test_generator_degree_7() {
        // Published generator for 7 ECC codewords, as alpha exponents:
        // x^7 + a^87 x^6 + a^229 x^5 + a^146 x^4 + a^149 x^3 + a^238 x^2 + a^102 x + a^21
        let encoder = ReedSolomonEncoder::new(7);
        let expected: Vec<u8> = [87, 229, 146, 149, 238, 102, 21]
            .iter()
            .map(|&e| Gf256::exp(e))
            .collect();
        assert_eq!(encoder.generator, expected);
    }

    #[test]
    fn test_known_vector_hello_world_1m() {
        // "HELLO WORLD" version 1-M data codewords and their published ECC
        let data = [
            32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, 17, 236, 17,
        ];
        let encoder = ReedSolomonEncoder::new(10);
        assert_eq!(
            encoder.encode(&data),
            vec![196, 35, 39, 119, 235, 215, 231, 226, 93, 23]
        );
    }

    #[test]
    fn test_syndromes_zero_for_codeword() {
        let data: Vec<u8> = "4376471154038".bytes().collect();
        let encoder = ReedSolomonEncoder::new(7);
        let mut codeword = data.clone();
        codeword.extend(encoder.encode(&data));
        assert!(encoder.syndromes(&codeword).iter().all(|&s| s == 0));

        codeword[3] ^= 0x42;
        assert!(encoder.syndromes(&codeword).iter().any(|&s| s != 0));
    }

    #[test]
    fn test_deterministic() {
        let data = [0x10, 0x20, 0x30, 0x40, 0x50, 0x60];
        let encoder = ReedSolomonEncoder::new(10);
        assert_eq!(encoder.encode(&data), encoder.encode(&data));
        assert_eq!(encoder.encode(&data), ReedSolomonEncoder::new(10).encode(&data));
        assert_eq!(encoder.num_ecc_codewords(), 10);
    }
}
