//! Generic fallback implementations for unsupported architectures
//!
//! Leading and trailing zeros are found by a logarithmic bisection over halving bit ranges.
//! Bit reversal has no sub-linear generic form and walks every bit position.

use super::BitOps;

/// Generic bit manipulation operations
pub struct GenericBitOps;

impl BitOps for GenericBitOps {
    const NAME: &'static str = "generic";

    #[inline(always)]
    fn leading_zeros_u64(value: u64) -> u32 {
        if value == 0 {
            return u64::BITS;
        }

        let mut x = value;
        let mut n = 0;
        if x <= 0x0000_0000_FFFF_FFFF {
            n += 32;
            x <<= 32;
        }
        if x <= 0x0000_FFFF_FFFF_FFFF {
            n += 16;
            x <<= 16;
        }
        if x <= 0x00FF_FFFF_FFFF_FFFF {
            n += 8;
            x <<= 8;
        }
        if x <= 0x0FFF_FFFF_FFFF_FFFF {
            n += 4;
            x <<= 4;
        }
        if x <= 0x3FFF_FFFF_FFFF_FFFF {
            n += 2;
            x <<= 2;
        }
        if x <= 0x7FFF_FFFF_FFFF_FFFF {
            n += 1;
        }
        n
    }

    #[inline(always)]
    fn trailing_zeros_u64(value: u64) -> u32 {
        if value == 0 {
            return u64::BITS;
        }

        let mut x = value;
        let mut n = 0;
        if x & 0xFFFF_FFFF == 0 {
            n += 32;
            x >>= 32;
        }
        if x & 0xFFFF == 0 {
            n += 16;
            x >>= 16;
        }
        if x & 0xFF == 0 {
            n += 8;
            x >>= 8;
        }
        if x & 0xF == 0 {
            n += 4;
            x >>= 4;
        }
        if x & 0x3 == 0 {
            n += 2;
            x >>= 2;
        }
        if x & 0x1 == 0 {
            n += 1;
        }
        n
    }

    #[inline(always)]
    fn reverse_bits_u64(value: u64) -> u64 {
        let mut x = value;
        let mut result = 0u64;
        for _ in 0..u64::BITS {
            result = (result << 1) | (x & 1);
            x >>= 1;
        }
        result
    }

    #[inline(always)]
    fn leading_zeros_u32(value: u32) -> u32 {
        if value == 0 {
            return u32::BITS;
        }

        let mut x = value;
        let mut n = 0;
        if x <= 0x0000_FFFF {
            n += 16;
            x <<= 16;
        }
        if x <= 0x00FF_FFFF {
            n += 8;
            x <<= 8;
        }
        if x <= 0x0FFF_FFFF {
            n += 4;
            x <<= 4;
        }
        if x <= 0x3FFF_FFFF {
            n += 2;
            x <<= 2;
        }
        if x <= 0x7FFF_FFFF {
            n += 1;
        }
        n
    }

    #[inline(always)]
    fn trailing_zeros_u32(value: u32) -> u32 {
        if value == 0 {
            return u32::BITS;
        }

        let mut x = value;
        let mut n = 0;
        if x & 0xFFFF == 0 {
            n += 16;
            x >>= 16;
        }
        if x & 0xFF == 0 {
            n += 8;
            x >>= 8;
        }
        if x & 0xF == 0 {
            n += 4;
            x >>= 4;
        }
        if x & 0x3 == 0 {
            n += 2;
            x >>= 2;
        }
        if x & 0x1 == 0 {
            n += 1;
        }
        n
    }

    #[inline(always)]
    fn reverse_bits_u32(value: u32) -> u32 {
        let mut x = value;
        let mut result = 0u32;
        for _ in 0..u32::BITS {
            result = (result << 1) | (x & 1);
            x >>= 1;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_zeros() {
        assert_eq!(GenericBitOps::leading_zeros_u64(0), 64);
        assert_eq!(GenericBitOps::leading_zeros_u64(1), 63);
        assert_eq!(GenericBitOps::leading_zeros_u64(0x00000000FFFFFFFF), 32);
        assert_eq!(GenericBitOps::leading_zeros_u64(1 << 63), 0);
        assert_eq!(GenericBitOps::leading_zeros_u64(u64::MAX), 0);

        assert_eq!(GenericBitOps::leading_zeros_u32(0), 32);
        assert_eq!(GenericBitOps::leading_zeros_u32(1), 31);
        assert_eq!(GenericBitOps::leading_zeros_u32(0x0000FFFF), 16);
        assert_eq!(GenericBitOps::leading_zeros_u32(1 << 31), 0);
    }

    #[test]
    fn test_trailing_zeros() {
        assert_eq!(GenericBitOps::trailing_zeros_u64(0), 64);
        assert_eq!(GenericBitOps::trailing_zeros_u64(1), 0);
        assert_eq!(GenericBitOps::trailing_zeros_u64(0xFFFFFFFF00000000), 32);
        assert_eq!(GenericBitOps::trailing_zeros_u64(1 << 63), 63);
        assert_eq!(GenericBitOps::trailing_zeros_u64(0b1011000), 3);

        assert_eq!(GenericBitOps::trailing_zeros_u32(0), 32);
        assert_eq!(GenericBitOps::trailing_zeros_u32(1), 0);
        assert_eq!(GenericBitOps::trailing_zeros_u32(0xFFFF0000), 16);
        assert_eq!(GenericBitOps::trailing_zeros_u32(1 << 31), 31);
    }

    #[test]
    fn test_reverse_bits() {
        assert_eq!(GenericBitOps::reverse_bits_u64(0), 0);
        assert_eq!(GenericBitOps::reverse_bits_u64(1), 1 << 63);
        assert_eq!(GenericBitOps::reverse_bits_u64(0x00000000FFFFFFFF), 0xFFFFFFFF00000000);
        assert_eq!(GenericBitOps::reverse_bits_u64(0x0123456789ABCDEF), 0xF7B3D591E6A2C480);

        assert_eq!(GenericBitOps::reverse_bits_u32(1), 0x80000000);
        assert_eq!(GenericBitOps::reverse_bits_u32(0b1101), 0xB0000000);
        assert_eq!(GenericBitOps::reverse_bits_u32(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_matches_core_intrinsics() {
        // every single-bit and single-zero-bit word, plus their neighbours
        for i in 0..64 {
            for value in [1u64 << i, !(1u64 << i), (1u64 << i) - 1, (1u64 << i) | 1] {
                assert_eq!(
                    GenericBitOps::leading_zeros_u64(value),
                    value.leading_zeros(),
                    "clz mismatch for {:#x}",
                    value
                );
                assert_eq!(
                    GenericBitOps::trailing_zeros_u64(value),
                    value.trailing_zeros(),
                    "ctz mismatch for {:#x}",
                    value
                );
                assert_eq!(
                    GenericBitOps::reverse_bits_u64(value),
                    value.reverse_bits(),
                    "rbit mismatch for {:#x}",
                    value
                );
            }
        }

        for i in 0..32 {
            for value in [1u32 << i, !(1u32 << i), (1u32 << i) - 1, (1u32 << i) | 1] {
                assert_eq!(GenericBitOps::leading_zeros_u32(value), value.leading_zeros());
                assert_eq!(GenericBitOps::trailing_zeros_u32(value), value.trailing_zeros());
                assert_eq!(GenericBitOps::reverse_bits_u32(value), value.reverse_bits());
            }
        }
    }
}
