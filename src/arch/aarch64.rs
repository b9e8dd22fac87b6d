//! ARM64 (AArch64) implementations
//!
//! AArch64 has dedicated `clz` and `rbit` instructions for both 64-bit (`x`) and 32-bit (`w`)
//! registers, but no trailing zero count. Trailing zeros are counted as the leading zeros of
//! the bit-reversed word, which costs exactly two instructions.
//!
//! `clz` is architecturally defined for a zero operand and returns the register width, so the
//! `rbit` + `clz` sequence returns the width for zero as well. No zero check is needed.

use super::BitOps;
use core::arch::asm;

/// ARM64 bit manipulation operations using `clz` and `rbit`
pub struct Arm64BitOps;

impl BitOps for Arm64BitOps {
    const NAME: &'static str = "aarch64";

    /// Count leading zeros using the ARM64 `clz` instruction
    #[inline(always)]
    fn leading_zeros_u64(value: u64) -> u32 {
        let result: u64;
        unsafe {
            asm!(
                "clz {r}, {v}",
                v = in(reg) value,
                r = lateout(reg) result,
                options(pure, nomem, nostack, preserves_flags)
            );
        }
        result as u32
    }

    /// Count trailing zeros using the ARM64 `rbit` + `clz` combination
    #[inline(always)]
    fn trailing_zeros_u64(value: u64) -> u32 {
        let result: u64;
        unsafe {
            asm!(
                "rbit {r}, {v}",
                "clz {r}, {r}",
                v = in(reg) value,
                r = out(reg) result,
                options(pure, nomem, nostack, preserves_flags)
            );
        }
        result as u32
    }

    /// Reverse bits using the ARM64 `rbit` instruction
    #[inline(always)]
    fn reverse_bits_u64(value: u64) -> u64 {
        let result: u64;
        unsafe {
            asm!(
                "rbit {r}, {v}",
                v = in(reg) value,
                r = lateout(reg) result,
                options(pure, nomem, nostack, preserves_flags)
            );
        }
        result
    }

    #[inline(always)]
    fn leading_zeros_u32(value: u32) -> u32 {
        let result: u32;
        unsafe {
            asm!(
                "clz {r:w}, {v:w}",
                v = in(reg) value,
                r = lateout(reg) result,
                options(pure, nomem, nostack, preserves_flags)
            );
        }
        result
    }

    #[inline(always)]
    fn trailing_zeros_u32(value: u32) -> u32 {
        let result: u32;
        unsafe {
            asm!(
                "rbit {r:w}, {v:w}",
                "clz {r:w}, {r:w}",
                v = in(reg) value,
                r = out(reg) result,
                options(pure, nomem, nostack, preserves_flags)
            );
        }
        result
    }

    #[inline(always)]
    fn reverse_bits_u32(value: u32) -> u32 {
        let result: u32;
        unsafe {
            asm!(
                "rbit {r:w}, {v:w}",
                v = in(reg) value,
                r = lateout(reg) result,
                options(pure, nomem, nostack, preserves_flags)
            );
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_zeros() {
        let value = 0x00000000FFFFFFFFu64;
        assert_eq!(Arm64BitOps::leading_zeros_u64(value), 32);
        assert_eq!(Arm64BitOps::leading_zeros_u64(0), 64);
        assert_eq!(Arm64BitOps::leading_zeros_u32(0x0000FFFF), 16);
        assert_eq!(Arm64BitOps::leading_zeros_u32(0), 32);
    }

    #[test]
    fn test_trailing_zeros() {
        let value = 0xFFFFFFFF00000000u64;
        assert_eq!(Arm64BitOps::trailing_zeros_u64(value), 32);
        assert_eq!(Arm64BitOps::trailing_zeros_u64(0), 64);
        assert_eq!(Arm64BitOps::trailing_zeros_u32(0xFFFF0000), 16);
        assert_eq!(Arm64BitOps::trailing_zeros_u32(0), 32);
    }

    #[test]
    fn test_reverse_bits() {
        assert_eq!(Arm64BitOps::reverse_bits_u64(1), 1 << 63);
        assert_eq!(Arm64BitOps::reverse_bits_u64(0x0123456789ABCDEF), 0xF7B3D591E6A2C480);
        assert_eq!(Arm64BitOps::reverse_bits_u32(1), 0x80000000);
        assert_eq!(Arm64BitOps::reverse_bits_u32(0b1101), 0xB0000000);
    }
}
