//! x86_64 implementations
//!
//! Leading and trailing zeros use the `lzcnt` (LZCNT extension) and `tzcnt` (BMI1) instructions
//! when the corresponding target features are enabled. Both define a zero operand to return the
//! operand size. Without them, the compiler builtins are used, which emit `bsr`/`bsf` with a
//! zero check.
//!
//! x86 has no bit reversal instruction, so reversal always goes through the compiler builtin.

use super::BitOps;

#[cfg(target_feature = "bmi1")]
use core::arch::x86_64::{_tzcnt_u32, _tzcnt_u64};
#[cfg(target_feature = "lzcnt")]
use core::arch::x86_64::{_lzcnt_u32, _lzcnt_u64};

/// x86_64 bit manipulation operations
pub struct X86BitOps;

impl BitOps for X86BitOps {
    const NAME: &'static str = "x86_64";

    #[inline(always)]
    fn leading_zeros_u64(value: u64) -> u32 {
        #[cfg(target_feature = "lzcnt")]
        unsafe {
            _lzcnt_u64(value) as u32
        }

        #[cfg(not(target_feature = "lzcnt"))]
        {
            value.leading_zeros()
        }
    }

    #[inline(always)]
    fn trailing_zeros_u64(value: u64) -> u32 {
        #[cfg(target_feature = "bmi1")]
        unsafe {
            _tzcnt_u64(value) as u32
        }

        #[cfg(not(target_feature = "bmi1"))]
        {
            value.trailing_zeros()
        }
    }

    #[inline(always)]
    fn reverse_bits_u64(value: u64) -> u64 {
        value.reverse_bits()
    }

    #[inline(always)]
    fn leading_zeros_u32(value: u32) -> u32 {
        #[cfg(target_feature = "lzcnt")]
        unsafe {
            _lzcnt_u32(value)
        }

        #[cfg(not(target_feature = "lzcnt"))]
        {
            value.leading_zeros()
        }
    }

    #[inline(always)]
    fn trailing_zeros_u32(value: u32) -> u32 {
        #[cfg(target_feature = "bmi1")]
        unsafe {
            _tzcnt_u32(value)
        }

        #[cfg(not(target_feature = "bmi1"))]
        {
            value.trailing_zeros()
        }
    }

    #[inline(always)]
    fn reverse_bits_u32(value: u32) -> u32 {
        value.reverse_bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_full_width() {
        assert_eq!(X86BitOps::leading_zeros_u64(0), 64);
        assert_eq!(X86BitOps::trailing_zeros_u64(0), 64);
        assert_eq!(X86BitOps::leading_zeros_u32(0), 32);
        assert_eq!(X86BitOps::trailing_zeros_u32(0), 32);
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(X86BitOps::leading_zeros_u64(u64::MAX >> 3), 3);
        assert_eq!(X86BitOps::leading_zeros_u32(u32::MAX >> 3), 3);
    }

    #[test]
    fn test_trailing_zeros() {
        assert_eq!(X86BitOps::trailing_zeros_u64(u64::MAX << 5), 5);
        assert_eq!(X86BitOps::trailing_zeros_u32(u32::MAX << 5), 5);
    }
}
