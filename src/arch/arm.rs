//! 32-bit ARM implementations
//!
//! `clz` is available since ARMv5T and `rbit` since ARMv6T2. Stable Rust does not expose the
//! ARM architecture revision as a `target_feature`, so the explicit instructions are opt-in
//! through the `arm-v6t2` cargo feature. Without it, the compiler builtins are used, which
//! lower to `clz`/`rbit` on ARMv6T2 and to a correct instruction sequence on older cores.
//!
//! Both instructions operate on 32-bit registers; the 64-bit operations are composed from the
//! two halves of the word.

use super::BitOps;
#[cfg(feature = "arm-v6t2")]
use core::arch::asm;

/// 32-bit ARM bit manipulation operations using `clz` and `rbit`, explicitly with the
/// `arm-v6t2` feature or through the compiler builtins otherwise
pub struct ArmBitOps;

impl BitOps for ArmBitOps {
    const NAME: &'static str = "arm";

    #[inline(always)]
    fn leading_zeros_u64(value: u64) -> u32 {
        let high = (value >> 32) as u32;
        if high != 0 {
            Self::leading_zeros_u32(high)
        } else {
            32 + Self::leading_zeros_u32(value as u32)
        }
    }

    #[inline(always)]
    fn trailing_zeros_u64(value: u64) -> u32 {
        let low = value as u32;
        if low != 0 {
            Self::trailing_zeros_u32(low)
        } else {
            32 + Self::trailing_zeros_u32((value >> 32) as u32)
        }
    }

    #[inline(always)]
    fn reverse_bits_u64(value: u64) -> u64 {
        let low = Self::reverse_bits_u32(value as u32) as u64;
        let high = Self::reverse_bits_u32((value >> 32) as u32) as u64;
        (low << 32) | high
    }

    /// Count leading zeros using the ARM `clz` instruction. Returns 32 for zero.
    #[inline(always)]
    fn leading_zeros_u32(value: u32) -> u32 {
        #[cfg(not(feature = "arm-v6t2"))]
        {
            value.leading_zeros()
        }

        #[cfg(feature = "arm-v6t2")]
        {
            let result: u32;
            unsafe {
                asm!(
                    "clz {r}, {v}",
                    v = in(reg) value,
                    r = lateout(reg) result,
                    options(pure, nomem, nostack, preserves_flags)
                );
            }
            result
        }
    }

    /// Count trailing zeros using the ARM `rbit` + `clz` combination
    #[inline(always)]
    fn trailing_zeros_u32(value: u32) -> u32 {
        #[cfg(not(feature = "arm-v6t2"))]
        {
            value.trailing_zeros()
        }

        #[cfg(feature = "arm-v6t2")]
        {
            let result: u32;
            unsafe {
                asm!(
                    "rbit {r}, {v}",
                    "clz {r}, {r}",
                    v = in(reg) value,
                    r = out(reg) result,
                    options(pure, nomem, nostack, preserves_flags)
                );
            }
            result
        }
    }

    /// Reverse bits using the ARM `rbit` instruction
    #[inline(always)]
    fn reverse_bits_u32(value: u32) -> u32 {
        #[cfg(not(feature = "arm-v6t2"))]
        {
            value.reverse_bits()
        }

        #[cfg(feature = "arm-v6t2")]
        {
            let result: u32;
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
    }
}
