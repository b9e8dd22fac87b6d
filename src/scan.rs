//! Bit scan and reversal as methods on the unsigned integer types.
//! Dispatches to [`ArchBitOps`], so the methods use native instructions where the build target
//! has them.

use crate::arch::{ArchBitOps, BitOps};

/// Leading zero count, trailing zero count and bit reversal on fixed-width unsigned integers.
///
/// The method names follow the instruction mnemonics, because `reverse_bits` is already taken
/// by an inherent method of the primitive types.
pub trait BitScan: Sized {
    /// Count the most-significant zero bits before the highest set bit.
    /// Returns the bit width of `Self` for zero.
    fn clz(self) -> u32;

    /// Count the least-significant zero bits before the lowest set bit.
    /// Returns the bit width of `Self` for zero.
    fn ctz(self) -> u32;

    /// Reverse the bit order across the full width of `Self`.
    fn rbit(self) -> Self;
}

macro_rules! impl_bit_scan {
    ($t:ty, $clz:ident, $ctz:ident, $rbit:ident) => {
        impl BitScan for $t {
            #[inline(always)]
            fn clz(self) -> u32 {
                ArchBitOps::$clz(self)
            }

            #[inline(always)]
            fn ctz(self) -> u32 {
                ArchBitOps::$ctz(self)
            }

            #[inline(always)]
            fn rbit(self) -> Self {
                ArchBitOps::$rbit(self)
            }
        }
    };
}

impl_bit_scan!(u64, leading_zeros_u64, trailing_zeros_u64, reverse_bits_u64);
impl_bit_scan!(u32, leading_zeros_u32, trailing_zeros_u32, reverse_bits_u32);
