#![no_std]
#![warn(missing_docs)]

//! This crate provides count-leading-zeros (CLZ), count-trailing-zeros (CTZ) and bit reversal
//! (RBIT) for 32-bit and 64-bit unsigned integers, with a native implementation per processor
//! family and a portable fallback that computes identical results.
//!
//! # Usage
//! The free functions and the [`BitScan`] methods dispatch to [`ArchBitOps`], the
//! implementation selected for the build target:
//!
//! ```
//! use bitscan::{count_trailing_zeros_u64, reverse_bits_u32, BitScan};
//!
//! assert_eq!(count_trailing_zeros_u64(0x8000_0000_0000_0000), 63);
//! assert_eq!(reverse_bits_u32(1), 0x8000_0000);
//! assert_eq!(1u64.clz(), 63);
//! ```
//!
//! # Zero operands
//! All functions are total. For a zero operand, both zero counts return the full bit width
//! (32 or 64). This is a convention of the crate, and every native path is checked to agree
//! with it: ARM `clz` returns the register width for zero, and x86 `lzcnt`/`tzcnt` return the
//! operand size.
//!
//! # Implementations
//!  - AArch64 (`Arm64BitOps`): `clz` and `rbit`; trailing zeros are `rbit` followed by `clz`.
//!  - 32-bit ARM (`ArmBitOps`): the same instructions on 32-bit registers, with 64-bit words
//!    handled as two halves. Explicit assembly with the `arm-v6t2` feature, compiler builtins
//!    otherwise.
//!  - x86_64 (`X86BitOps`): `lzcnt` and `tzcnt` if the `lzcnt` resp. `bmi1` target features
//!    are enabled, otherwise compiler builtins.
//!  - [Generic][arch::GenericBitOps]: binary search for the zero counts and a bit-by-bit loop
//!    for the reversal. Used on every other target, and on all targets with the `portable`
//!    feature.
//!
//! Selection happens at compile time. There is no runtime feature detection.
//!
//! # Safety
//! The only unsafe code is inline assembly and target-feature intrinsics. Neither reads or
//! writes memory, and both are defined for every input.

pub use arch::{ArchBitOps, BitOps};
pub use scan::BitScan;

pub mod arch;
mod scan;

/// Count leading zeros of a 64-bit word. Returns 64 for zero.
#[must_use]
#[inline(always)]
pub fn count_leading_zeros_u64(value: u64) -> u32 {
    ArchBitOps::leading_zeros_u64(value)
}

/// Count trailing zeros of a 64-bit word. Returns 64 for zero.
#[must_use]
#[inline(always)]
pub fn count_trailing_zeros_u64(value: u64) -> u32 {
    ArchBitOps::trailing_zeros_u64(value)
}

/// Reverse the bit order of a 64-bit word, so that bit 0 becomes bit 63 and vice versa.
#[must_use]
#[inline(always)]
pub fn reverse_bits_u64(value: u64) -> u64 {
    ArchBitOps::reverse_bits_u64(value)
}

/// Count leading zeros of a 32-bit word. Returns 32 for zero.
#[must_use]
#[inline(always)]
pub fn count_leading_zeros_u32(value: u32) -> u32 {
    ArchBitOps::leading_zeros_u32(value)
}

/// Count trailing zeros of a 32-bit word. Returns 32 for zero.
#[must_use]
#[inline(always)]
pub fn count_trailing_zeros_u32(value: u32) -> u32 {
    ArchBitOps::trailing_zeros_u32(value)
}

/// Reverse the bit order of a 32-bit word, so that bit 0 becomes bit 31 and vice versa.
#[must_use]
#[inline(always)]
pub fn reverse_bits_u32(value: u32) -> u32 {
    ArchBitOps::reverse_bits_u32(value)
}
