//! Architecture-specific implementations
//!
//! This module contains one implementation of [`BitOps`] per supported processor family and a
//! portable fallback. The implementation for the build target is exposed as [`ArchBitOps`].
//! Currently supports ARM64 (aarch64), 32-bit ARM and x86_64.
//!
//! Enabling the `portable` feature selects [`GenericBitOps`] on every target. On 32-bit ARM,
//! the `arm-v6t2` feature switches from compiler builtins to explicit `clz`/`rbit` assembly.

#[cfg(target_arch = "x86_64")]
pub mod x86_64;

#[cfg(target_arch = "aarch64")]
pub mod aarch64;

#[cfg(target_arch = "arm")]
pub mod arm;

/// Generic fallback implementations for unsupported architectures
pub mod generic;

pub use generic::GenericBitOps;

/// Trait for architecture-specific bit manipulation operations.
///
/// All operations are total. For a zero operand, both zero counts return the full bit width of
/// the operand. Every implementation must agree with [`GenericBitOps`] on every input.
pub trait BitOps {
    /// Short name of the implementation, used in test diagnostics and benchmark labels.
    const NAME: &'static str;

    /// Count leading zeros of a 64-bit word. Returns 64 for zero.
    fn leading_zeros_u64(value: u64) -> u32;

    /// Count trailing zeros of a 64-bit word. Returns 64 for zero.
    fn trailing_zeros_u64(value: u64) -> u32;

    /// Reverse the bit order of a 64-bit word.
    fn reverse_bits_u64(value: u64) -> u64;

    /// Count leading zeros of a 32-bit word. Returns 32 for zero.
    fn leading_zeros_u32(value: u32) -> u32;

    /// Count trailing zeros of a 32-bit word. Returns 32 for zero.
    fn trailing_zeros_u32(value: u32) -> u32;

    /// Reverse the bit order of a 32-bit word.
    fn reverse_bits_u32(value: u32) -> u32;
}

// Select the appropriate implementation based on the target architecture
#[cfg(all(target_arch = "x86_64", not(feature = "portable")))]
/// Architecture-specific bit operations implementation.
pub type ArchBitOps = x86_64::X86BitOps;

#[cfg(all(target_arch = "aarch64", not(feature = "portable")))]
/// Architecture-specific bit operations implementation.
pub type ArchBitOps = aarch64::Arm64BitOps;

#[cfg(all(target_arch = "arm", not(feature = "portable")))]
/// Architecture-specific bit operations implementation.
pub type ArchBitOps = arm::ArmBitOps;

#[cfg(any(
    feature = "portable",
    not(any(
        target_arch = "x86_64",
        target_arch = "aarch64",
        target_arch = "arm"
    ))
))]
/// Architecture-specific bit operations implementation.
pub type ArchBitOps = generic::GenericBitOps;
