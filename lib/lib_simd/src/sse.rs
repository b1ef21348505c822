#[cfg(target_arch = "x86")]
use std::arch::x86::__m128;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::__m128;

/// 64 bits, the MMX register width. Rust exposes no stable `__m64`, so this is an
/// 8-byte aligned opaque word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C, align(8))]
pub struct Register64(u64);

pub type Register128 = __m128;

impl Register64 {
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    pub const fn to_bits(self) -> u64 {
        self.0
    }
}
