//! Opaque vector register types picked at build time.
//!
//! With the `simd` feature enabled, [`Register64`] and [`Register128`] name the native
//! 64 and 128 bit register types of the target's vector instruction family: SSE on
//! x86/x86_64, NEON on aarch64. With the feature disabled, or on any other target, the
//! names are not defined and consumers must gate on the same feature.
//!
//! No arithmetic lives here.

#[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
mod sse;
#[cfg(all(feature = "simd", any(target_arch = "x86", target_arch = "x86_64")))]
pub use sse::*;

#[cfg(all(feature = "simd", target_arch = "aarch64"))]
mod neon;
#[cfg(all(feature = "simd", target_arch = "aarch64"))]
pub use neon::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionSet {
    Sse,
    Neon,
    Disabled,
}

pub const ACTIVE: InstructionSet = if cfg!(all(
    feature = "simd",
    any(target_arch = "x86", target_arch = "x86_64")
)) {
    InstructionSet::Sse
} else if cfg!(all(feature = "simd", target_arch = "aarch64")) {
    InstructionSet::Neon
} else {
    InstructionSet::Disabled
};

impl InstructionSet {
    pub const fn has_registers(self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

/// A fixed-width register type.
pub trait Register: Copy + private::Sealed {
    const BITS: usize;

    fn zeroed() -> Self {
        // All-zero bits are a valid value of every register type.
        unsafe { std::mem::zeroed() }
    }
}

mod private {
    pub trait Sealed {}
}

#[cfg(all(
    feature = "simd",
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
mod impls {
    use super::{Register, Register64, Register128, private::Sealed};

    impl Sealed for Register64 {}
    impl Sealed for Register128 {}

    impl Register for Register64 {
        const BITS: usize = 64;
    }

    impl Register for Register128 {
        const BITS: usize = 128;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_matches_build() {
        assert_eq!(
            ACTIVE.has_registers(),
            cfg!(all(
                feature = "simd",
                any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
            ))
        );
    }

    #[cfg(all(
        feature = "simd",
        any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
    ))]
    #[test]
    fn widths_and_alignment() {
        assert_eq!(size_of::<Register64>() * 8, Register64::BITS);
        assert_eq!(size_of::<Register128>() * 8, Register128::BITS);
        assert_eq!(align_of::<Register64>(), 8);
        assert_eq!(align_of::<Register128>(), 16);
    }
}
