//! Core of the sable engine.
//!
//! Re-exports the engine crates under one roof:
//!
//! - [`storage`]: [`OptionalValue`](storage::OptionalValue),
//!   [`MultiValue`](storage::MultiValue) and compile-time
//!   [`TypeList`](storage::TypeList) selection.
//! - [`math`]: vectors, [`Matrix4x4`](math::Matrix4x4), camera transform builders and
//!   geometry values.
//! - [`renderer`]: cameras and quads handed to the drawing layer.
//! - [`simd`]: register types, behind the `simd` feature.

pub use lib_core as storage;
pub use lib_math as math;
pub use lib_renderer as renderer;
pub use lib_simd as simd;

pub use lib_core::{MultiValue, OptionalValue, StorageError, largest_of};
pub use lib_math::{Matrix4x4, Rect, Segment, TransformError, look_at, orthographic, perspective};

#[cfg(all(
    feature = "simd",
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
pub use lib_simd::{Register64, Register128};
