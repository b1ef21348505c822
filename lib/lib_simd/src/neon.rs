use std::arch::aarch64::{float32x2_t, float32x4_t};

pub type Register64 = float32x2_t;
pub type Register128 = float32x4_t;
