//! Engine math: `ggmath` vectors, a column-major [`Matrix4x4`], camera transform
//! builders and the plain geometry values drawing code consumes.

pub use ggmath::*;

mod error;
mod geometry;
mod matrix;
mod transform;
pub use error::*;
pub use geometry::*;
pub use matrix::*;
pub use transform::*;

pub mod f32 {
    use ggmath::{Vec2, Vec3, Vec4};

    pub type FVec2 = Vec2<f32>;
    pub type FVec3 = Vec3<f32>;
    pub type FVec4 = Vec4<f32>;
}
