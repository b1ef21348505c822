use std::{
    mem::transmute,
    ops::{Mul, MulAssign},
};

use crate::{f32::FVec3, vec3};

/// A 4x4 `f32` transform, stored column-major as `cols[column][row]`.
///
/// Vectors are columns and are transformed as `M * v`, so translation lives in
/// `cols[3]`. The layout is `#[repr(C)]` and 64 bytes, ready to be copied into a
/// uniform buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4x4 {
    pub cols: [[f32; 4]; 4],
}

const _: () = assert!(size_of::<Matrix4x4>() == 64);

impl Matrix4x4 {
    pub const IDENTITY: Self = Self {
        cols: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    pub const ZERO: Self = Self {
        cols: [[0.0; 4]; 4],
    };

    pub const fn from_cols(cols: [[f32; 4]; 4]) -> Self {
        Self { cols }
    }

    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self { cols: rows }.transpose()
    }

    pub fn from_translation(translation: FVec3) -> Self {
        Self {
            cols: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [translation.x, translation.y, translation.z, 1.0],
            ],
        }
    }

    pub fn from_scale(scale: FVec3) -> Self {
        Self {
            cols: [
                [scale.x, 0.0, 0.0, 0.0],
                [0.0, scale.y, 0.0, 0.0],
                [0.0, 0.0, scale.z, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    pub const fn col(&self, idx: usize) -> [f32; 4] {
        self.cols[idx]
    }

    pub const fn row(&self, idx: usize) -> [f32; 4] {
        [
            self.cols[0][idx],
            self.cols[1][idx],
            self.cols[2][idx],
            self.cols[3][idx],
        ]
    }

    pub const fn transpose(self) -> Self {
        Self {
            cols: [self.row(0), self.row(1), self.row(2), self.row(3)],
        }
    }

    pub fn transform_vec4(&self, v: [f32; 4]) -> [f32; 4] {
        let mut result = [0.0; 4];
        for (col, scale) in self.cols.iter().zip(v) {
            for (out, entry) in result.iter_mut().zip(col) {
                *out += entry * scale;
            }
        }

        result
    }

    /// Transforms `point` with `w = 1` and divides by the resulting `w`.
    pub fn project_point(&self, point: FVec3) -> FVec3 {
        let [x, y, z, w] = self.transform_vec4([point.x, point.y, point.z, 1.0]);

        vec3!(x / w, y / w, z / w)
    }

    /// Transforms `dir` with `w = 0`, ignoring translation.
    pub fn transform_direction(&self, dir: FVec3) -> FVec3 {
        let [x, y, z, _] = self.transform_vec4([dir.x, dir.y, dir.z, 0.0]);

        vec3!(x, y, z)
    }

    pub fn is_finite(&self) -> bool {
        self.cols.iter().flatten().all(|x| x.is_finite())
    }

    pub fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.cols
            .iter()
            .flatten()
            .zip(other.cols.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    pub fn as_bytes(&self) -> &[u8; 64] {
        unsafe { transmute::<&Matrix4x4, &[u8; 64]>(self) }
    }
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Matrix4x4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self {
            cols: rhs.cols.map(|col| self.transform_vec4(col)),
        }
    }
}

impl MulAssign for Matrix4x4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl From<[[f32; 4]; 4]> for Matrix4x4 {
    fn from(cols: [[f32; 4]; 4]) -> Self {
        Self { cols }
    }
}

impl From<Matrix4x4> for [[f32; 4]; 4] {
    fn from(value: Matrix4x4) -> Self {
        value.cols
    }
}
