use std::mem::transmute;

use lib_math::{
    Matrix4x4, Rect, TransformResult,
    f32::{FVec2, FVec3},
    look_at, orthographic_rect, perspective, try_look_at, try_perspective, vec2, vec3,
};

/// 2D orthographic camera. `ortho_size` is half the visible height in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub center: FVec2,
    pub ortho_size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera3d {
    pub eye: FVec3,
    pub target: FVec3,
    pub up: FVec3,
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraUniform {
    pub view_projection: Matrix4x4,
}

impl Camera {
    pub fn visible_rect(&self, aspect: f32) -> Rect {
        Rect::from_center_extents(self.center, vec2!(self.ortho_size * aspect, self.ortho_size))
    }

    /// Quad layers in `[0, 1]` map straight to depth, see [`Quad::position`].
    ///
    /// [`Quad::position`]: crate::Quad::position
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn view_projection(&self, aspect: f32) -> Matrix4x4 {
        orthographic_rect(self.visible_rect(aspect), 0.0, 1.0)
    }

    pub fn uniform(&self, aspect: f32) -> CameraUniform {
        CameraUniform {
            view_projection: self.view_projection(aspect),
        }
    }
}

impl Camera3d {
    pub fn view(&self) -> Matrix4x4 {
        look_at(self.eye, self.up, self.target)
    }

    /// The symmetric projection, narrowed on x for the target's `aspect`.
    pub fn projection(&self, aspect: f32) -> Matrix4x4 {
        Matrix4x4::from_scale(vec3!(1.0 / aspect, 1.0, 1.0))
            * perspective(self.fov_degrees, self.near, self.far)
    }

    #[tracing::instrument(level = "trace", skip(self))]
    pub fn view_projection(&self, aspect: f32) -> Matrix4x4 {
        self.projection(aspect) * self.view()
    }

    pub fn try_view_projection(&self, aspect: f32) -> TransformResult<Matrix4x4> {
        let view = try_look_at(self.eye, self.up, self.target)?;
        let projection = try_perspective(self.fov_degrees, self.near, self.far)?;

        Ok(Matrix4x4::from_scale(vec3!(1.0 / aspect, 1.0, 1.0)) * projection * view)
    }

    pub fn uniform(&self, aspect: f32) -> CameraUniform {
        CameraUniform {
            view_projection: self.view_projection(aspect),
        }
    }
}

impl CameraUniform {
    pub fn as_bytes(&self) -> &[u8; size_of::<CameraUniform>()] {
        unsafe { transmute::<&CameraUniform, &[u8; size_of::<CameraUniform>()]>(self) }
    }
}
