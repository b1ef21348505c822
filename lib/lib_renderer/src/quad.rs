use lib_math::{
    Rect,
    f32::{FVec2, FVec3},
    vec3,
};

use crate::Camera;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub center: FVec2,
    pub extents: FVec2,
    pub sprite: Sprite,
    /// Draw depth, `0.0` nearest. Only `[0, 1]` is inside a [`Camera`]'s view.
    pub layer: f32,
}

/// A region of the texture atlas, in UV units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub center: FVec2,
    pub extents: FVec2,
}

impl Quad {
    pub fn bounds(&self) -> Rect {
        Rect::from_center_extents(self.center, self.extents)
    }

    /// World position of the quad center, with the layer as `z`.
    pub fn position(&self) -> FVec3 {
        vec3!(self.center.x, self.center.y, self.layer)
    }

    pub fn is_visible(&self, cam: &Camera, aspect: f32) -> bool {
        self.overlaps(&cam.visible_rect(aspect))
    }

    fn overlaps(&self, view: &Rect) -> bool {
        (0.0..=1.0).contains(&self.layer) && self.bounds().intersects(view)
    }
}

impl Sprite {
    pub fn uv_rect(&self) -> Rect {
        Rect::from_center_extents(self.center, self.extents)
    }
}

/// Keeps the quads that overlap the camera's view and depth range, in order.
pub fn cull_quads<'a>(
    quads: &'a [Quad],
    cam: &'a Camera,
    aspect: f32,
) -> impl Iterator<Item = &'a Quad> + 'a {
    let view = cam.visible_rect(aspect);

    quads
        .iter()
        .filter(move |quad| quad.overlaps(&view))
}
