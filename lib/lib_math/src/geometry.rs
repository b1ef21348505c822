use crate::{f32::FVec2, vec2};

/// Two points, e.g. the ends of a line draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: FVec2,
    pub end: FVec2,
}

/// An axis-aligned rectangle given by its corners.
///
/// Drawing code expects `min <= max` on both axes. This is not enforced on
/// construction; see [`Rect::is_well_formed`] and [`Rect::normalized`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: FVec2,
    pub max: FVec2,
}

impl Segment {
    pub fn new(start: FVec2, end: FVec2) -> Self {
        Self { start, end }
    }

    pub fn delta(&self) -> FVec2 {
        self.end - self.start
    }

    pub fn length(&self) -> f32 {
        self.delta().length()
    }

    pub fn midpoint(&self) -> FVec2 {
        (self.start + self.end) * 0.5
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.start, self.end).normalized()
    }
}

impl Rect {
    pub fn new(min: FVec2, max: FVec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_extents(center: FVec2, extents: FVec2) -> Self {
        Self {
            min: center - extents,
            max: center + extents,
        }
    }

    pub fn center(&self) -> FVec2 {
        (self.min + self.max) * 0.5
    }

    /// Half the size.
    pub fn extents(&self) -> FVec2 {
        self.size() * 0.5
    }

    pub fn size(&self) -> FVec2 {
        self.max - self.min
    }

    pub fn is_well_formed(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    /// Swaps corner components where `min` exceeds `max`.
    pub fn normalized(&self) -> Self {
        Self {
            min: vec2!(self.min.x.min(self.max.x), self.min.y.min(self.max.y)),
            max: vec2!(self.min.x.max(self.max.x), self.min.y.max(self.max.y)),
        }
    }

    /// Edges are inclusive.
    pub fn contains(&self, point: FVec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}
