//! Pixel-space geometry shared by the drag tracker and the impact classifier.

use glam::Vec2;

/// Axis-aligned box in viewport pixels, as reported by a bounding-box query.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Convert a viewport point into coordinates relative to this box's
    /// top-left corner.
    #[inline]
    pub fn to_local(&self, client: Vec2) -> Vec2 {
        client - self.origin()
    }
}

/// Corners of an axis-aligned square, ordered top-left, top-right,
/// bottom-left, bottom-right.
#[inline]
pub fn square_corners(center: Vec2, half_size: f32) -> [Vec2; 4] {
    [
        Vec2::new(center.x - half_size, center.y - half_size),
        Vec2::new(center.x + half_size, center.y - half_size),
        Vec2::new(center.x - half_size, center.y + half_size),
        Vec2::new(center.x + half_size, center.y + half_size),
    ]
}
