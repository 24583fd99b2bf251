/// Pixel rectangles for viewport layout.
///
/// Origin is the top-left corner of the host container, Y grows downward.

use serde::{Deserialize, Serialize};

/// Size of the host container in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ContainerSize {
    pub width: u32,
    pub height: u32,
}

impl ContainerSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The whole container as a rectangle at the origin.
    pub fn bounds(&self) -> ScreenRect {
        ScreenRect::new(0, 0, self.width, self.height)
    }
}

/// Axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScreenRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ScreenRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn right(&self) -> u64 {
        self.x as u64 + self.width as u64
    }

    pub fn bottom(&self) -> u64 {
        self.y as u64 + self.height as u64
    }

    /// Width over height; 1.0 for an empty rectangle.
    pub fn aspect_ratio(&self) -> f32 {
        if self.is_empty() {
            1.0
        } else {
            self.width as f32 / self.height as f32
        }
    }

    pub fn contains_point(&self, x: u32, y: u32) -> bool {
        (x as u64) >= self.x as u64
            && (x as u64) < self.right()
            && (y as u64) >= self.y as u64
            && (y as u64) < self.bottom()
    }

    /// `other` lies entirely inside `self`.
    pub fn contains(&self, other: &ScreenRect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Overlapping rectangle, or `None` when the two do not overlap.
    pub fn intersection(&self, other: &ScreenRect) -> Option<ScreenRect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right <= left as u64 || bottom <= top as u64 {
            return None;
        }
        Some(ScreenRect::new(
            left,
            top,
            (right - left as u64) as u32,
            (bottom - top as u64) as u32,
        ))
    }

    pub fn overlap_area(&self, other: &ScreenRect) -> u64 {
        self.intersection(other).map_or(0, |rect| rect.area())
    }
}

#[cfg(test)]
#[path = "screen_rect_tests.rs"]
mod tests;
