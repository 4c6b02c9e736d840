//! Axis-aligned rectangle geometry
//!
//! Screen space: origin at top-left, +y points down, so `bottom()` is the
//! edge that rests on the ground line.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// True once the trailing (right) edge has passed the left viewport edge
    #[inline]
    pub fn is_left_of(&self, x: f32) -> bool {
        self.right() < x
    }

    /// True once the leading (left) edge has passed the right viewport edge
    #[inline]
    pub fn is_right_of(&self, x: f32) -> bool {
        self.left() > x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
    }

    #[test]
    fn test_offscreen_checks() {
        let r = Rect::new(-30.0, 0.0, 30.0, 10.0);
        // Right edge exactly at 0 is still touching the viewport
        assert!(!r.is_left_of(0.0));
        let r = Rect::new(-30.5, 0.0, 30.0, 10.0);
        assert!(r.is_left_of(0.0));

        let r = Rect::new(800.0, 0.0, 30.0, 10.0);
        assert!(!r.is_right_of(800.0));
        assert!(Rect::new(800.1, 0.0, 30.0, 10.0).is_right_of(800.0));
    }
}
