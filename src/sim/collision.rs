//! Collision detection
//!
//! Everything in the runner is an axis-aligned box, so a single strict
//! interval-overlap test covers player vs obstacle and player vs hazard.
//! There is no swept test: an entity moving more than its own width plus the
//! player's width in one frame can tunnel through.

use super::rect::Rect;

/// Check whether two boxes overlap
///
/// Boxes that only share an edge do not overlap.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_contained() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    #[test]
    fn test_separated() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &Rect::new(20.0, 0.0, 10.0, 10.0)));
        assert!(!overlaps(&a, &Rect::new(0.0, 20.0, 10.0, 10.0)));
        // Overlapping on x only
        assert!(!overlaps(&a, &Rect::new(5.0, 30.0, 10.0, 10.0)));
    }

    #[test]
    fn test_shared_edge_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!overlaps(&a, &Rect::new(0.0, 10.0, 10.0, 10.0)));
        assert!(!overlaps(&a, &Rect::new(10.0, 10.0, 10.0, 10.0)));
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (-500.0f32..500.0, -500.0f32..500.0, 0.5f32..200.0, 0.5f32..200.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }

        #[test]
        fn prop_right_neighbour_never_overlaps(a in rect_strategy(), w in 0.5f32..200.0, dy in -50.0f32..50.0) {
            let b = Rect::new(a.right(), a.top() + dy, w, a.size.y);
            prop_assert!(!overlaps(&a, &b));
        }

        #[test]
        fn prop_box_overlaps_itself(a in rect_strategy()) {
            prop_assert!(overlaps(&a, &a));
        }
    }
}
