//! Axis-aligned collision primitives
//!
//! Everything on the board is a rectangle, so collision detection is a single
//! AABB overlap test plus the normalized impact offset that gives paddle
//! rebounds their angle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box, positioned by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Inclusive overlap test: touching edges count as contact.
    /// Symmetric in its arguments.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        // Separated iff one box lies strictly beyond the other on some axis
        if other.pos.x > self.right() || self.pos.x > other.right() {
            return false;
        }
        if other.bottom() < self.pos.y || self.bottom() < other.pos.y {
            return false;
        }
        true
    }
}

/// Normalized vertical offset of an impact point from the paddle's middle.
///
/// 0 at the paddle's exact center, -1/+1 at the extreme top/bottom edges.
/// Clamped so a contact registered beyond the paddle face (a tunneling
/// artifact at high speeds) cannot rebound steeper than 45 degrees.
pub fn impact_offset(ball_mid_y: f32, paddle_mid_y: f32, paddle_height: f32) -> f32 {
    ((ball_mid_y - paddle_mid_y) / (paddle_height / 2.0)).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn aabb(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlapping_boxes() {
        let a = aabb(0.0, 0.0, 20.0, 80.0);
        let b = aabb(15.0, 70.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_separated_boxes() {
        let a = aabb(0.0, 0.0, 20.0, 80.0);

        // Clear of the right edge
        assert!(!a.overlaps(&aabb(30.0, 0.0, 10.0, 10.0)));
        // Clear below
        assert!(!a.overlaps(&aabb(0.0, 100.0, 10.0, 10.0)));
    }

    #[test]
    fn test_touching_edges_are_contact() {
        let a = aabb(0.0, 0.0, 20.0, 80.0);

        // Right edge of `a` exactly meets left edge of `b`
        assert!(a.overlaps(&aabb(20.0, 0.0, 10.0, 10.0)));
        // Bottom edge of `a` exactly meets top edge of `b`
        assert!(a.overlaps(&aabb(0.0, 80.0, 10.0, 10.0)));
    }

    #[test]
    fn test_containment_is_overlap() {
        let outer = aabb(0.0, 0.0, 100.0, 100.0);
        let inner = aabb(40.0, 40.0, 10.0, 10.0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_impact_offset_center_is_zero() {
        assert_eq!(impact_offset(200.0, 200.0, 80.0), 0.0);
    }

    #[test]
    fn test_impact_offset_edges_are_unit() {
        // Top edge
        assert_eq!(impact_offset(160.0, 200.0, 80.0), -1.0);
        // Bottom edge
        assert_eq!(impact_offset(240.0, 200.0, 80.0), 1.0);
    }

    #[test]
    fn test_impact_offset_clamps_beyond_face() {
        assert_eq!(impact_offset(300.0, 200.0, 80.0), 1.0);
        assert_eq!(impact_offset(100.0, 200.0, 80.0), -1.0);
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0,
            aw in 0.1f32..200.0, ah in 0.1f32..200.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0,
            bw in 0.1f32..200.0, bh in 0.1f32..200.0,
        ) {
            let a = aabb(ax, ay, aw, ah);
            let b = aabb(bx, by, bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_overlap_is_reflexive(
            x in -500.0f32..500.0, y in -500.0f32..500.0,
            w in 0.1f32..200.0, h in 0.1f32..200.0,
        ) {
            let a = aabb(x, y, w, h);
            prop_assert!(a.overlaps(&a));
        }

        #[test]
        fn prop_impact_offset_stays_in_unit_range(
            ball_mid in -1000.0f32..1000.0,
            paddle_mid in -1000.0f32..1000.0,
            height in 1.0f32..500.0,
        ) {
            let offset = impact_offset(ball_mid, paddle_mid, height);
            prop_assert!((-1.0..=1.0).contains(&offset));
        }
    }
}
