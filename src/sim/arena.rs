//! Static arena geometry
//!
//! Computed once from the viewport size at load and immutable afterwards.
//! The side walls leave a goal mouth spanning the middle third of each edge,
//! and the goal sensors sit far enough past the mouths that the puck is
//! fully off-court when one fires.

use glam::Vec2;

use crate::tuning::Tuning;

/// Which side of the court a goal belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalSide {
    Left,
    Right,
}

impl GoalSide {
    pub fn opposite(self) -> Self {
        match self {
            GoalSide::Left => GoalSide::Right,
            GoalSide::Right => GoalSide::Left,
        }
    }
}

/// An axis-aligned slab (center plus half-extents)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slab {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Slab {
    fn new(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self {
            center: Vec2::new(cx, cy),
            half_extents: Vec2::new(w / 2.0, h / 2.0),
        }
    }
}

/// The court: bounding walls, goal sensors, and puck reset points
#[derive(Debug, Clone)]
pub struct ArenaLayout {
    pub width: f32,
    pub height: f32,
    /// Left/right top-half, left/right bottom-half, top, bottom
    pub walls: [Slab; 6],
    pub left_goal: Slab,
    pub right_goal: Slab,
    pub left_reset: Vec2,
    pub right_reset: Vec2,
}

impl ArenaLayout {
    pub fn new(width: f32, height: f32, tuning: &Tuning) -> Self {
        let (w, h) = (width, height);
        let inset = tuning.wall_inset;
        let goal_offset = tuning.puck_radius * 3.0;

        // Side walls are viewport-sized slabs shifted mostly off-screen so
        // only their inner edge matters; the gap between the top-half and
        // bottom-half pairs is the goal mouth.
        let walls = [
            Slab::new(-w / 2.0 + inset, h / 6.0, w, h / 3.0),
            Slab::new(3.0 * w / 2.0 - inset, h / 6.0, w, h / 3.0),
            Slab::new(-w / 2.0 + inset, 5.0 * h / 6.0, w, h / 3.0),
            Slab::new(3.0 * w / 2.0 - inset, 5.0 * h / 6.0, w, h / 3.0),
            Slab::new(w / 2.0, -h / 2.0 + inset, 3.0 * w, h),
            Slab::new(w / 2.0, 3.0 * h / 2.0 - inset, 3.0 * w, h),
        ];

        let left_goal = Slab::new(-w / 2.0 - goal_offset, h / 2.0, w, h / 3.0);
        let right_goal = Slab::new(3.0 * w / 2.0 + goal_offset, h / 2.0, w, h / 3.0);

        Self {
            width,
            height,
            walls,
            left_goal,
            right_goal,
            left_reset: Vec2::new(w / 4.0, h / 2.0),
            right_reset: Vec2::new(3.0 * w / 4.0, h / 2.0),
        }
    }

    /// Puck reset point on the given side of the court
    pub fn reset_point(&self, side: GoalSide) -> Vec2 {
        match side {
            GoalSide::Left => self.left_reset,
            GoalSide::Right => self.right_reset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ArenaLayout {
        ArenaLayout::new(1200.0, 900.0, &Tuning::default())
    }

    #[test]
    fn test_goal_mouth_spans_middle_third() {
        let l = layout();
        // Top-half side walls end at h/3, bottom-half walls start at 2h/3
        let top_half = l.walls[0];
        let bottom_half = l.walls[2];
        assert_eq!(top_half.center.y + top_half.half_extents.y, 300.0);
        assert_eq!(bottom_half.center.y - bottom_half.half_extents.y, 600.0);
    }

    #[test]
    fn test_side_walls_flush_with_viewport() {
        let l = layout();
        // Inner edge of the left slabs sits at x=0, right slabs at x=w
        assert_eq!(l.walls[0].center.x + l.walls[0].half_extents.x, 0.0);
        assert_eq!(l.walls[1].center.x - l.walls[1].half_extents.x, 1200.0);
    }

    #[test]
    fn test_goal_sensors_off_court() {
        let l = layout();
        let left_inner_edge = l.left_goal.center.x + l.left_goal.half_extents.x;
        let right_inner_edge = l.right_goal.center.x - l.right_goal.half_extents.x;
        assert!(left_inner_edge < 0.0);
        assert!(right_inner_edge > l.width);
    }

    #[test]
    fn test_reset_points_at_quarter_lines() {
        let l = layout();
        assert_eq!(l.reset_point(GoalSide::Left), Vec2::new(300.0, 450.0));
        assert_eq!(l.reset_point(GoalSide::Right), Vec2::new(900.0, 450.0));
        assert_eq!(l.reset_point(GoalSide::Left.opposite()), l.right_reset);
    }

    #[test]
    fn test_inset_moves_walls_inward() {
        let mut tuning = Tuning::default();
        tuning.wall_inset = 10.0;
        let l = ArenaLayout::new(1200.0, 900.0, &tuning);
        assert_eq!(l.walls[0].center.x + l.walls[0].half_extents.x, 10.0);
        assert_eq!(l.walls[4].center.y + l.walls[4].half_extents.y, 10.0);
    }
}
