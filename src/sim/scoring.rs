//! Goal detection and the scoreboard
//!
//! Runs once per physics step over the collision-start pairs rapier raised
//! during that step. A puck/goal pair awards the opposing side and teleports
//! the puck to the far reset point with zero velocity. Once either side
//! reaches the win threshold the board silently clears; the original shipped
//! without a winner screen and that behavior is kept as-is.

use rapier2d::prelude::CollisionEvent;

use super::arena::{ArenaLayout, GoalSide};
use super::world::PhysicsWorld;

/// Left/right score counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub left: u32,
    pub right: u32,
}

impl Scoreboard {
    /// Award a point to the side opposite the goal that was struck
    pub fn award_goal(&mut self, goal: GoalSide) {
        match goal {
            GoalSide::Left => self.right += 1,
            GoalSide::Right => self.left += 1,
        }
    }

    /// End-of-step reset once either counter reaches `threshold`
    pub fn reset_if_won(&mut self, threshold: u32) -> bool {
        if self.left >= threshold || self.right >= threshold {
            *self = Self::default();
            true
        } else {
            false
        }
    }
}

/// Process one step's collision events.
///
/// Simultaneous goal contacts in the same step each count; the threshold
/// check happens once, after all pairs are handled.
pub fn process_step_events(
    events: &[CollisionEvent],
    world: &mut PhysicsWorld,
    board: &mut Scoreboard,
    layout: &ArenaLayout,
    threshold: u32,
) {
    for event in events {
        let Some(goal) = world.goal_hit(event) else {
            continue;
        };
        world.reset_puck(layout.reset_point(goal.opposite()));
        board.award_goal(goal);
        log::info!(
            "goal on the {:?} side, score {}:{}",
            goal,
            board.left,
            board.right
        );
    }

    if board.reset_if_won(threshold) {
        log::info!("board cleared at {} points", threshold);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_goal_awards_opposing_side() {
        let mut board = Scoreboard::default();
        board.award_goal(GoalSide::Left);
        assert_eq!(board, Scoreboard { left: 0, right: 1 });
        board.award_goal(GoalSide::Right);
        assert_eq!(board, Scoreboard { left: 1, right: 1 });
    }

    #[test]
    fn test_reset_at_threshold() {
        let mut board = Scoreboard { left: 7, right: 4 };
        assert!(board.reset_if_won(7));
        assert_eq!(board, Scoreboard::default());
    }

    #[test]
    fn test_no_reset_below_threshold() {
        let mut board = Scoreboard { left: 6, right: 6 };
        assert!(!board.reset_if_won(7));
        assert_eq!(board, Scoreboard { left: 6, right: 6 });
    }

    proptest! {
        // Any sequence of goals keeps both counters non-negative and below
        // the threshold after each step's reset pass.
        #[test]
        fn score_stays_bounded(goals in proptest::collection::vec(any::<bool>(), 0..200)) {
            let mut board = Scoreboard::default();
            for left_goal in goals {
                let goal = if left_goal { GoalSide::Left } else { GoalSide::Right };
                board.award_goal(goal);
                board.reset_if_won(7);
                prop_assert!(board.left < 7);
                prop_assert!(board.right < 7);
            }
        }
    }
}
