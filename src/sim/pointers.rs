//! Multi-touch pointer actuators
//!
//! Each live pointer owns a pusher body dragged toward a kinematic anchor by
//! a zero-rest-length soft spring. The anchor tracks the pointer exactly;
//! the pusher follows with springy lag and does the actual hitting.
//!
//! State machine per pointer id: absent -> active (down) -> absent
//! (up/cancel/out/leave). Untracked ids on move/release are silent no-ops.

use glam::Vec2;
use rapier2d::prelude::{ImpulseJointHandle, RigidBodyHandle};

use super::world::PhysicsWorld;
use crate::tuning::Tuning;

/// One pointer's pusher/anchor/joint triple
#[derive(Debug, Clone, Copy)]
pub struct Actuator {
    pub pointer_id: i32,
    pub pusher: RigidBodyHandle,
    pub anchor: RigidBodyHandle,
    pub joint: ImpulseJointHandle,
}

/// Active actuators, keyed by pointer id via linear scan. Touch counts are
/// tiny (<= ~10), and insertion order doubles as a stable draw order.
#[derive(Debug, Default)]
pub struct PointerMap {
    actuators: Vec<Actuator>,
}

impl PointerMap {
    /// Pointer down: allocate pusher + anchor at the event coordinates and
    /// tether them. A repeated down for an already-active id is ignored so
    /// each live pointer maps to exactly one actuator.
    pub fn press(&mut self, world: &mut PhysicsWorld, tuning: &Tuning, id: i32, at: Vec2) {
        if self.find(id).is_some() {
            return;
        }
        let pusher = world.spawn_pusher(at, tuning.pusher_radius);
        let anchor = world.spawn_anchor(at);
        let joint = world.attach_spring(pusher, anchor, tuning.spring_stiffness, tuning.spring_damping);
        self.actuators.push(Actuator {
            pointer_id: id,
            pusher,
            anchor,
            joint,
        });
        log::debug!("pointer {} down at {:?} ({} active)", id, at, self.actuators.len());
    }

    /// Pointer move: teleport only the anchor; the joint drags the pusher
    pub fn drag(&mut self, world: &mut PhysicsWorld, id: i32, to: Vec2) {
        if let Some(actuator) = self.find(id) {
            world.move_anchor(actuator.anchor, to);
        }
    }

    /// Pointer up/cancel/out/leave: remove joint and both bodies, drop the
    /// record. Duplicate releases miss the scan and do nothing.
    pub fn release(&mut self, world: &mut PhysicsWorld, id: i32) {
        if let Some(idx) = self.actuators.iter().position(|a| a.pointer_id == id) {
            let actuator = self.actuators.remove(idx);
            world.remove_actuator(actuator.pusher, actuator.anchor, actuator.joint);
            log::debug!("pointer {} released ({} active)", id, self.actuators.len());
        }
    }

    fn find(&self, id: i32) -> Option<&Actuator> {
        self.actuators.iter().find(|a| a.pointer_id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Actuator> {
        self.actuators.iter()
    }

    pub fn len(&self) -> usize {
        self.actuators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actuators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::arena::{ArenaLayout, GoalSide};

    fn setup() -> (Tuning, PhysicsWorld, PointerMap) {
        let tuning = Tuning::default();
        let layout = ArenaLayout::new(1280.0, 720.0, &tuning);
        let world = PhysicsWorld::new(&layout, &tuning, GoalSide::Right);
        (tuning, world, PointerMap::default())
    }

    #[test]
    fn test_press_creates_anchor_at_event_coordinates() {
        let (tuning, mut world, mut pointers) = setup();
        let at = Vec2::new(137.0, 541.0);
        pointers.press(&mut world, &tuning, 3, at);

        let actuator = pointers.iter().next().unwrap();
        assert_eq!(world.body_position(actuator.anchor), Some(at));
        assert_eq!(world.body_position(actuator.pusher), Some(at));
        assert_eq!(world.joint_count(), 1);
    }

    #[test]
    fn test_duplicate_press_is_ignored() {
        let (tuning, mut world, mut pointers) = setup();
        pointers.press(&mut world, &tuning, 1, Vec2::new(100.0, 100.0));
        let count = world.body_count();
        pointers.press(&mut world, &tuning, 1, Vec2::new(200.0, 200.0));
        assert_eq!(pointers.len(), 1);
        assert_eq!(world.body_count(), count);
    }

    #[test]
    fn test_drag_unknown_id_is_noop() {
        let (_, mut world, mut pointers) = setup();
        let before = world.puck_position();
        pointers.drag(&mut world, 42, Vec2::new(10.0, 10.0));
        assert!(pointers.is_empty());
        assert_eq!(world.puck_position(), before);
    }

    #[test]
    fn test_release_removes_everything_once() {
        let (tuning, mut world, mut pointers) = setup();
        let before = world.body_count();
        pointers.press(&mut world, &tuning, 7, Vec2::new(300.0, 300.0));
        pointers.release(&mut world, 7);
        assert_eq!(world.body_count(), before);
        assert_eq!(world.joint_count(), 0);
        assert!(pointers.is_empty());

        // Duplicate release is a no-op
        pointers.release(&mut world, 7);
        assert_eq!(world.body_count(), before);
    }

    #[test]
    fn test_multi_touch_tracks_each_pointer() {
        let (tuning, mut world, mut pointers) = setup();
        pointers.press(&mut world, &tuning, 1, Vec2::new(100.0, 100.0));
        pointers.press(&mut world, &tuning, 2, Vec2::new(500.0, 500.0));
        assert_eq!(pointers.len(), 2);

        pointers.release(&mut world, 1);
        assert_eq!(pointers.len(), 1);
        assert_eq!(pointers.iter().next().unwrap().pointer_id, 2);
    }
}
