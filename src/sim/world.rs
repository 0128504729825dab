//! Physics world wrapper
//!
//! Owns the rapier2d sets plus the handles the game logic cares about (puck
//! and goal sensors). The solver, broad/narrow phase, CCD, and joint
//! machinery are rapier's; this wrapper only places bodies, steps the
//! pipeline, and relays the collision-start events raised during a step.

use std::sync::Mutex;

use glam::Vec2;
use rapier2d::prelude::*;

use super::arena::{ArenaLayout, GoalSide};
use super::limiter;
use crate::tuning::Tuning;
use crate::{to_game, to_physics};

// matter.js default body density; keeps masses (and thus spring constants)
// in the same ballpark as the original.
const BODY_DENSITY: f32 = 0.001;

/// Collects the collision events rapier raises synchronously during a step
/// so they can be drained afterwards.
#[derive(Default)]
struct EventQueue {
    collisions: Mutex<Vec<CollisionEvent>>,
}

impl EventQueue {
    fn drain(&self) -> Vec<CollisionEvent> {
        match self.collisions.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }
}

impl EventHandler for EventQueue {
    fn handle_collision_event(
        &self,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        event: CollisionEvent,
        _contact_pair: Option<&ContactPair>,
    ) {
        if let Ok(mut events) = self.collisions.lock() {
            events.push(event);
        }
    }

    fn handle_contact_force_event(
        &self,
        _dt: Real,
        _bodies: &RigidBodySet,
        _colliders: &ColliderSet,
        _contact_pair: &ContactPair,
        _total_force_magnitude: Real,
    ) {
    }
}

/// The simulation world: rapier state plus the well-known handles
pub struct PhysicsWorld {
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    pub impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    islands: IslandManager,
    broad_phase: BroadPhaseBvh,
    narrow_phase: NarrowPhase,
    ccd_solver: CCDSolver,
    pipeline: PhysicsPipeline,
    params: IntegrationParameters,
    events: EventQueue,
    gravity: Vector<Real>,

    puck_body: RigidBodyHandle,
    puck_collider: ColliderHandle,
    left_goal: ColliderHandle,
    right_goal: ColliderHandle,
}

impl PhysicsWorld {
    /// Build the static court and spawn the puck on `spawn_side`
    pub fn new(layout: &ArenaLayout, tuning: &Tuning, spawn_side: GoalSide) -> Self {
        let mut bodies = RigidBodySet::new();
        let mut colliders = ColliderSet::new();

        for wall in &layout.walls {
            let body = bodies.insert(
                RigidBodyBuilder::fixed()
                    .translation(to_physics(wall.center))
                    .build(),
            );
            let collider = ColliderBuilder::cuboid(wall.half_extents.x, wall.half_extents.y)
                .restitution(1.0)
                .friction(0.0)
                .build();
            colliders.insert_with_parent(collider, body, &mut bodies);
        }

        let mut insert_goal = |slab: &super::arena::Slab| {
            let body = bodies.insert(
                RigidBodyBuilder::fixed()
                    .translation(to_physics(slab.center))
                    .build(),
            );
            let collider = ColliderBuilder::cuboid(slab.half_extents.x, slab.half_extents.y)
                .sensor(true)
                .active_events(ActiveEvents::COLLISION_EVENTS)
                .build();
            colliders.insert_with_parent(collider, body, &mut bodies)
        };
        let left_goal = insert_goal(&layout.left_goal);
        let right_goal = insert_goal(&layout.right_goal);

        let puck_body = bodies.insert(
            RigidBodyBuilder::dynamic()
                .translation(to_physics(layout.reset_point(spawn_side)))
                .linear_damping(tuning.puck_damping)
                .ccd_enabled(true)
                .build(),
        );
        let puck_collider = colliders.insert_with_parent(
            ColliderBuilder::ball(tuning.puck_radius)
                .restitution(1.0)
                .friction(0.0)
                .density(BODY_DENSITY)
                .build(),
            puck_body,
            &mut bodies,
        );

        Self {
            bodies,
            colliders,
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            islands: IslandManager::new(),
            broad_phase: BroadPhaseBvh::new(),
            narrow_phase: NarrowPhase::new(),
            ccd_solver: CCDSolver::new(),
            pipeline: PhysicsPipeline::new(),
            params: IntegrationParameters::default(),
            events: EventQueue::default(),
            gravity: vector![0.0, 0.0],
            puck_body,
            puck_collider,
            left_goal,
            right_goal,
        }
    }

    /// Run one integration step and return the collision events it raised.
    ///
    /// The speed limiter (when enabled) runs as a pre-integration pass over
    /// every dynamic body.
    pub fn step(&mut self, dt: f32, speed_limit: Option<f32>) -> Vec<CollisionEvent> {
        if let Some(max) = speed_limit {
            limiter::clamp_world(&mut self.bodies, max);
        }

        self.params.dt = dt;
        self.pipeline.step(
            &self.gravity,
            &self.params,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            &(),
            &self.events,
        );
        self.events.drain()
    }

    /// Identify a puck-vs-goal collision-start pair
    pub fn goal_hit(&self, event: &CollisionEvent) -> Option<GoalSide> {
        let CollisionEvent::Started(a, b, _) = *event else {
            return None;
        };
        if Self::is_pair(a, b, self.puck_collider, self.left_goal) {
            Some(GoalSide::Left)
        } else if Self::is_pair(a, b, self.puck_collider, self.right_goal) {
            Some(GoalSide::Right)
        } else {
            None
        }
    }

    fn is_pair(a: ColliderHandle, b: ColliderHandle, x: ColliderHandle, y: ColliderHandle) -> bool {
        (a == x && b == y) || (a == y && b == x)
    }

    /// Zero the puck's velocity and teleport it to `at`
    pub fn reset_puck(&mut self, at: Vec2) {
        if let Some(puck) = self.bodies.get_mut(self.puck_body) {
            puck.set_linvel(vector![0.0, 0.0], true);
            puck.set_angvel(0.0, true);
            puck.set_translation(to_physics(at), true);
        }
    }

    /// Teleport the puck without touching its velocity
    pub fn set_puck_position(&mut self, at: Vec2) {
        if let Some(puck) = self.bodies.get_mut(self.puck_body) {
            puck.set_translation(to_physics(at), true);
        }
    }

    pub fn set_puck_velocity(&mut self, vel: Vec2) {
        if let Some(puck) = self.bodies.get_mut(self.puck_body) {
            puck.set_linvel(to_physics(vel), true);
        }
    }

    pub fn puck_position(&self) -> Vec2 {
        self.bodies
            .get(self.puck_body)
            .map(|b| to_game(b.translation()))
            .unwrap_or_default()
    }

    pub fn puck_velocity(&self) -> Vec2 {
        self.bodies
            .get(self.puck_body)
            .map(|b| to_game(b.linvel()))
            .unwrap_or_default()
    }

    pub fn body_position(&self, handle: RigidBodyHandle) -> Option<Vec2> {
        self.bodies.get(handle).map(|b| to_game(b.translation()))
    }

    /// Spawn a player pusher: dynamic, bouncy, CCD so fast flicks connect
    pub fn spawn_pusher(&mut self, at: Vec2, radius: f32) -> RigidBodyHandle {
        let body = self.bodies.insert(
            RigidBodyBuilder::dynamic()
                .translation(to_physics(at))
                .ccd_enabled(true)
                .build(),
        );
        self.colliders.insert_with_parent(
            ColliderBuilder::ball(radius)
                .restitution(1.0)
                .friction(0.0)
                .density(BODY_DENSITY)
                .build(),
            body,
            &mut self.bodies,
        );
        body
    }

    /// Spawn a pointer anchor: kinematic, collision-filtered to touch nothing
    pub fn spawn_anchor(&mut self, at: Vec2) -> RigidBodyHandle {
        let body = self.bodies.insert(
            RigidBodyBuilder::kinematic_position_based()
                .translation(to_physics(at))
                .build(),
        );
        self.colliders.insert_with_parent(
            ColliderBuilder::ball(1.0)
                .collision_groups(InteractionGroups::none())
                .build(),
            body,
            &mut self.bodies,
        );
        body
    }

    /// Tether a pusher to its anchor with a zero-rest-length soft spring
    pub fn attach_spring(
        &mut self,
        pusher: RigidBodyHandle,
        anchor: RigidBodyHandle,
        stiffness: f32,
        damping: f32,
    ) -> ImpulseJointHandle {
        self.impulse_joints.insert(
            pusher,
            anchor,
            SpringJointBuilder::new(0.0, stiffness, damping),
            true,
        )
    }

    /// Drive the anchor to the pointer's new position
    pub fn move_anchor(&mut self, anchor: RigidBodyHandle, to: Vec2) {
        if let Some(body) = self.bodies.get_mut(anchor) {
            body.set_next_kinematic_translation(to_physics(to));
        }
    }

    /// Remove an actuator's joint and both bodies (with attached colliders)
    pub fn remove_actuator(
        &mut self,
        pusher: RigidBodyHandle,
        anchor: RigidBodyHandle,
        joint: ImpulseJointHandle,
    ) {
        self.impulse_joints.remove(joint, true);
        for handle in [pusher, anchor] {
            self.bodies.remove(
                handle,
                &mut self.islands,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                true,
            );
        }
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn joint_count(&self) -> usize {
        self.impulse_joints.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> (ArenaLayout, PhysicsWorld) {
        let tuning = Tuning::default();
        let layout = ArenaLayout::new(1280.0, 720.0, &tuning);
        let world = PhysicsWorld::new(&layout, &tuning, GoalSide::Left);
        (layout, world)
    }

    #[test]
    fn test_initial_body_count() {
        // 6 walls + 2 goals + 1 puck
        let (_, world) = world();
        assert_eq!(world.body_count(), 9);
        assert_eq!(world.joint_count(), 0);
    }

    #[test]
    fn test_puck_spawns_at_reset_point() {
        let (layout, world) = world();
        assert_eq!(world.puck_position(), layout.reset_point(GoalSide::Left));
        assert_eq!(world.puck_velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_step_with_no_motion_raises_no_goal() {
        let (_, mut world) = world();
        for _ in 0..10 {
            let events = world.step(1.0 / 60.0, None);
            assert!(events.iter().all(|e| world.goal_hit(e).is_none()));
        }
    }

    #[test]
    fn test_puck_in_goal_sensor_raises_started_event() {
        let (layout, mut world) = world();
        world.set_puck_position(layout.left_goal.center);

        let events = world.step(1.0 / 60.0, None);
        let goals: Vec<_> = events.iter().filter_map(|e| world.goal_hit(e)).collect();
        assert_eq!(goals, vec![GoalSide::Left]);
    }

    #[test]
    fn test_speed_limit_clamps_puck_velocity() {
        let (_, mut world) = world();
        world.set_puck_velocity(Vec2::new(5000.0, -4000.0));
        world.step(1.0 / 60.0, Some(600.0));

        let v = world.puck_velocity();
        assert!(v.x.abs() <= 600.0 + 1e-3);
        assert!(v.y.abs() <= 600.0 + 1e-3);
    }

    #[test]
    fn test_remove_actuator_restores_counts() {
        let (_, mut world) = world();
        let before = world.body_count();

        let pusher = world.spawn_pusher(Vec2::new(200.0, 200.0), 80.0);
        let anchor = world.spawn_anchor(Vec2::new(200.0, 200.0));
        let joint = world.attach_spring(pusher, anchor, 400.0, 30.0);
        assert_eq!(world.body_count(), before + 2);
        assert_eq!(world.joint_count(), 1);

        world.remove_actuator(pusher, anchor, joint);
        assert_eq!(world.body_count(), before);
        assert_eq!(world.joint_count(), 0);
    }
}
