//! Game session
//!
//! Single owner of all mutable game state: physics world, scoreboard, and
//! pointer actuators. Pointer handlers and the render loop both go through
//! here instead of ambient globals. Physics runs on a fixed timestep behind
//! an accumulator; rendering reads positions at whatever cadence the display
//! refreshes.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::arena::{ArenaLayout, GoalSide};
use super::pointers::PointerMap;
use super::scoring::{self, Scoreboard};
use super::world::PhysicsWorld;
use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::tuning::Tuning;

pub struct GameSession {
    pub tuning: Tuning,
    pub layout: ArenaLayout,
    pub world: PhysicsWorld,
    pub score: Scoreboard,
    pub pointers: PointerMap,
    /// Simulation tick counter
    pub time_ticks: u64,
    accumulator: f32,
}

impl GameSession {
    /// Build a session for a viewport; the puck spawns on a seeded-random side
    pub fn new(width: f32, height: f32, tuning: Tuning, seed: u64) -> Self {
        let layout = ArenaLayout::new(width, height, &tuning);
        let mut rng = Pcg32::seed_from_u64(seed);
        let spawn_side = if rng.random::<bool>() {
            GoalSide::Left
        } else {
            GoalSide::Right
        };
        let world = PhysicsWorld::new(&layout, &tuning, spawn_side);
        log::info!(
            "session {}x{}, puck serving on the {:?} side",
            width,
            height,
            spawn_side
        );

        Self {
            tuning,
            layout,
            world,
            score: Scoreboard::default(),
            pointers: PointerMap::default(),
            time_ticks: 0,
            accumulator: 0.0,
        }
    }

    /// Advance by a display-frame delta, running up to `MAX_SUBSTEPS` fixed
    /// physics steps
    pub fn advance(&mut self, frame_dt: f32) {
        let dt = frame_dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.step_once();
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
    }

    /// One fixed physics step plus the scoring pass over its events
    pub fn step_once(&mut self) {
        let events = self.world.step(SIM_DT, self.tuning.speed_limit);
        scoring::process_step_events(
            &events,
            &mut self.world,
            &mut self.score,
            &self.layout,
            self.tuning.win_threshold,
        );
        self.time_ticks += 1;
    }

    pub fn pointer_down(&mut self, id: i32, at: Vec2) {
        self.pointers.press(&mut self.world, &self.tuning, id, at);
    }

    pub fn pointer_move(&mut self, id: i32, to: Vec2) {
        self.pointers.drag(&mut self.world, id, to);
    }

    pub fn pointer_up(&mut self, id: i32) {
        self.pointers.release(&mut self.world, id);
    }

    pub fn puck_position(&self) -> Vec2 {
        self.world.puck_position()
    }

    /// Current pusher centers, in draw order
    pub fn pusher_positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.pointers
            .iter()
            .filter_map(|a| self.world.body_position(a.pusher))
    }
}
