//! Neon Hockey - a two-player multi-touch air hockey game
//!
//! Core modules:
//! - `sim`: arena setup, scoring, pointer actuators, fixed-step session loop
//!   (rigid-body dynamics are delegated to rapier2d)
//! - `renderer`: canvas 2D painter (glow, flicker, gradients)
//! - `tuning`: data-driven knobs unifying the prototype variants

pub mod renderer;
pub mod sim;
pub mod tuning;

pub use sim::GameSession;
pub use tuning::Tuning;

use glam::Vec2;
use rapier2d::na as nalgebra;
use rapier2d::prelude::{Real, Vector, vector};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matching the engine's stock ticker)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 5;

    /// Puck radius in CSS pixels
    pub const PUCK_RADIUS: f32 = 40.0;
    /// Pusher radius in CSS pixels
    pub const PUSHER_RADIUS: f32 = 80.0;
    /// Score at which the board silently clears
    pub const WIN_THRESHOLD: u32 = 7;
}

/// Convert a game-space point to a rapier translation
#[inline]
pub fn to_physics(v: Vec2) -> Vector<Real> {
    vector![v.x, v.y]
}

/// Convert a rapier translation back to a game-space point
#[inline]
pub fn to_game(v: &Vector<Real>) -> Vec2 {
    Vec2::new(v.x, v.y)
}
