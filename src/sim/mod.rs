//! Simulation module
//!
//! Game-side logic wrapped around the rapier2d world: arena construction,
//! goal scoring, pointer actuators, and the fixed-step session loop. Broad
//! and narrow phase collision detection, constraint solving, and integration
//! all belong to rapier; nothing here re-implements them.

pub mod arena;
pub mod limiter;
pub mod pointers;
pub mod scoring;
pub mod session;
pub mod world;

pub use arena::{ArenaLayout, GoalSide};
pub use pointers::{Actuator, PointerMap};
pub use scoring::Scoreboard;
pub use session::GameSession;
pub use world::PhysicsWorld;
