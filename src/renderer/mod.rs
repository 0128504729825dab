//! Canvas 2D rendering
//!
//! The painter reads simulation state each display frame and owns none of
//! it. Flicker and palette logic are plain code so they stay testable off
//! the browser.

pub mod flicker;
pub mod theme;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use flicker::Flicker;
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasScene;
