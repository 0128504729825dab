//! Data-driven game balance and variant knobs
//!
//! The game existed as several near-identical prototypes differing only in
//! geometry insets, pusher sizing, and whether the speed limiter ran. One
//! implementation plus this struct covers all of them.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable parameters for a session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Wall inset from the viewport edge (CSS pixels)
    pub wall_inset: f32,
    /// Puck radius
    pub puck_radius: f32,
    /// Pusher radius
    pub pusher_radius: f32,
    /// Puck air drag (rapier linear damping)
    pub puck_damping: f32,
    /// Anchor-to-pusher spring stiffness
    pub spring_stiffness: f32,
    /// Anchor-to-pusher spring damping
    pub spring_damping: f32,
    /// Score at which the board silently clears
    pub win_threshold: u32,
    /// Per-axis velocity clamp applied before each step; `None` disables it
    pub speed_limit: Option<f32>,
    /// Chance per 100ms bucket that a glow pass flickers off
    pub flicker_chance: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            wall_inset: 0.0,
            puck_radius: PUCK_RADIUS,
            pusher_radius: PUSHER_RADIUS,
            puck_damping: 0.3,
            spring_stiffness: 400.0,
            spring_damping: 30.0,
            win_threshold: WIN_THRESHOLD,
            speed_limit: None,
            flicker_chance: 0.01,
        }
    }
}

impl Tuning {
    /// The speed-limited prototype variant
    pub fn with_speed_limit(max: f32) -> Self {
        Self {
            speed_limit: Some(max),
            ..Self::default()
        }
    }

    /// LocalStorage key
    const STORAGE_KEY: &'static str = "neon_hockey_tuning";

    /// Load tuning from LocalStorage (WASM only), falling back to defaults
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(tuning) = serde_json::from_str(&json) {
                    log::info!("Loaded tuning from LocalStorage");
                    return tuning;
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Save tuning to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Tuning saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{"win_threshold": 3}"#).unwrap();
        assert_eq!(tuning.win_threshold, 3);
        assert_eq!(tuning.puck_radius, PUCK_RADIUS);
        assert_eq!(tuning.speed_limit, None);
    }

    #[test]
    fn test_speed_limit_variant() {
        let tuning = Tuning::with_speed_limit(900.0);
        assert_eq!(tuning.speed_limit, Some(900.0));
        assert_eq!(tuning.win_threshold, WIN_THRESHOLD);
    }
}
