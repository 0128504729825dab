//! Per-step speed limiter
//!
//! Clamps each velocity axis independently before integration so repeated
//! perfectly-elastic bounces cannot build runaway speed. Enabled per session
//! through [`crate::tuning::Tuning::speed_limit`].

use rapier2d::na as nalgebra;
use rapier2d::prelude::{Real, RigidBodySet, vector};

/// Clamp a single velocity axis into `[-max, max]`
#[inline]
pub fn clamp_axis(v: Real, max: Real) -> Real {
    v.clamp(-max, max)
}

/// Clamp every dynamic body's linear velocity, per axis
pub fn clamp_world(bodies: &mut RigidBodySet, max: Real) {
    for (_, body) in bodies.iter_mut() {
        if !body.is_dynamic() {
            continue;
        }
        let v = *body.linvel();
        let clamped = vector![clamp_axis(v.x, max), clamp_axis(v.y, max)];
        if clamped != v {
            body.set_linvel(clamped, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clamp_axis() {
        assert_eq!(clamp_axis(50.0, 100.0), 50.0);
        assert_eq!(clamp_axis(150.0, 100.0), 100.0);
        assert_eq!(clamp_axis(-150.0, 100.0), -100.0);
    }

    proptest! {
        #[test]
        fn clamped_axis_stays_in_range(v in -1e6f32..1e6, max in 0.0f32..1e4) {
            let c = clamp_axis(v, max);
            prop_assert!(c >= -max && c <= max);
            // Values already in range pass through untouched
            if v.abs() <= max {
                prop_assert_eq!(c, v);
            }
        }
    }
}
