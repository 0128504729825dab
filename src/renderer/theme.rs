//! Neon palette and side-dependent coloring

/// Stroke/shadow/fill triple for one glow pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glow {
    pub stroke: &'static str,
    pub shadow: &'static str,
    pub fill: &'static str,
}

/// Left (teal) player color
pub const LEFT: Glow = Glow {
    stroke: "rgba(1, 206, 194, 0.6)",
    shadow: "rgba(1, 206, 194, 1)",
    fill: "rgba(1, 206, 194, 0.1)",
};

/// Right (pink) player color
pub const RIGHT: Glow = Glow {
    stroke: "rgba(252, 63, 121, 0.6)",
    shadow: "rgba(252, 63, 121, 1)",
    fill: "rgba(252, 63, 121, 0.1)",
};

/// Center line and bounds (yellow)
pub const ARENA: Glow = Glow {
    stroke: "rgba(242, 255, 2, 0.6)",
    shadow: "rgba(242, 255, 2, 0.5)",
    fill: "rgba(0, 0, 0, 0.4)",
};

/// The puck (white)
pub const PUCK: Glow = Glow {
    stroke: "rgba(255, 255, 255, 0.5)",
    shadow: "rgba(255, 255, 255, 1)",
    fill: "rgba(255, 255, 255, 0.1)",
};

/// Score digits share the side colors but fill dark
pub const SCORE_FILL: &str = "rgba(0, 0, 0, 0.4)";

/// Pushers are colored by the half of the court they currently occupy
pub fn side_glow(x: f32, court_width: f32) -> Glow {
    if x < court_width / 2.0 { LEFT } else { RIGHT }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_glow_by_half() {
        assert_eq!(side_glow(10.0, 1000.0), LEFT);
        assert_eq!(side_glow(990.0, 1000.0), RIGHT);
        // The midline itself counts as the right half
        assert_eq!(side_glow(500.0, 1000.0), RIGHT);
    }
}
