// Movement stats shared by all character kinds

/// Immutable movement configuration for an actor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    /// Base movement speed (units/second)
    pub speed: f32,
    /// Maximum turn rate (degrees/second)
    pub rotate_speed: f32,
}

impl Stats {
    pub fn new(speed: f32, rotate_speed: f32) -> Self {
        Self {
            speed,
            rotate_speed,
        }
    }
}

/// Baseline stats for an ordinary human NPC
pub const HUMAN_STATS: Stats = Stats {
    speed: 200.0,
    rotate_speed: 270.0,
};

impl Default for Stats {
    fn default() -> Self {
        HUMAN_STATS
    }
}
