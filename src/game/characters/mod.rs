// Character system
//
// This module contains everything related to NPC humans:
// - Human actor and its trigger-driven state machine
// - Movement stats
// - Behavior states and their animator encoding
// - Randomized spawn appearance

pub mod appearance;
pub mod human;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use appearance::{Appearance, AppearanceError, Gender};
pub use human::{Human, MIN_DISTANCE_TO_TARGET, STATE_PARAM};
pub use state::HumanState;
pub use stats::Stats;
