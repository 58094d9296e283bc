// Human behavior states

/// Behavior state of a human NPC.
///
/// `Walk` is defined for hosts that want to command it directly, but none of
/// the built-in transitions enter it: overlap events and the distance clamp
/// only ever produce `Idle` and `Flail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HumanState {
    /// Standing still at the target
    Idle,
    /// Walking toward the target at base speed
    Walk,
    /// Panicked sprint away from the target at double speed
    Flail,
}

impl Default for HumanState {
    fn default() -> Self {
        Self::Idle
    }
}

impl HumanState {
    /// Integer encoding pushed to the animator's "State" parameter
    pub fn animator_value(&self) -> i32 {
        match self {
            Self::Idle => 0,
            Self::Walk => 1,
            Self::Flail => 2,
        }
    }

    /// Check if this state produces horizontal movement
    pub fn is_moving(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
