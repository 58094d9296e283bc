// Polled input state

/// Per-tick input snapshot queried by gameplay code.
///
/// The primary press is edge-triggered: it reads true only on the tick the
/// press was registered, and the host loop clears it at the end of each tick.
#[derive(Debug, Default)]
pub struct Input {
    primary_pressed: bool,
}

impl Input {
    pub fn new() -> Self {
        Self {
            primary_pressed: false,
        }
    }

    /// Register a primary (pointer/confirm) press for the current tick
    pub fn press_primary(&mut self) {
        self.primary_pressed = true;
    }

    /// Was the primary button pressed this tick?
    pub fn primary_pressed(&self) -> bool {
        self.primary_pressed
    }

    /// Clear per-tick state (called at end of frame)
    pub fn clear(&mut self) {
        self.primary_pressed = false;
    }
}
