// Animator parameter sink

use std::collections::HashMap;

/// Stand-in for the host engine's animator.
///
/// Gameplay code writes named parameters; the host reads them back to drive
/// animation blending. Only integer parameters exist for now since that is
/// all the gameplay layer sets.
#[derive(Debug, Default)]
pub struct Animator {
    integers: HashMap<String, i32>,
}

impl Animator {
    pub fn new() -> Self {
        Self {
            integers: HashMap::new(),
        }
    }

    /// Set a named integer parameter, overwriting any previous value
    pub fn set_integer(&mut self, name: &str, value: i32) {
        self.integers.insert(name.to_string(), value);
    }

    /// Read a named integer parameter, if it has ever been set
    pub fn get_integer(&self, name: &str) -> Option<i32> {
        self.integers.get(name).copied()
    }
}
