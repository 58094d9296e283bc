// Overlap (trigger) event plumbing between host physics and gameplay code

use glam::Vec3;

/// Tag carried by a collision volume, used by gameplay code to decide how to
/// react to an overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColliderTag {
    /// A player-controlled character
    Player,
    /// A navigation waypoint volume
    Waypoint,
    /// Anything without gameplay-relevant tagging
    Untagged,
}

/// A single overlap notification from the host collision system.
///
/// `other` is the world position of the other collision volume at the time
/// the event fired.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverlapEvent {
    /// Two volumes started intersecting
    Enter { tag: ColliderTag, other: Vec3 },
    /// Two volumes are still intersecting this tick
    Stay { tag: ColliderTag, other: Vec3 },
    /// Two volumes stopped intersecting
    Exit { tag: ColliderTag, other: Vec3 },
}

impl OverlapEvent {
    /// Tag of the other collision volume
    pub fn tag(&self) -> ColliderTag {
        match self {
            Self::Enter { tag, .. } | Self::Stay { tag, .. } | Self::Exit { tag, .. } => *tag,
        }
    }

    /// World position of the other collision volume
    pub fn other(&self) -> Vec3 {
        match self {
            Self::Enter { other, .. } | Self::Stay { other, .. } | Self::Exit { other, .. } => {
                *other
            }
        }
    }
}
