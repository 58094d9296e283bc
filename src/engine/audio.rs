// One-shot audio cue source

use log::debug;

/// Stand-in for a host-engine audio source playing a single cue.
///
/// Real mixing and playback are host-owned; this records how many times the
/// cue fired so gameplay code and tests can observe it.
#[derive(Debug, Default)]
pub struct AudioSource {
    plays: u64,
}

impl AudioSource {
    pub fn new() -> Self {
        Self { plays: 0 }
    }

    /// Fire the cue once
    pub fn play(&mut self) {
        self.plays += 1;
        debug!("audio cue fired ({} total)", self.plays);
    }

    /// Total number of cues fired since creation
    pub fn play_count(&self) -> u64 {
        self.plays
    }
}
