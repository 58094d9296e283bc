// Letter-by-letter text reveal

use crate::engine::audio::AudioSource;
use crate::engine::ui::TextSurface;

/// Where a reveal session currently is.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    /// No session running
    Inactive,
    /// Waiting out `print_speed` before consuming the character at `next`
    Revealing { next: usize, timer: f32 },
    /// Fully revealed, counting down `time_to_live` before hiding
    AutoHiding { timer: f32 },
    /// Session over; the text stays on screen (cancelled, or negative TTL)
    Finished,
}

/// Prints a string out one character at a time.
///
/// The source text is either assigned up front or captured from whatever the
/// text surface already shows on first activation. A primary press at any
/// point skips straight to the full text. After an uncancelled reveal the
/// typewriter hides itself once `time_to_live` elapses; a negative TTL keeps
/// the text up forever.
#[derive(Debug)]
pub struct Typewriter {
    /// Seconds between revealed characters
    pub print_speed: f32,
    /// Seconds to keep the full text on screen before hiding; negative means
    /// never hide
    pub time_to_live: f32,

    /// Memoized source text; `None` until assigned or captured
    source: Option<String>,
    /// Source split into characters for the active session
    letters: Vec<char>,
    /// Characters revealed so far this session
    prefix: String,
    phase: Phase,
    active: bool,
}

impl Typewriter {
    pub fn new(print_speed: f32, time_to_live: f32) -> Self {
        Self {
            print_speed,
            time_to_live,
            source: None,
            letters: Vec::new(),
            prefix: String::new(),
            phase: Phase::Inactive,
            active: false,
        }
    }

    /// Create a typewriter with the source text assigned up front, so
    /// activation never captures from the surface
    pub fn with_text(print_speed: f32, time_to_live: f32, text: &str) -> Self {
        let mut typewriter = Self::new(print_speed, time_to_live);
        typewriter.source = Some(text.to_string());
        typewriter
    }

    /// Is a session running (revealing, holding, or finished-but-visible)?
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The memoized source text, if assigned or captured
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Characters revealed so far in the current session
    pub fn revealed(&self) -> &str {
        &self.prefix
    }

    /// Start a reveal session.
    ///
    /// On the first activation with no assigned text, the surface's current
    /// text is captured as the source and the surface is cleared. The
    /// session always starts from the first character; progress from an
    /// earlier session is never resumed.
    pub fn activate(&mut self, surface: &mut TextSurface) {
        if self.source.is_none() {
            self.source = Some(surface.take_text());
        }

        self.letters = self
            .source
            .as_ref()
            .map(|s| s.chars().collect())
            .unwrap_or_default();
        self.prefix.clear();
        self.phase = Phase::Revealing { next: 0, timer: 0.0 };
        self.active = true;
    }

    /// End the session immediately, clearing the surface.
    ///
    /// A deactivated session never writes to the surface again; the memoized
    /// source text survives for the next activation.
    pub fn deactivate(&mut self, surface: &mut TextSurface) {
        surface.clear();
        self.prefix.clear();
        self.phase = Phase::Inactive;
        self.active = false;
    }

    /// Advance the reveal by `dt` seconds.
    ///
    /// `cancel` is the polled primary-press signal for this tick; a press
    /// during the reveal displays the full text at once and ends the session
    /// with no further audio and no auto-hide. Each revealed character fires
    /// exactly one audio cue.
    pub fn update(
        &mut self,
        dt: f32,
        cancel: bool,
        surface: &mut TextSurface,
        audio: &mut AudioSource,
    ) {
        if !self.active {
            return;
        }

        match self.phase {
            Phase::Revealing { next, timer } => {
                self.step_reveal(next, timer, dt, cancel, surface, audio);
            }
            Phase::AutoHiding { timer } => {
                let timer = timer + dt;
                if timer >= self.time_to_live {
                    self.deactivate(surface);
                } else {
                    self.phase = Phase::AutoHiding { timer };
                }
            }
            Phase::Inactive | Phase::Finished => {}
        }
    }

    fn step_reveal(
        &mut self,
        next: usize,
        timer: f32,
        dt: f32,
        cancel: bool,
        surface: &mut TextSurface,
        audio: &mut AudioSource,
    ) {
        // Cancellation is polled before any character is consumed, so a
        // cancelled tick reveals everything without firing a cue
        if cancel {
            if let Some(source) = &self.source {
                surface.set_text(source);
            }
            self.phase = Phase::Finished;
            return;
        }

        let mut next = next;
        let mut timer = timer;
        let total = self.letters.len();

        if next < total {
            timer += dt;
            if self.print_speed > 0.0 {
                // A long tick may span several intervals; reveal one
                // character (and fire one cue) per interval
                while timer >= self.print_speed && next < total {
                    timer -= self.print_speed;
                    self.prefix.push(self.letters[next]);
                    audio.play();
                    next += 1;
                }
            } else {
                for &letter in &self.letters[next..] {
                    self.prefix.push(letter);
                    audio.play();
                }
                next = total;
            }
            surface.set_text(&self.prefix);
        }

        if next >= total {
            self.phase = if self.time_to_live < 0.0 {
                Phase::Finished
            } else {
                Phase::AutoHiding { timer: 0.0 }
            };
        } else {
            self.phase = Phase::Revealing { next, timer };
        }
    }
}
