// Engine collaborator stand-ins: game loop, animator, audio, input, UI

pub mod animator;
pub mod audio;
pub mod collision;
pub mod color;
pub mod game_loop;
pub mod input;
pub mod ui;

// Re-export commonly used types
pub use animator::Animator;
pub use audio::AudioSource;
pub use collision::{ColliderTag, OverlapEvent};
pub use color::{ColorSource, FixedColor, RandomColor};
pub use game_loop::GameLoop;
pub use input::Input;
pub use ui::TextSurface;
