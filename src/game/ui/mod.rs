// In-game UI behaviors

pub mod typewriter;

pub use typewriter::Typewriter;
