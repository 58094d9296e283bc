// Battlerock gameplay and UI behaviors
//
// Engine-facing concerns (rendering, physics integration, audio mixing, UI
// layout) stay on the host side; this crate holds the behaviors that react
// to the host's ticks and events:
//
// - `game::characters`: the Human NPC and its trigger-driven state machine
// - `game::ui`: the typewriter text-reveal effect
// - `engine`: thin stand-ins for the host collaborators those behaviors need
// - `core`: shared math helpers

pub mod core;
pub mod engine;
pub mod game;
