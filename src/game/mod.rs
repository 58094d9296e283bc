// Game behaviors built on top of the engine stand-ins

pub mod characters;
pub mod ui;
