// Core utilities shared by engine and gameplay code

pub mod math;
