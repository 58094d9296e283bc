// Tint color providers for appearance randomization

use glam::Vec4;
use rand::Rng;

/// Source of a tint color (RGBA, 1.0 = full color).
///
/// Injected into appearance randomization so tests can supply a fixed color
/// and the game can supply a random one.
pub trait ColorSource {
    fn color(&mut self) -> Vec4;
}

/// Uniform random opaque color, the default skin-tone source.
#[derive(Debug)]
pub struct RandomColor<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomColor<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ColorSource for RandomColor<R> {
    fn color(&mut self) -> Vec4 {
        Vec4::new(
            self.rng.gen_range(0.0..=1.0),
            self.rng.gen_range(0.0..=1.0),
            self.rng.gen_range(0.0..=1.0),
            1.0,
        )
    }
}

/// Fixed color source, mainly for tests and scripted scenes.
#[derive(Debug, Clone, Copy)]
pub struct FixedColor(pub Vec4);

impl ColorSource for FixedColor {
    fn color(&mut self) -> Vec4 {
        self.0
    }
}
