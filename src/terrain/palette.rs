// Random color allocation for island labeling.
//
// No uniqueness guarantee: two calls may return the same color.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::Color;

pub trait ColorSource {
    fn next_color(&mut self) -> Color;
}

#[derive(Debug, Clone)]
pub struct Palette<R: Rng = StdRng> {
    rng: R,
}

impl Palette<StdRng> {
    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl<R: Rng> Palette<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ColorSource for Palette<R> {
    fn next_color(&mut self) -> Color {
        Color::rgb(self.rng.gen_range(0..1u32 << 24))
    }
}

/// Deterministic source cycling through a fixed list.
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct FixedPalette {
    colors: Vec<Color>,
    next: usize,
}

#[cfg(test)]
impl FixedPalette {
    pub(crate) fn new(colors: Vec<Color>) -> Self {
        assert!(!colors.is_empty(), "fixed palette needs at least one color");
        Self { colors, next: 0 }
    }
}

#[cfg(test)]
impl ColorSource for FixedPalette {
    fn next_color(&mut self) -> Color {
        let c = self.colors[self.next % self.colors.len()];
        self.next += 1;
        c
    }
}
