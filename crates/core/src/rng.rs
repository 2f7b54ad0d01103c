//! RNG module - seeded food placement randomness
//!
//! A small LCG keeps every session reproducible from its seed, which the tests
//! and the journal rely on. Uniform picks use rejection sampling so small ranges
//! (a handful of free cells late in a run) are not biased by the modulo.

use crate::types::{Cell, GRID_SIZE};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // Low bits of a power-of-two LCG have short periods; hand out the high half.
        self.state.rotate_left(16)
    }

    /// Uniform value in `[0, max)`. `max` must be non-zero.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        let zone = u32::MAX - (u32::MAX % max);
        loop {
            let v = self.next_u32();
            if v < zone {
                return v % max;
            }
        }
    }

    /// Uniform cell anywhere on the grid (independent x and y draws).
    pub fn next_cell(&mut self) -> Cell {
        let x = self.next_range(GRID_SIZE as u32) as i16;
        let y = self.next_range(GRID_SIZE as u32) as i16;
        Cell::new(x, y)
    }

    /// Pick one element uniformly, or `None` for an empty slice.
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let i = self.next_range(items.len() as u32) as usize;
        Some(items[i])
    }

    /// Current state; seeding a new RNG with it continues the same sequence.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
