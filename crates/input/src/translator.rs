//! Direction latch with reversal rejection.
//!
//! Intents are checked against the direction the snake actually travelled on
//! the last tick, not against the previous intent. Two quick presses (e.g. Up
//! then Left while moving Right) therefore cannot sneak a reversal in between
//! ticks.

use crate::types::Direction;

/// Turns any number of intents per tick into one movement vector.
#[derive(Debug, Clone)]
pub struct InputTranslator {
    travel: Direction,
    /// `None` until an intent is accepted after the last commit.
    pending: Option<Direction>,
}

impl InputTranslator {
    pub fn new(travel: Direction) -> Self {
        Self {
            travel,
            pending: None,
        }
    }

    /// Offer an intent. Reversals of the current travel direction are ignored
    /// and return `false`; anything else replaces the pending direction.
    pub fn offer(&mut self, dir: Direction) -> bool {
        if dir.is_opposite(self.travel) {
            return false;
        }
        self.pending = Some(dir);
        true
    }

    /// Take the movement vector for this tick.
    pub fn commit(&mut self) -> Direction {
        if let Some(dir) = self.pending.take() {
            self.travel = dir;
        }
        self.travel
    }

    pub fn travel(&self) -> Direction {
        self.travel
    }

    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }
}

impl Default for InputTranslator {
    fn default() -> Self {
        Self::new(crate::types::START_DIRECTION)
    }
}
