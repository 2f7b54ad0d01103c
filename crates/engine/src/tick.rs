//! Fixed-interval tick scheduler.
//!
//! The engine is sans-IO: callers pass the current time in and get due ticks
//! out, so it runs the same under a real terminal loop and under a manual
//! clock in tests. It holds no game state.

use std::time::Duration;

/// One firing of the periodic trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Arming generation that produced this tick.
    pub generation: u32,
    /// 1-based index within the generation.
    pub seq: u64,
    /// Scheduled time of the firing.
    pub due_ms: u64,
}

#[derive(Debug, Clone)]
pub struct TickEngine {
    interval_ms: u64,
    running: bool,
    generation: u32,
    next_due_ms: u64,
    seq: u64,
}

impl TickEngine {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1) as u64,
            running: false,
            generation: 0,
            next_due_ms: 0,
            seq: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Arm a fresh periodic trigger; the first tick is due one interval from `now_ms`.
    ///
    /// Starting an engine that is already running changes nothing.
    pub fn start(&mut self, now_ms: u64) -> u32 {
        if self.running {
            return self.generation;
        }
        self.generation = self.generation.wrapping_add(1);
        self.running = true;
        self.next_due_ms = now_ms + self.interval_ms;
        self.seq = 0;
        self.generation
    }

    /// Disarm. Ticks already handed out become stale. Returns whether it was running.
    pub fn stop(&mut self) -> bool {
        std::mem::replace(&mut self.running, false)
    }

    /// Take the next due tick, if any.
    ///
    /// At most one tick is returned per call. When the caller fell more than
    /// an interval behind, the missed firings are dropped rather than replayed.
    pub fn poll(&mut self, now_ms: u64) -> Option<Tick> {
        if !self.running || now_ms < self.next_due_ms {
            return None;
        }

        let due_ms = self.next_due_ms;
        self.seq += 1;
        self.next_due_ms += self.interval_ms;
        if self.next_due_ms <= now_ms {
            let behind = now_ms - self.next_due_ms;
            self.next_due_ms += (behind / self.interval_ms + 1) * self.interval_ms;
        }

        Some(Tick {
            generation: self.generation,
            seq: self.seq,
            due_ms,
        })
    }

    /// Whether `tick` may still be acted on.
    pub fn is_live(&self, tick: &Tick) -> bool {
        self.running && tick.generation == self.generation
    }

    /// Time until the next tick is due; `None` when stopped.
    pub fn timeout(&self, now_ms: u64) -> Option<Duration> {
        if !self.running {
            return None;
        }
        Some(Duration::from_millis(self.next_due_ms.saturating_sub(now_ms)))
    }
}
