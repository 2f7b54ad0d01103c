//! Session: the single owner of a running game.
//!
//! Input sources push intents into a channel at any time. The session only
//! reads them when a tick fires, commits one movement vector, advances the
//! simulation once, and republishes the snapshot.

use std::time::Duration;

use arrayvec::ArrayVec;

use crate::clock::Clock;
use crate::config::SessionConfig;
use crate::core::{GameSnapshot, GameState, StepResult};
use crate::input::{InputTranslator, IntentReceiver};
use crate::tick::{Tick, TickEngine};
use crate::types::{Direction, GameEvent};

/// What one applied tick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub tick: Tick,
    /// Episode the advance was played in (before any reset it caused).
    pub episode: u32,
    /// Movement vector used for this advance.
    pub direction: Direction,
    pub step: StepResult,
    pub events: ArrayVec<GameEvent, 2>,
}

pub struct Session<C: Clock> {
    game: GameState,
    translator: InputTranslator,
    intents: IntentReceiver,
    engine: TickEngine,
    clock: C,
    snapshot: GameSnapshot,
}

impl<C: Clock> Session<C> {
    pub fn new(config: &SessionConfig, intents: IntentReceiver, clock: C) -> Self {
        let game = GameState::with_rules(config.seed, config.rules);
        Self::with_game(game, config.tick_ms, intents, clock)
    }

    /// Wrap an existing game (custom layouts in tests and benches).
    pub fn with_game(game: GameState, tick_ms: u32, intents: IntentReceiver, clock: C) -> Self {
        let translator = InputTranslator::new(game.heading());
        let snapshot = game.snapshot();
        Self {
            game,
            translator,
            intents,
            engine: TickEngine::new(tick_ms),
            clock,
            snapshot,
        }
    }

    /// Arm the tick engine. Returns the arming generation.
    pub fn start(&mut self) -> u32 {
        self.engine.start(self.clock.now_ms())
    }

    /// Stop ticking and detach every input source.
    ///
    /// Ticks obtained before the stop are ignored by [`Session::on_tick`].
    pub fn stop(&mut self) {
        self.engine.stop();
        self.intents.close();
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    /// Next due tick, without applying it.
    pub fn poll_tick(&mut self) -> Option<Tick> {
        let now = self.clock.now_ms();
        self.engine.poll(now)
    }

    /// Apply `tick` unless it is stale (older generation, or the session stopped).
    pub fn on_tick(&mut self, tick: Tick) -> Option<TickReport> {
        if !self.engine.is_live(&tick) {
            return None;
        }
        Some(self.step(tick))
    }

    /// Poll and apply at most one tick.
    pub fn pump(&mut self) -> Option<TickReport> {
        let tick = self.poll_tick()?;
        self.on_tick(tick)
    }

    /// How long the caller may wait for input before the next tick is due.
    pub fn next_timeout(&self) -> Option<Duration> {
        self.engine.timeout(self.clock.now_ms())
    }

    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn travel(&self) -> Direction {
        self.translator.travel()
    }

    fn step(&mut self, tick: Tick) -> TickReport {
        let mut events = ArrayVec::<GameEvent, 2>::new();
        let episode = self.game.episode_id();

        self.intents.drain_into(&mut self.translator);
        let from = self.translator.travel();
        let direction = self.translator.commit();
        if from != direction {
            let _ = events.try_push(GameEvent::Turned {
                from,
                to: direction,
            });
        }

        let step = self.game.advance(direction);
        match step {
            StepResult::Moved => {}
            StepResult::Ate { at, score } => {
                let _ = events.try_push(GameEvent::FoodEaten {
                    at,
                    score,
                    length: self.game.length() as u16,
                });
            }
            StepResult::Crashed {
                cause,
                at,
                score,
                length,
            } => {
                let _ = events.try_push(GameEvent::GameOver {
                    cause,
                    at,
                    score,
                    length,
                });
            }
        }

        self.game.snapshot_into(&mut self.snapshot);

        TickReport {
            tick,
            episode,
            direction,
            step,
            events,
        }
    }
}
