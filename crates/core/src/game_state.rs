//! Game state module - owns the snake, the food and the score
//!
//! [`GameState::advance`] is the whole simulation: one call per tick, one step
//! of the head, then either growth, a plain move, or a reset to the starting
//! layout. Direction validation (no reversing into the neck) happens upstream
//! in the input translator, so `advance` takes whatever vector it is given.

use std::collections::VecDeque;

use crate::food::place_food;
use crate::rng::SimpleRng;
use crate::rules::{Rules, SelfCollision};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Outcome of a single [`GameState::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// The head moved and the tail followed.
    Moved,
    /// The head landed on food; the snake kept its tail.
    Ate { at: Cell, score: u32 },
    /// Collision. `score` and `length` are the pre-reset values; the state has
    /// already been restored to the starting layout.
    Crashed {
        cause: CollisionCause,
        at: Cell,
        score: u32,
        length: u16,
    },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Head at the front.
    snake: VecDeque<Cell>,
    food: Option<Cell>,
    /// Direction applied by the most recent advance.
    heading: Direction,
    score: u32,
    /// Highest score reached since this state was created.
    best_score: u32,
    /// Advances performed, crashes included.
    tick: u64,
    /// Incremented on every reset.
    episode_id: u32,
    rules: Rules,
    seed: u32,
    rng: SimpleRng,
    scratch: Vec<Cell>,
}

impl GameState {
    /// Create a new game at the starting layout with the standard rules.
    pub fn new(seed: u32) -> Self {
        Self::with_rules(seed, Rules::standard())
    }

    pub fn with_rules(seed: u32, rules: Rules) -> Self {
        Self::with_layout(seed, rules, &START_SNAKE, START_DIRECTION, Some(START_FOOD))
    }

    /// Start from an arbitrary layout (scenarios, tests, benchmarks).
    ///
    /// Resets still restore [`START_SNAKE`].
    ///
    /// # Panics
    ///
    /// If `snake` is empty.
    pub fn with_layout(
        seed: u32,
        rules: Rules,
        snake: &[Cell],
        heading: Direction,
        food: Option<Cell>,
    ) -> Self {
        assert!(!snake.is_empty(), "snake needs at least a head");
        let mut body = VecDeque::with_capacity(GRID_CELLS + 1);
        body.extend(snake.iter().copied());
        Self {
            snake: body,
            food,
            heading,
            score: 0,
            best_score: 0,
            tick: 0,
            episode_id: 0,
            rules,
            seed,
            rng: SimpleRng::new(seed),
            scratch: Vec::with_capacity(GRID_CELLS),
        }
    }

    pub fn snake(&self) -> &VecDeque<Cell> {
        &self.snake
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    pub fn length(&self) -> usize {
        self.snake.len()
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Advance the simulation by exactly one step in `dir`.
    pub fn advance(&mut self, dir: Direction) -> StepResult {
        self.tick += 1;
        self.heading = dir;

        let new_head = self.head().step(dir);
        let eating = self.food == Some(new_head);

        let cause = if !new_head.in_bounds(GRID_SIZE) {
            Some(CollisionCause::Wall)
        } else if self.hits_body(new_head, eating) {
            Some(CollisionCause::SelfBody)
        } else {
            None
        };

        if let Some(cause) = cause {
            let score = self.score;
            let length = self.snake.len() as u16;
            self.reset();
            return StepResult::Crashed {
                cause,
                at: new_head,
                score,
                length,
            };
        }

        self.snake.push_front(new_head);

        if eating {
            self.score += 1;
            self.best_score = self.best_score.max(self.score);
            self.food = place_food(self.rules.food, &mut self.rng, &self.snake, &mut self.scratch);
            StepResult::Ate {
                at: new_head,
                score: self.score,
            }
        } else {
            self.snake.pop_back();
            StepResult::Moved
        }
    }

    /// Restore the starting layout: score 0, [`START_SNAKE`], fresh food.
    ///
    /// The heading is kept; the next advance continues in the same direction.
    pub fn reset(&mut self) {
        self.score = 0;
        self.snake.clear();
        self.snake.extend(START_SNAKE);
        self.food = place_food(self.rules.food, &mut self.rng, &self.snake, &mut self.scratch);
        self.episode_id += 1;
    }

    fn hits_body(&self, cell: Cell, eating: bool) -> bool {
        match self.rules.self_collision {
            SelfCollision::VacatingTail => {
                let blocking = if eating {
                    self.snake.len()
                } else {
                    self.snake.len() - 1
                };
                self.snake.iter().take(blocking).any(|&c| c == cell)
            }
            SelfCollision::SkipNeck => self
                .snake
                .iter()
                .enumerate()
                .any(|(i, &c)| i != 1 && c == cell),
        }
    }

    /// Copy the observable state into `out`, reusing its allocation.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.snake.clear();
        out.snake.extend(self.snake.iter().copied());
        out.food = self.food;
        out.heading = self.heading;
        out.score = self.score;
        out.best_score = self.best_score;
        out.tick = self.tick;
        out.episode_id = self.episode_id;
        out.paint_board();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
