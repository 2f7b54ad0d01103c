use crate::types::{Cell, Direction, GRID_SIZE, START_DIRECTION};

const N: usize = GRID_SIZE as usize;

/// What a renderer should draw at one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Empty,
    Head,
    Body,
    Food,
}

/// Read-only copy of the simulation, published once per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Row-major tiles, indexed `[y][x]`.
    pub board: [[Tile; N]; N],
    /// Head first.
    pub snake: Vec<Cell>,
    pub food: Option<Cell>,
    pub heading: Direction,
    pub score: u32,
    pub best_score: u32,
    pub tick: u64,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [[Tile::Empty; N]; N];
        self.snake.clear();
        self.food = None;
        self.heading = START_DIRECTION;
        self.score = 0;
        self.best_score = 0;
        self.tick = 0;
        self.episode_id = 0;
    }

    pub fn length(&self) -> usize {
        self.snake.len()
    }

    pub fn head(&self) -> Option<Cell> {
        self.snake.first().copied()
    }

    /// Tile at `(x, y)`; off-grid coordinates read as empty.
    pub fn tile(&self, x: i16, y: i16) -> Tile {
        if !Cell::new(x, y).in_bounds(GRID_SIZE) {
            return Tile::Empty;
        }
        self.board[y as usize][x as usize]
    }

    /// Rebuild `board` from `snake` and `food`.
    ///
    /// Snake tiles win over food when they overlap (possible under legacy rules).
    pub(crate) fn paint_board(&mut self) {
        self.board = [[Tile::Empty; N]; N];
        if let Some(f) = self.food {
            if f.in_bounds(GRID_SIZE) {
                self.board[f.y as usize][f.x as usize] = Tile::Food;
            }
        }
        for (i, c) in self.snake.iter().enumerate() {
            if !c.in_bounds(GRID_SIZE) {
                continue;
            }
            let tile = if i == 0 { Tile::Head } else { Tile::Body };
            self.board[c.y as usize][c.x as usize] = tile;
        }
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[Tile::Empty; N]; N],
            snake: Vec::with_capacity(N * N),
            food: None,
            heading: START_DIRECTION,
            score: 0,
            best_score: 0,
            tick: 0,
            episode_id: 0,
        };
        s.clear();
        s
    }
}
