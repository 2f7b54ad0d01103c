use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::VecDeque;

use tui_snake::core::food::place_food;
use tui_snake::core::{FoodPlacement, GameSnapshot, GameState, Rules, SimpleRng};
use tui_snake::term::{FrameBuffer, GameView, Viewport};
use tui_snake::types::{Cell, Direction, GRID_CELLS, GRID_SIZE};

/// Body covering the top `rows` rows of the grid, head at the origin.
fn long_body(rows: i16) -> Vec<Cell> {
    let mut body = Vec::new();
    for y in 0..rows {
        for i in 0..GRID_SIZE {
            let x = if y % 2 == 0 { i } else { GRID_SIZE - 1 - i };
            body.push(Cell::new(x, y));
        }
    }
    body
}

fn bench_advance(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    let turns = [Direction::Up, Direction::Left, Direction::Up, Direction::Right];
    let mut i = 0usize;

    c.bench_function("advance", |b| {
        b.iter(|| {
            i = i.wrapping_add(1);
            state.advance(black_box(turns[(i / 5) % turns.len()]));
        })
    });
}

fn bench_advance_long_snake(c: &mut Criterion) {
    // Head at the open end of the zigzag so the move is legal.
    let mut body = long_body(12);
    body.reverse();
    c.bench_function("advance_len_300", |b| {
        b.iter(|| {
            let mut state = GameState::with_layout(1, Rules::standard(), &body, Direction::Down, None);
            state.advance(black_box(Direction::Down))
        })
    });
}

fn bench_place_food(c: &mut Criterion) {
    let body: VecDeque<Cell> = long_body(20).into_iter().collect();
    let mut rng = SimpleRng::new(7);
    let mut scratch = Vec::with_capacity(GRID_CELLS);

    c.bench_function("place_food_free_cells", |b| {
        b.iter(|| place_food(FoodPlacement::FreeCells, &mut rng, black_box(&body), &mut scratch))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = GameState::with_layout(1, Rules::standard(), &long_body(8), Direction::Down, None);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut snap));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();
    let vp = Viewport::new(80, 30);
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    c.bench_function("render_into_80x30", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), vp, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_advance,
    bench_advance_long_snake,
    bench_place_food,
    bench_snapshot,
    bench_render
);
criterion_main!(benches);
