//! Food placement.

use std::collections::VecDeque;

use crate::rng::SimpleRng;
use crate::rules::FoodPlacement;
use crate::types::{Cell, GRID_CELLS, GRID_SIZE};

/// Choose the next food cell for the given body.
///
/// `scratch` is reused between calls so the free-cell scan does not allocate
/// once it has grown to the grid size.
pub fn place_food(
    policy: FoodPlacement,
    rng: &mut SimpleRng,
    body: &VecDeque<Cell>,
    scratch: &mut Vec<Cell>,
) -> Option<Cell> {
    match policy {
        FoodPlacement::Anywhere => Some(rng.next_cell()),
        FoodPlacement::FreeCells => {
            let mut occupied = [false; GRID_CELLS];
            for c in body {
                if c.in_bounds(GRID_SIZE) {
                    occupied[index(*c)] = true;
                }
            }

            scratch.clear();
            for y in 0..GRID_SIZE {
                for x in 0..GRID_SIZE {
                    let c = Cell::new(x, y);
                    if !occupied[index(c)] {
                        scratch.push(c);
                    }
                }
            }
            rng.choose(scratch)
        }
    }
}

#[inline]
fn index(c: Cell) -> usize {
    (c.y as usize) * (GRID_SIZE as usize) + (c.x as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_of(cells: &[Cell]) -> VecDeque<Cell> {
        cells.iter().copied().collect()
    }

    #[test]
    fn free_cells_never_lands_on_the_body() {
        let mut rng = SimpleRng::new(5);
        let mut scratch = Vec::new();
        // A long snake filling the top four rows.
        let mut cells = Vec::new();
        for y in 0..4 {
            for x in 0..GRID_SIZE {
                cells.push(Cell::new(x, y));
            }
        }
        let body = body_of(&cells);

        for _ in 0..500 {
            let food = place_food(FoodPlacement::FreeCells, &mut rng, &body, &mut scratch)
                .expect("free cells remain");
            assert!(!body.contains(&food));
            assert!(food.in_bounds(GRID_SIZE));
        }
    }

    #[test]
    fn free_cells_finds_the_last_hole() {
        let hole = Cell::new(17, 11);
        let mut cells = Vec::new();
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let c = Cell::new(x, y);
                if c != hole {
                    cells.push(c);
                }
            }
        }
        let body = body_of(&cells);
        let mut rng = SimpleRng::new(11);
        let mut scratch = Vec::new();

        let food = place_food(FoodPlacement::FreeCells, &mut rng, &body, &mut scratch);
        assert_eq!(food, Some(hole));
    }

    #[test]
    fn free_cells_on_a_full_grid_is_absent() {
        let mut cells = Vec::new();
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                cells.push(Cell::new(x, y));
            }
        }
        let body = body_of(&cells);
        let mut rng = SimpleRng::new(1);
        let mut scratch = Vec::new();

        assert_eq!(
            place_food(FoodPlacement::FreeCells, &mut rng, &body, &mut scratch),
            None
        );
    }

    #[test]
    fn anywhere_ignores_the_body_but_stays_on_the_grid() {
        let body = body_of(&[Cell::new(0, 0)]);
        let mut rng = SimpleRng::new(2);
        let mut scratch = Vec::new();
        for _ in 0..200 {
            let food = place_food(FoodPlacement::Anywhere, &mut rng, &body, &mut scratch);
            assert!(food.is_some_and(|c| c.in_bounds(GRID_SIZE)));
        }
        assert!(scratch.is_empty());
    }
}
