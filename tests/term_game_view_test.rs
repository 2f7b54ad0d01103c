use tui_snake::core::{GameState, Rules};
use tui_snake::input::direction_for_name;
use tui_snake::term::{encode_diff_into, FrameBuffer, GameView, Viewport};
use tui_snake::types::{Cell, Direction};

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // grid pixels = 25*2 by 25*1 => 50x25
    // plus border => 52x27
    let fb = view.render(&snap, Viewport::new(52, 27));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(51, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 26).unwrap().ch, '└');
    assert_eq!(fb.get(51, 26).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_snake_two_chars_wide_and_food_distinctly() {
    let game = GameState::with_layout(
        1,
        Rules::standard(),
        &[Cell::new(0, 24), Cell::new(1, 24)],
        Direction::Left,
        Some(Cell::new(24, 0)),
    );
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(52, 27));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let head = fb.get(1, 25).unwrap();
    let body = fb.get(3, 25).unwrap();
    assert_eq!(head.ch, '█');
    assert_eq!(fb.get(2, 25).unwrap().ch, '█');
    assert_eq!(body.ch, '█');
    assert_ne!(head.style, body.style);

    let food = fb.get(1 + 24 * 2, 1).unwrap();
    assert_eq!(food.ch, '●');
    assert_ne!(food.style.fg, body.style.fg);

    // Empty cells stay dotted.
    assert_eq!(fb.get(1 + 10 * 2, 10).unwrap().ch, '·');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameState::new(1).snapshot();
    snap.score = 1234;
    snap.best_score = 4321;

    let view = GameView::default();
    let all = screen_text(&view.render(&snap, Viewport::new(80, 30)));

    assert!(all.contains("SCORE"));
    assert!(all.contains("1234"));
    assert!(all.contains("BEST"));
    assert!(all.contains("4321"));
    assert!(all.contains("LENGTH"));
    assert!(all.contains('▲'));
    assert!(all.contains('▼'));
    assert!(all.contains('◀'));
    assert!(all.contains('▶'));
}

#[test]
fn term_view_skips_panel_on_narrow_terminals_but_keeps_score() {
    let mut snap = GameState::new(1).snapshot();
    snap.score = 5;

    let view = GameView::default();
    let vp = Viewport::new(60, 27);
    let all = screen_text(&view.render(&snap, vp));

    assert!(!all.contains("BEST"));
    assert!(all.contains("Score: 5"));
    assert_eq!(view.button_at(vp, 59, 12), None);
}

#[test]
fn term_view_buttons_hit_where_they_are_drawn() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();
    let vp = Viewport::new(80, 30);
    let fb = view.render(&snap, vp);

    let mut seen = Vec::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let expected = match fb.get(x, y).unwrap().ch {
                '▲' => Direction::Up,
                '▼' => Direction::Down,
                '◀' => Direction::Left,
                '▶' => Direction::Right,
                _ => continue,
            };
            let name = view.button_at(vp, x, y).expect("arrow glyphs sit on buttons");
            assert_eq!(direction_for_name(name), Some(expected));
            seen.push(expected);
        }
    }
    assert_eq!(seen.len(), 4);
}

#[test]
fn one_tick_redraws_only_a_few_cells() {
    let view = GameView::default();
    let vp = Viewport::new(80, 30);

    let mut game = GameState::with_layout(
        1,
        Rules::standard(),
        &[Cell::new(12, 12), Cell::new(13, 12)],
        Direction::Left,
        Some(Cell::new(3, 3)),
    );
    let before = view.render(&game.snapshot(), vp);
    game.advance(Direction::Left);
    let after = view.render(&game.snapshot(), vp);

    let mut diff = Vec::new();
    encode_diff_into(&before, &after, &mut diff).unwrap();
    let mut full = Vec::new();
    tui_snake::term::encode_full_into(&after, &mut full).unwrap();

    assert!(!diff.is_empty());
    assert!(diff.len() * 10 < full.len());
}
