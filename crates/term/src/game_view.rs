//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested. It also owns the
//! screen layout, so mouse clicks can be hit-tested against the same button
//! rectangles that were drawn.

use crate::core::{GameSnapshot, Tile};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Direction, GRID_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned screen rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.x
            && row >= self.y
            && (col as u32) < self.x as u32 + self.w as u32
            && (row as u32) < self.y as u32 + self.h as u32
    }
}

/// Where everything goes for one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Grid plus its one-cell border.
    pub frame: Rect,
    /// Side panel, when the viewport is wide enough.
    pub panel: Option<Rect>,
    /// Arrow buttons keyed by the arrow-key name they press, when the panel has room.
    pub buttons: Option<[(&'static str, Rect); 4]>,
}

const PANEL_GAP: u16 = 2;
const PANEL_W: u16 = 15;
const BUTTON_W: u16 = 5;
/// Row (relative to the panel top) of the button pad's first line.
const PAD_ROW: u16 = 10;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const SNAKE_HEAD: Rgb = Rgb::new(150, 255, 150);
const SNAKE_BODY: Rgb = Rgb::new(100, 220, 120);
const FOOD: Rgb = Rgb::new(240, 90, 90);

/// A lightweight terminal renderer for the Snake game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn layout(&self, viewport: Viewport) -> Layout {
        let frame_w = (GRID_SIZE as u16) * self.cell_w + 2;
        let frame_h = (GRID_SIZE as u16) * self.cell_h + 2;

        // Center frame and panel together when both fit, otherwise the frame alone.
        let with_panel = frame_w + PANEL_GAP + PANEL_W;
        let has_panel = viewport.width >= with_panel;
        let group_w = if has_panel { with_panel } else { frame_w };

        let x = viewport.width.saturating_sub(group_w) / 2;
        let y = viewport.height.saturating_sub(frame_h) / 2;
        let frame = Rect {
            x,
            y,
            w: frame_w,
            h: frame_h,
        };

        let panel = has_panel.then(|| Rect {
            x: x + frame_w + PANEL_GAP,
            y,
            w: PANEL_W,
            h: viewport.height.saturating_sub(y),
        });

        let buttons = panel.and_then(|p| {
            let top = p.y + PAD_ROW;
            if top + 3 > viewport.height {
                return None;
            }
            let button = |dx: u16, dy: u16| Rect {
                x: p.x + dx,
                y: top + dy,
                w: BUTTON_W,
                h: 1,
            };
            Some([
                ("ArrowUp", button(BUTTON_W, 0)),
                ("ArrowLeft", button(0, 1)),
                ("ArrowRight", button(BUTTON_W * 2, 1)),
                ("ArrowDown", button(BUTTON_W, 2)),
            ])
        });

        Layout {
            frame,
            panel,
            buttons,
        }
    }

    /// Arrow-key name of the button, if any, under terminal cell `(col, row)`.
    pub fn button_at(&self, viewport: Viewport, col: u16, row: u16) -> Option<&'static str> {
        self.layout(viewport)
            .buttons?
            .iter()
            .find(|(_, rect)| rect.contains(col, row))
            .map(|(name, _)| *name)
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = self.layout(viewport);
        let frame = layout.frame;

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w - 2,
            frame.h - 2,
            ' ',
            CellStyle::new(Rgb::new(80, 80, 90), BOARD_BG),
        );
        self.draw_border(fb, frame, border);
        self.draw_title(fb, frame, snap.score);

        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                self.draw_tile(fb, frame, x as u16, y as u16, snap.tile(x, y));
            }
        }

        if let Some(panel) = layout.panel {
            self.draw_side_panel(fb, snap, panel, viewport);
        }
        if let Some(buttons) = layout.buttons {
            self.draw_buttons(fb, &buttons, snap.heading);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, r: Rect, style: CellStyle) {
        if r.w < 2 || r.h < 2 {
            return;
        }

        fb.put_char(r.x, r.y, '┌', style);
        fb.put_char(r.x + r.w - 1, r.y, '┐', style);
        fb.put_char(r.x, r.y + r.h - 1, '└', style);
        fb.put_char(r.x + r.w - 1, r.y + r.h - 1, '┘', style);

        for dx in 1..r.w - 1 {
            fb.put_char(r.x + dx, r.y, '─', style);
            fb.put_char(r.x + dx, r.y + r.h - 1, '─', style);
        }
        for dy in 1..r.h - 1 {
            fb.put_char(r.x, r.y + dy, '│', style);
            fb.put_char(r.x + r.w - 1, r.y + dy, '│', style);
        }
    }

    /// Score embedded in the top border, so it shows even without the panel.
    fn draw_title(&self, fb: &mut FrameBuffer, frame: Rect, score: u32) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let x = frame.x + 2;
        fb.put_str(x, frame.y, " Score: ", style);
        fb.put_u32(x + 8, frame.y, score, style);
        let digits = if score == 0 { 1 } else { score.ilog10() as u16 + 1 };
        fb.put_char(x + 8 + digits, frame.y, ' ', style);
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, frame: Rect, x: u16, y: u16, tile: Tile) {
        let px = frame.x + 1 + x * self.cell_w;
        let py = frame.y + 1 + y * self.cell_h;
        match tile {
            Tile::Empty => {
                let style = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
                fb.put_char(px, py, '·', style);
            }
            Tile::Head => {
                let style = CellStyle::new(SNAKE_HEAD, BOARD_BG).bold();
                fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
            }
            Tile::Body => {
                let style = CellStyle::new(SNAKE_BODY, BOARD_BG);
                fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
            }
            Tile::Food => {
                let style = CellStyle::new(FOOD, BOARD_BG).bold();
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
                fb.put_char(px, py, '●', style);
            }
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, panel: Rect, viewport: Viewport) {
        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let x = panel.x;
        let mut y = panel.y;
        fb.put_str(x, y, "SCORE", label);
        fb.put_u32(x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(x, y, "BEST", label);
        fb.put_u32(x, y + 1, snap.best_score, value);
        y += 3;

        fb.put_str(x, y, "LENGTH", label);
        fb.put_u32(x, y + 1, snap.length() as u32, value);

        let hint_y = panel.y + PAD_ROW + 4;
        if hint_y < viewport.height {
            fb.put_str(x, hint_y, "q quit", value.dim());
        }
    }

    fn draw_buttons(&self, fb: &mut FrameBuffer, buttons: &[(&'static str, Rect); 4], heading: Direction) {
        let idle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(60, 60, 70));
        let active = CellStyle::new(Rgb::new(20, 20, 20), SNAKE_BODY).bold();

        for (name, rect) in buttons {
            let style = if *name == key_name(heading) { active } else { idle };
            fb.fill_rect(rect.x, rect.y, rect.w, rect.h, ' ', style);
            fb.put_char(rect.x + rect.w / 2, rect.y, arrow(name), style);
        }
    }
}

fn key_name(dir: Direction) -> &'static str {
    match dir {
        Direction::Up => "ArrowUp",
        Direction::Down => "ArrowDown",
        Direction::Left => "ArrowLeft",
        Direction::Right => "ArrowRight",
    }
}

fn arrow(name: &str) -> char {
    match name {
        "ArrowUp" => '▲',
        "ArrowDown" => '▼',
        "ArrowLeft" => '◀',
        _ => '▶',
    }
}
