//! Terminal Snake runner (default binary).
//!
//! Keyboard and the clickable arrow pad both feed one intent channel; the
//! session applies at most one advance per tick and the view is redrawn
//! after every tick.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use tui_snake::engine::{Session, SessionConfig, SystemClock};
use tui_snake::input::{direction_for_key, direction_for_name, intent_channel, should_quit};
use tui_snake::journal::{Journal, JournalConfig, Record};
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

struct Summary {
    best_score: u32,
    episodes: u32,
}

fn main() -> Result<()> {
    let config = SessionConfig::from_env()?;
    let journal = Journal::open(&JournalConfig::from_env())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, journal.as_ref());

    // Always try to restore terminal state.
    let _ = term.exit();
    let summary = result?;

    eprintln!(
        "[Snake] best score {} over {} game(s) (seed {}, rules {})",
        summary.best_score,
        summary.episodes,
        config.seed,
        config.rules.as_str()
    );
    if let Some(journal) = journal {
        let path = journal.path().display().to_string();
        let lines = journal.close()?;
        eprintln!("[Snake] journal: {} line(s) appended to {}", lines, path);
    }
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &SessionConfig, journal: Option<&Journal>) -> Result<Summary> {
    let (keyboard, intents) = intent_channel();
    let buttons = keyboard.clone();

    let mut session = Session::new(config, intents, SystemClock::new());
    let view = GameView::default();

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut fb = FrameBuffer::new(w, h);
    let mut dirty = true;

    if let Some(journal) = journal {
        journal.record(Record::session_started(
            config.seed,
            config.rules.as_str(),
            config.tick_ms,
        ));
    }
    session.start();

    loop {
        if dirty {
            view.render_into(session.snapshot(), viewport, &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let timeout = session.next_timeout().unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        break;
                    }
                    if let Some(dir) = direction_for_key(key) {
                        keyboard.send(dir);
                    }
                }
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column,
                    row,
                    ..
                }) => {
                    let pressed = view.button_at(viewport, column, row);
                    if let Some(dir) = pressed.and_then(direction_for_name) {
                        buttons.send(dir);
                    }
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        // Tick.
        while let Some(report) = session.pump() {
            if let Some(journal) = journal {
                let tick = session.game().tick();
                for ev in &report.events {
                    journal.record(Record::from_event(report.episode, tick, ev));
                }
            }
            dirty = true;
        }
    }

    let game = session.game();
    let summary = Summary {
        best_score: game.best_score(),
        episodes: game.episode_id() + 1,
    };
    if let Some(journal) = journal {
        journal.record(Record::session_stopped(
            game.episode_id(),
            game.tick(),
            game.best_score(),
        ));
    }
    session.stop();
    Ok(summary)
}
