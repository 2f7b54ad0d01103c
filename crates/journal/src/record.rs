//! One journal line.
//!
//! Every record carries `type` and `ts` (milliseconds since the Unix epoch).
//! Records produced during play also carry the `episode` and the game `tick`.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::types::{GameEvent, GRID_SIZE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record {
    SessionStarted {
        ts: u64,
        seed: u32,
        rules: String,
        grid: i16,
        tick_ms: u32,
    },
    Turned {
        ts: u64,
        episode: u32,
        tick: u64,
        from: String,
        to: String,
    },
    FoodEaten {
        ts: u64,
        episode: u32,
        tick: u64,
        x: i16,
        y: i16,
        score: u32,
        length: u16,
    },
    GameOver {
        ts: u64,
        episode: u32,
        tick: u64,
        cause: String,
        x: i16,
        y: i16,
        score: u32,
        length: u16,
    },
    SessionStopped {
        ts: u64,
        episode: u32,
        tick: u64,
        best_score: u32,
    },
}

impl Record {
    pub fn session_started(seed: u32, rules: &str, tick_ms: u32) -> Self {
        Record::SessionStarted {
            ts: now_ms(),
            seed,
            rules: rules.to_string(),
            grid: GRID_SIZE,
            tick_ms,
        }
    }

    pub fn from_event(episode: u32, tick: u64, event: &GameEvent) -> Self {
        let ts = now_ms();
        match *event {
            GameEvent::Turned { from, to } => Record::Turned {
                ts,
                episode,
                tick,
                from: from.as_str().to_string(),
                to: to.as_str().to_string(),
            },
            GameEvent::FoodEaten { at, score, length } => Record::FoodEaten {
                ts,
                episode,
                tick,
                x: at.x,
                y: at.y,
                score,
                length,
            },
            GameEvent::GameOver {
                cause,
                at,
                score,
                length,
            } => Record::GameOver {
                ts,
                episode,
                tick,
                cause: cause.as_str().to_string(),
                x: at.x,
                y: at.y,
                score,
                length,
            },
        }
    }

    pub fn session_stopped(episode: u32, tick: u64, best_score: u32) -> Self {
        Record::SessionStopped {
            ts: now_ms(),
            episode,
            tick,
            best_score,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Record::SessionStarted { .. } => "session_started",
            Record::Turned { .. } => "turned",
            Record::FoodEaten { .. } => "food_eaten",
            Record::GameOver { .. } => "game_over",
            Record::SessionStopped { .. } => "session_stopped",
        }
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, CollisionCause, Direction};

    #[test]
    fn game_over_serializes_flat_with_type_tag() {
        let rec = Record::from_event(
            3,
            41,
            &GameEvent::GameOver {
                cause: CollisionCause::Wall,
                at: Cell::new(-1, 9),
                score: 7,
                length: 9,
            },
        );
        let v: serde_json::Value = serde_json::to_value(&rec).unwrap();
        assert_eq!(v["type"], "game_over");
        assert_eq!(v["cause"], "wall");
        assert_eq!(v["x"], -1);
        assert_eq!(v["episode"], 3);
        assert_eq!(v["tick"], 41);
        assert_eq!(v["score"], 7);
        assert!(v["ts"].as_u64().is_some());
    }

    #[test]
    fn turned_uses_direction_names() {
        let rec = Record::from_event(
            0,
            1,
            &GameEvent::Turned {
                from: Direction::Left,
                to: Direction::Up,
            },
        );
        let line = serde_json::to_string(&rec).unwrap();
        assert!(line.contains(r#""type":"turned""#));
        assert!(line.contains(r#""from":"left""#));
        assert!(line.contains(r#""to":"up""#));
    }

    #[test]
    fn kind_matches_the_serialized_tag() {
        let records = [
            Record::session_started(1, "standard", 150),
            Record::session_stopped(2, 300, 12),
            Record::from_event(
                0,
                5,
                &GameEvent::FoodEaten {
                    at: Cell::new(3, 3),
                    score: 1,
                    length: 3,
                },
            ),
        ];
        for rec in records {
            let v = serde_json::to_value(&rec).unwrap();
            assert_eq!(v["type"], rec.kind());
            let back: Record = serde_json::from_value(v).unwrap();
            assert_eq!(back, rec);
        }
    }
}
