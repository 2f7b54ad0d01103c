//! Rule switches for the two places where the classic browser game behaves oddly.
//!
//! `Rules::standard()` is what the game plays by default. `Rules::legacy()`
//! brings back the browser game's collision and food quirks.
//!
//! Reversal handling is not a rule switch. Intents are always checked against
//! the direction committed on the last tick, so the browser game's two-key
//! reversal (Up then Left within one tick while moving Right) cannot happen
//! under either rule set.

/// Which body cells block the head on a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelfCollision {
    /// Every body cell blocks, except the tail when this move vacates it
    /// (i.e. the move does not eat).
    VacatingTail,
    /// Every body cell blocks except index 1 (the neck), whatever the move.
    SkipNeck,
}

/// Where new food may appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodPlacement {
    /// Uniform over cells not covered by the snake; absent when none are free.
    FreeCells,
    /// Uniform over the whole grid, snake cells included.
    Anywhere,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub self_collision: SelfCollision,
    pub food: FoodPlacement,
}

impl Rules {
    pub const fn standard() -> Self {
        Self {
            self_collision: SelfCollision::VacatingTail,
            food: FoodPlacement::FreeCells,
        }
    }

    pub const fn legacy() -> Self {
        Self {
            self_collision: SelfCollision::SkipNeck,
            food: FoodPlacement::Anywhere,
        }
    }

    /// Parse a rule-set name ("standard" or "legacy", case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Some(Self::standard()),
            "legacy" => Some(Self::legacy()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        if *self == Self::legacy() {
            "legacy"
        } else if *self == Self::standard() {
            "standard"
        } else {
            "custom"
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_rule_sets() {
        assert_eq!(Rules::from_str("standard"), Some(Rules::standard()));
        assert_eq!(Rules::from_str(" Legacy "), Some(Rules::legacy()));
        assert_eq!(Rules::from_str("hard"), None);
    }

    #[test]
    fn names_mixed_rule_sets_custom() {
        let mixed = Rules {
            self_collision: SelfCollision::SkipNeck,
            food: FoodPlacement::FreeCells,
        };
        assert_eq!(mixed.as_str(), "custom");
        assert_eq!(Rules::default().as_str(), "standard");
    }
}
