//! Whose move it is

use serde::{Deserialize, Serialize};

use crate::board::Player;

/// What happened to the turn once a turn unit completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// An extra turn was consumed; the same player moves again
    Retained(Player),
    /// The move passed to this player
    Passed(Player),
}

/// Tracks the player to move and at most one pending extra turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnController {
    current: Player,
    extra_turn: bool,
}

impl TurnController {
    pub fn new() -> Self {
        Self {
            current: Player::First,
            extra_turn: false,
        }
    }

    #[inline]
    pub fn current(&self) -> Player {
        self.current
    }

    #[inline]
    pub fn has_extra_turn(&self) -> bool {
        self.extra_turn
    }

    /// Flag an extra turn for the current player. At most one is pending.
    pub fn grant_extra_turn(&mut self) {
        self.extra_turn = true;
    }

    /// Finish a turn unit: consume the extra turn if any, otherwise pass.
    pub fn complete_turn(&mut self) -> TurnOutcome {
        if self.extra_turn {
            self.extra_turn = false;
            TurnOutcome::Retained(self.current)
        } else {
            self.current = self.current.opponent();
            TurnOutcome::Passed(self.current)
        }
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternates_without_extra_turn() {
        let mut turn = TurnController::new();
        assert_eq!(turn.complete_turn(), TurnOutcome::Passed(Player::Second));
        assert_eq!(turn.complete_turn(), TurnOutcome::Passed(Player::First));
    }

    #[test]
    fn test_extra_turn_is_consumed_once() {
        let mut turn = TurnController::new();
        turn.grant_extra_turn();
        turn.grant_extra_turn();
        assert!(turn.has_extra_turn());
        assert_eq!(turn.complete_turn(), TurnOutcome::Retained(Player::First));
        assert!(!turn.has_extra_turn());
        assert_eq!(turn.complete_turn(), TurnOutcome::Passed(Player::Second));
    }
}
