//! Error types
//!
//! Every engine failure is a rejection: state is left untouched and the
//! caller learns why.

use crate::board::{Player, Pos};
use crate::game::{GamePhase, InteractionMode};

/// Why an intent was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("coordinate ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("cell {0} is already occupied")]
    CellOccupied(Pos),

    #[error("intent is not accepted in {0} mode")]
    WrongMode(InteractionMode),

    #[error("game is over ({0})")]
    WrongPhase(GamePhase),

    #[error("cell {0} does not hold an opponent stone")]
    InvalidTarget(Pos),

    #[error("{0} has no skill charges left")]
    InsufficientCharges(Player),

    #[error("{0} already has an extra turn pending")]
    ExtraTurnPending(Player),
}

/// Errors that can occur when building presentation settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("removal delay {removal_ms}ms exceeds effect duration {effect_ms}ms")]
    DelayExceedsEffect { removal_ms: u64, effect_ms: u64 },

    #[error("window size {width}x{height} is too small")]
    WindowTooSmall { width: f32, height: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_display() {
        let err = Rejection::OutOfBounds { row: -1, col: 15 };
        assert_eq!(err.to_string(), "coordinate (-1, 15) is off the board");

        let err = Rejection::InvalidTarget(Pos::new(3, 4));
        assert_eq!(err.to_string(), "cell (3, 4) does not hold an opponent stone");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::DelayExceedsEffect {
            removal_ms: 2000,
            effect_ms: 1000,
        };
        assert_eq!(
            err.to_string(),
            "removal delay 2000ms exceeds effect duration 1000ms"
        );
    }
}
