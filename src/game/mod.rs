//! Game state machine
//!
//! [`GameState`] is the whole truth of a game and doubles as the snapshot
//! handed to the presentation layer. [`GameState::apply`] is a pure
//! transition: it returns the next state and the events produced, or a
//! [`Rejection`](crate::error::Rejection) with the original state untouched.

pub mod intent;
pub mod state;
pub mod turn;

use serde::{Deserialize, Serialize};

use crate::board::{Player, Pos};
use crate::skill::SkillKind;

pub use intent::{GameEvent, Intent, Transition};
pub use state::GameState;
pub use turn::{TurnController, TurnOutcome};

/// Whether the game is still running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    Won(Player),
    Draw,
}

impl GamePhase {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GamePhase::Playing => f.write_str("playing"),
            GamePhase::Won(player) => write!(f, "{} won", player),
            GamePhase::Draw => f.write_str("draw"),
        }
    }
}

/// How a board-coordinate intent is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    /// Clicks place stones
    #[default]
    Normal,
    /// Clicks pick a target for the pending skill
    SkillTargeting(SkillKind),
}

impl std::fmt::Display for InteractionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InteractionMode::Normal => f.write_str("normal"),
            InteractionMode::SkillTargeting(kind) => write!(f, "{} targeting", kind),
        }
    }
}

/// Advisory description of a skill effect the collaborator may animate.
///
/// The board already reflects the effect when this is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingEffect {
    pub kind: SkillKind,
    pub target: Pos,
}
