//! Intents in, events out.
//!
//! Intents are what the collaborator asks for. Events describe what a
//! successful intent changed, in causal order, so the collaborator can pick
//! its own sounds and animations.

use serde::{Deserialize, Serialize};

use super::GameState;
use crate::board::{Player, Pos};
use crate::skill::SkillKind;

/// A discrete request from the presentation layer.
///
/// Coordinates are signed so that off-board input is representable and
/// rejected rather than wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    PlaceStone { row: i32, col: i32 },
    ActivateSkill(SkillKind),
    ResolveTarget { row: i32, col: i32 },
    CancelSkill,
    DismissEffect,
    Reset,
}

/// Something a successful intent did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    StonePlaced { player: Player, pos: Pos },
    /// Targeting mode entered
    SkillActivated { player: Player, kind: SkillKind },
    SkillCancelled { player: Player, kind: SkillKind },
    StoneRemoved { by: Player, owner: Player, pos: Pos },
    ExtraTurnGranted { player: Player, kind: SkillKind },
    TurnPassed { to: Player },
    GameWon { winner: Player, line: Vec<Pos> },
    GameDrawn,
    EffectDismissed,
    GameReset,
}

/// Result of applying an intent: the next state and what changed.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: GameState,
    pub events: Vec<GameEvent>,
}
