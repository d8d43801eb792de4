//! Skill burst animation
//!
//! The engine has already removed the stone when this starts. The animation
//! keeps drawing the removed stone for the configured delay, then plays the
//! burst until the effect duration runs out.

use std::time::{Duration, Instant};

use crate::game::PendingEffect;
use crate::Player;

/// A running skill animation
#[derive(Debug, Clone, Copy)]
pub struct SkillEffect {
    pub effect: PendingEffect,
    /// Owner of the removed stone, for the lingering draw
    pub owner: Player,
    started: Instant,
}

impl SkillEffect {
    pub fn new(effect: PendingEffect, owner: Player) -> Self {
        Self {
            effect,
            owner,
            started: Instant::now(),
        }
    }

    fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Whether the removed stone should still be drawn
    pub fn shows_removed_stone(&self, removal_delay: Duration) -> bool {
        self.elapsed() < removal_delay
    }

    /// Animation progress in [0, 1]
    pub fn progress(&self, duration: Duration) -> f32 {
        if duration.is_zero() {
            return 1.0;
        }
        (self.elapsed().as_secs_f32() / duration.as_secs_f32()).min(1.0)
    }

    pub fn is_complete(&self, duration: Duration) -> bool {
        self.elapsed() >= duration
    }
}
