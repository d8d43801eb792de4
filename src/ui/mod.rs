//! GUI collaborator built on egui/eframe.
//!
//! Presentation only: it owns no game rules and talks to the engine through
//! intents and snapshots.

mod app;
mod board_view;
mod effects;
mod theme;

pub use app::SkillGomokuApp;
pub use effects::SkillEffect;
