//! Skill Gomoku GUI
//!
//! Hotseat five-in-a-row with stone-removal and extra-turn skills.

use std::time::Duration;

use clap::Parser;
use skill_gomoku::config::{UiConfig, DEFAULT_EFFECT_MS, DEFAULT_REMOVAL_DELAY_MS};
use skill_gomoku::ui::SkillGomokuApp;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "skill-gomoku", about = "Five-in-a-row with skills")]
struct Cli {
    /// Milliseconds a removed stone stays drawn before it disappears
    #[arg(long, default_value_t = DEFAULT_REMOVAL_DELAY_MS)]
    removal_delay_ms: u64,

    /// Length of the skill animation in milliseconds
    #[arg(long, default_value_t = DEFAULT_EFFECT_MS)]
    effect_ms: u64,

    #[arg(long, default_value_t = 900.0)]
    width: f32,

    #[arg(long, default_value_t = 700.0)]
    height: f32,
}

impl Cli {
    fn ui_config(&self) -> UiConfig {
        UiConfig {
            removal_delay: Duration::from_millis(self.removal_delay_ms),
            effect_duration: Duration::from_millis(self.effect_ms),
            window_size: [self.width, self.height],
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,skill_gomoku=debug")),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.ui_config();
    config.validate()?;
    info!(?config, "starting skill gomoku");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([640.0, 480.0])
            .with_title("Skill Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Skill Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(SkillGomokuApp::new(cc, config)))),
    )?;
    Ok(())
}
