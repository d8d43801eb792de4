//! Presentation settings for the desktop collaborator
//!
//! Game rules are fixed constants and are not configured here.

use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_REMOVAL_DELAY_MS: u64 = 100;
pub const DEFAULT_EFFECT_MS: u64 = 1000;

const MIN_WIDTH: f32 = 640.0;
const MIN_HEIGHT: f32 = 480.0;

/// Timing and window settings for the GUI
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiConfig {
    /// How long a removed stone stays drawn before the cleared cell shows
    pub removal_delay: Duration,
    /// Total length of the skill burst animation
    pub effect_duration: Duration,
    pub window_size: [f32; 2],
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            removal_delay: Duration::from_millis(DEFAULT_REMOVAL_DELAY_MS),
            effect_duration: Duration::from_millis(DEFAULT_EFFECT_MS),
            window_size: [900.0, 700.0],
        }
    }
}

impl UiConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.removal_delay > self.effect_duration {
            return Err(ConfigError::DelayExceedsEffect {
                removal_ms: self.removal_delay.as_millis() as u64,
                effect_ms: self.effect_duration.as_millis() as u64,
            });
        }
        let [width, height] = self.window_size;
        if width < MIN_WIDTH || height < MIN_HEIGHT {
            return Err(ConfigError::WindowTooSmall { width, height });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(UiConfig::default().validate().is_ok());
    }

    #[test]
    fn test_delay_longer_than_effect_rejected() {
        let config = UiConfig {
            removal_delay: Duration::from_millis(1500),
            ..UiConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DelayExceedsEffect {
                removal_ms: 1500,
                effect_ms: 1000
            })
        ));
    }

    #[test]
    fn test_tiny_window_rejected() {
        let config = UiConfig {
            window_size: [200.0, 900.0],
            ..UiConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::WindowTooSmall { .. })
        ));
    }
}
