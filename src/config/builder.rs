//! Builder for game configurations.

use super::{ConfigError, GameConfig};
use std::time::Duration;

/// Builder for constructing a validated `GameConfig` with a fluent API.
///
/// Unset fields keep their defaults.
pub struct GameConfigBuilder {
    config: GameConfig,
}

impl GameConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
        }
    }

    /// Set rounds per game
    pub fn max_rounds(mut self, n: usize) -> Self {
        self.config.max_rounds = n;
        self
    }

    /// Set countdown length in slow ticks
    pub fn countdown_ticks(mut self, n: u32) -> Self {
        self.config.countdown_ticks = n;
        self
    }

    /// Set frame polling interval
    pub fn fast_tick(mut self, interval: Duration) -> Self {
        self.config.fast_tick = interval;
        self
    }

    /// Set countdown interval
    pub fn slow_tick(mut self, interval: Duration) -> Self {
        self.config.slow_tick = interval;
        self
    }

    /// Set how long round results stay up
    pub fn round_end_delay(mut self, delay: Duration) -> Self {
        self.config.round_end_delay = delay;
        self
    }

    /// Build the configuration.
    /// Returns every violated rule if validation fails.
    pub fn build(self) -> Result<GameConfig, ConfigError> {
        self.config.validated()
    }
}

impl Default for GameConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
