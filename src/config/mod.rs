//! Game timing and length settings.
//!
//! Validation uses Stillwater's `Validation` type so a bad configuration
//! reports every broken rule in one pass.
//!
//! # Example
//!
//! ```rust
//! use gesture_rps::config::GameConfig;
//! use std::time::Duration;
//!
//! let config = GameConfig::builder()
//!     .countdown_ticks(1)
//!     .round_end_delay(Duration::from_millis(500))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.max_rounds, 8);
//! assert_eq!(config.countdown_ticks, 1);
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub mod builder;
pub mod error;

pub use builder::GameConfigBuilder;
pub use error::{ConfigError, ConfigViolation};

/// Rounds per game.
pub const MAX_ROUNDS: usize = 8;

/// Countdown length in slow ticks.
pub const COUNTDOWN_TICKS: u32 = 3;

/// Frame polling interval.
pub const FAST_TICK: Duration = Duration::from_millis(33);

/// Countdown interval.
pub const SLOW_TICK: Duration = Duration::from_secs(1);

/// How long a round's result stays on screen.
pub const ROUND_END_DELAY: Duration = Duration::from_secs(2);

/// Settings for the round state machine and the event loop driving it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Rounds per game
    pub max_rounds: usize,

    /// Slow ticks between the start of a round and the capture
    pub countdown_ticks: u32,

    /// Frame polling interval
    #[serde(with = "millis")]
    pub fast_tick: Duration,

    /// Countdown interval
    #[serde(with = "millis")]
    pub slow_tick: Duration,

    /// Time the round result stays up before the next round
    #[serde(with = "millis")]
    pub round_end_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rounds: MAX_ROUNDS,
            countdown_ticks: COUNTDOWN_TICKS,
            fast_tick: FAST_TICK,
            slow_tick: SLOW_TICK,
            round_end_delay: ROUND_END_DELAY,
        }
    }
}

impl GameConfig {
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::new()
    }

    /// Check all rules, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = vec![
            require(self.max_rounds > 0, ConfigViolation::NoRounds),
            require(self.countdown_ticks > 0, ConfigViolation::NoCountdown),
        ];

        for (name, interval) in [
            ("fast_tick", self.fast_tick),
            ("slow_tick", self.slow_tick),
            ("round_end_delay", self.round_end_delay),
        ] {
            checks.push(require(
                !interval.is_zero(),
                ConfigViolation::ZeroInterval { name },
            ));
        }

        checks.push(require(
            self.fast_tick < self.slow_tick,
            ConfigViolation::FastTickTooSlow {
                fast: self.fast_tick,
                slow: self.slow_tick,
            },
        ));

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate, turning accumulated violations into a `ConfigError`.
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(errors) => {
                Err(ConfigError::Invalid(errors.iter().cloned().collect()))
            }
        }
    }

    /// Load a JSON configuration. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validated()
    }
}

fn require(ok: bool, violation: ConfigViolation) -> Validation<(), NonEmptyVec<ConfigViolation>> {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}

mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
