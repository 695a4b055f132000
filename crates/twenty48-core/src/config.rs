//! Game configuration.

use crate::board::{is_valid_tile, Tile};
use crate::status::DEFAULT_WIN_TILE;
use serde::{Deserialize, Deserializer, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Board sizes a session may be played on
pub const SUPPORTED_SIZES: RangeInclusive<usize> = 3..=8;

/// Board size used when none is given
pub const DEFAULT_SIZE: usize = 4;

/// Errors from validating a `GameConfig`
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ConfigError {
    #[error("Unsupported board size {0} (expected 3-8)")]
    UnsupportedSize(usize),

    #[error("Win tile {0} must be a power of two >= 4")]
    InvalidWinTile(Tile),
}

/// Settings for a game session.
///
/// Deserialization fills missing fields with defaults and then runs
/// [`GameConfig::validate`], so a config read from JSON is always valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    /// Side length of the board
    pub size: usize,
    /// Tile value that wins the game
    pub win_tile: Tile,
    /// Seed for the tile spawner; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            win_tile: DEFAULT_WIN_TILE,
            seed: None,
        }
    }
}

/// Wire form of `GameConfig` before validation
#[derive(Deserialize)]
#[serde(default)]
struct UncheckedConfig {
    size: usize,
    win_tile: Tile,
    seed: Option<u64>,
}

impl Default for UncheckedConfig {
    fn default() -> Self {
        let GameConfig {
            size,
            win_tile,
            seed,
        } = GameConfig::default();
        Self {
            size,
            win_tile,
            seed,
        }
    }
}

impl<'de> Deserialize<'de> for GameConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = UncheckedConfig::deserialize(deserializer)?;
        let config = GameConfig {
            size: raw.size,
            win_tile: raw.win_tile,
            seed: raw.seed,
        };
        config.validate().map_err(serde::de::Error::custom)?;
        Ok(config)
    }
}

impl GameConfig {
    /// Config with the given size and defaults elsewhere
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Check the size against `SUPPORTED_SIZES`
    pub fn validate_size(size: usize) -> Result<(), ConfigError> {
        if SUPPORTED_SIZES.contains(&size) {
            Ok(())
        } else {
            Err(ConfigError::UnsupportedSize(size))
        }
    }

    /// Validate every field
    pub fn validate(&self) -> Result<(), ConfigError> {
        Self::validate_size(self.size)?;
        // A win tile of 2 would be won by the first spawn
        if self.win_tile < 4 || !is_valid_tile(self.win_tile) {
            return Err(ConfigError::InvalidWinTile(self.win_tile));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.size, 4);
        assert_eq!(config.win_tile, 2048);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_size_limits() {
        for size in 3..=8 {
            assert!(GameConfig::with_size(size).validate().is_ok());
        }
        assert_eq!(
            GameConfig::with_size(2).validate(),
            Err(ConfigError::UnsupportedSize(2))
        );
        assert_eq!(
            GameConfig::with_size(9).validate(),
            Err(ConfigError::UnsupportedSize(9))
        );
    }

    #[test]
    fn test_win_tile_must_be_power_of_two() {
        let mut config = GameConfig::default();
        for bad in [0, 2, 3, 1000] {
            config.win_tile = bad;
            assert_eq!(config.validate(), Err(ConfigError::InvalidWinTile(bad)));
        }
        config.win_tile = 512;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"size": 6}"#).unwrap();
        assert_eq!(config.size, 6);
        assert_eq!(config.win_tile, 2048);

        let config: GameConfig = serde_json::from_str(r#"{"seed": 11}"#).unwrap();
        assert_eq!(config.size, 4);
        assert_eq!(config.seed, Some(11));
    }

    #[test]
    fn test_invalid_json_config_is_rejected() {
        let err = serde_json::from_str::<GameConfig>(r#"{"size": 2}"#).unwrap_err();
        assert!(err.to_string().contains("Unsupported board size 2"));

        let err = serde_json::from_str::<GameConfig>(r#"{"win_tile": 3}"#).unwrap_err();
        assert!(err.to_string().contains("Win tile 3"));

        let config = GameConfig::with_size(5);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<GameConfig>(&json).unwrap(), config);
    }
}
