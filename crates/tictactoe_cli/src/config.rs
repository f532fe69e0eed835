//! Game configuration loaded from TOML and overridden by CLI flags.

use crate::cli::ComputerSeats;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tictactoe_core::{Mark, Player, Seats};
use tracing::{debug, info, instrument, warn};

/// Largest side length the exhaustive search finishes on in reasonable time.
const CALIBRATED_SIZE: usize = 3;

/// Settings for one game.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length.
    #[serde(default = "default_size")]
    size: usize,

    /// Evaluate top-level candidates on a rayon pool.
    #[serde(default)]
    parallel: bool,

    /// Memoize search scores in memory for the rest of the process.
    #[serde(default = "default_cache")]
    cache: bool,

    /// Players in seating order.
    #[serde(default = "default_players")]
    players: Vec<PlayerConfig>,
}

/// One seat in the config file.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Name shown in prompts.
    name: String,

    /// Mark placed by this player.
    mark: Mark,

    /// Whether the search engine plays this seat.
    #[serde(default)]
    computer: bool,
}

fn default_size() -> usize {
    3
}

fn default_cache() -> bool {
    true
}

fn default_players() -> Vec<PlayerConfig> {
    vec![
        PlayerConfig {
            name: "Player 1".to_string(),
            mark: Mark::O,
            computer: false,
        },
        PlayerConfig {
            name: "Player 2".to_string(),
            mark: Mark::X,
            computer: true,
        },
    ]
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: default_size(),
            parallel: false,
            cache: default_cache(),
            players: default_players(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(size = config.size, "Config loaded successfully");
        Ok(config)
    }

    /// Applies command-line overrides.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        size: Option<usize>,
        computer: Option<ComputerSeats>,
        parallel: bool,
        no_cache: bool,
    ) -> Self {
        if let Some(size) = size {
            self.size = size;
        }
        if let Some(computer) = computer {
            for (player, flag) in self.players.iter_mut().zip(computer.flags()) {
                player.computer = flag;
            }
        }
        self.parallel |= parallel;
        if no_cache {
            self.cache = false;
        }
        self
    }

    /// Builds the seating. Requires exactly two players with distinct marks.
    #[instrument(skip(self))]
    pub fn seats(&self) -> Result<Seats, ConfigError> {
        let [first, second] = self.players.as_slice() else {
            return Err(ConfigError::new(format!(
                "Exactly 2 players are required, found {}",
                self.players.len()
            )));
        };
        if self.size > CALIBRATED_SIZE && self.players.iter().any(|p| p.computer) {
            warn!(
                size = self.size,
                "Exhaustive search above 3x3 may take a very long time"
            );
        }
        Seats::new(first.to_player(), second.to_player())
            .map_err(|e| ConfigError::new(format!("Invalid players: {}", e)))
    }
}

impl PlayerConfig {
    fn to_player(&self) -> Player {
        Player::new(self.name.clone(), self.mark, self.computer)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_matches_classic_game() {
        let config = GameConfig::default();
        assert_eq!(*config.size(), 3);
        assert!(*config.cache());
        let seats = config.seats().unwrap();
        assert_eq!(seats.for_turn(1).name(), "Player 1");
        assert_eq!(seats.for_turn(1).mark(), Mark::O);
        assert!(seats.for_turn(2).is_computer());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
size = 4
parallel = true

[[players]]
name = "Ada"
mark = "X"
computer = true

[[players]]
name = "Bo"
mark = "O"
"#
        )
        .unwrap();

        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.size(), 4);
        assert!(*config.parallel());
        assert!(*config.cache());

        let seats = config.seats().unwrap();
        assert_eq!(seats.for_turn(1).name(), "Ada");
        assert_eq!(seats.for_turn(1).mark(), Mark::X);
        assert!(!seats.for_turn(2).is_computer());
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = GameConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "size = \"three\"").unwrap();
        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_overrides() {
        let config =
            GameConfig::default().with_overrides(Some(2), Some(ComputerSeats::Both), true, true);
        assert_eq!(*config.size(), 2);
        assert!(*config.parallel());
        assert!(!*config.cache());
        assert!(config.players().iter().all(|p| *p.computer()));
    }

    #[test]
    fn test_seats_validation() {
        let mut config = GameConfig::default();
        config.players.pop();
        assert!(config.seats().is_err());

        let mut config = GameConfig::default();
        config.players[1].mark = Mark::O;
        let err = config.seats().unwrap_err();
        assert!(err.message.contains("Invalid players"));
    }
}
