//! YAML configuration: where history lives, plus optional custom games.
//!
//! ```yaml
//! history-file: "gametime_history.csv"
//! games:
//!   - name: sleep
//!     strategies: [minimax, nashEquilibrium]
//!     timeframes:
//!       - name: night
//!         actions: ["Scroll Phone", "Lights Out"]
//!         payoffs: [[-4, -1], [2, 4]]
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_yaml::from_reader;
use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::catalog::GameCatalog;
use crate::domain::{CatalogError, Game, PayoffMatrix, Timeframe};
use crate::strategy::StrategyKind;

pub const DEFAULT_CONFIG_FILE: &str = "gametime.yml";
pub const DEFAULT_HISTORY_FILE: &str = "gametime_history.csv";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serde YAML Error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid game '{game}': {source}")]
    Game {
        game: String,
        #[source]
        source: CatalogError,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeframeConfig {
    pub name: String,
    pub actions: Vec<String>,
    pub payoffs: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub name: String,
    /// All strategies when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategies: Option<Vec<StrategyKind>>,
    pub timeframes: Vec<TimeframeConfig>,
}

impl GameConfig {
    pub fn to_game(&self) -> Result<Game, CatalogError> {
        let timeframes = self
            .timeframes
            .iter()
            .map(|tf| {
                Timeframe::new(
                    tf.name.clone(),
                    tf.actions.clone(),
                    PayoffMatrix::new(tf.payoffs.clone())?,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        let strategies = self
            .strategies
            .clone()
            .unwrap_or_else(|| StrategyKind::ALL.to_vec());
        Game::with_strategies(self.name.clone(), timeframes, strategies)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AppConfig {
    #[serde(default = "default_history_file")]
    pub history_file: PathBuf,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub games: Vec<GameConfig>,
}

fn default_history_file() -> PathBuf {
    PathBuf::from(DEFAULT_HISTORY_FILE)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_file: default_history_file(),
            games: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Reads the configuration from a YAML file.
    ///
    /// Falls back to [`DEFAULT_CONFIG_FILE`] when no path is given. A missing
    /// file is not an error: the defaults are used instead. A file that
    /// exists but cannot be read or parsed is.
    #[instrument(level = "info", skip(filename))]
    pub fn read_config<P: AsRef<Path>>(filename: Option<P>) -> Result<Self, ConfigError> {
        let path = filename
            .map(|p| p.as_ref().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        if !path.exists() {
            info!(path = %path.display(), "Config file does not exist, using defaults");
            return Ok(Self::default());
        }

        info!(path = %path.display(), "Reading configuration");
        let file = File::open(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config: Self = from_reader(BufReader::new(file))?;
        debug!(games = config.games.len(), "Configuration loaded");
        Ok(config)
    }

    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Custom games, validated.
    pub fn games(&self) -> Result<Vec<Game>, ConfigError> {
        self.games
            .iter()
            .map(|g| {
                g.to_game().map_err(|source| ConfigError::Game {
                    game: g.name.clone(),
                    source,
                })
            })
            .collect()
    }

    /// Built-in games followed by the configured ones.
    pub fn catalog(&self) -> Result<GameCatalog, ConfigError> {
        Ok(GameCatalog::builtin()?.with_games(self.games()?)?)
    }
}
