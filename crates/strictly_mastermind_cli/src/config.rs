//! Application configuration loaded from TOML.

use crate::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_mastermind::GameConfig;
use tracing::{debug, info, instrument};

/// Default random.org integer generator endpoint.
pub const RANDOM_ORG_ENDPOINT: &str = "https://www.random.org/integers/";

/// Where secret numbers come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SupplierKind {
    /// The random.org HTTP integer generator.
    #[default]
    RandomOrg,
    /// An in-process pseudo-random generator.
    Local,
}

/// Number supplier settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SupplierConfig {
    /// Supplier implementation.
    #[serde(default)]
    kind: SupplierKind,

    /// random.org endpoint.
    #[serde(default = "default_endpoint")]
    endpoint: String,

    /// HTTP timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,

    /// Seed for the local supplier; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_endpoint() -> String {
    RANDOM_ORG_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl SupplierConfig {
    /// Returns a copy using `kind`.
    pub fn with_kind(mut self, kind: SupplierKind) -> Self {
        self.kind = kind;
        self
    }

    /// Returns a copy using `seed`.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for SupplierConfig {
    fn default() -> Self {
        Self {
            kind: SupplierKind::default(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            seed: None,
        }
    }
}

/// Top-level configuration file.
///
/// ```toml
/// [game]
/// sequence_length = 4
/// number_min = 1
/// number_max = 6
/// max_attempts = 10
///
/// [supplier]
/// kind = "local"
/// seed = 7
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Game parameters.
    #[serde(default)]
    game: GameConfig,

    /// Number supplier settings.
    #[serde(default)]
    supplier: SupplierConfig,
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config
            .game
            .validate()
            .map_err(|e| ConfigError::new(format!("Invalid game settings: {}", e.kind())))?;

        info!(
            sequence_length = config.game.sequence_length(),
            supplier = %config.supplier.kind,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, defaults otherwise.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns a copy with the game parameters replaced.
    pub fn with_game(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }

    /// Returns a copy with the supplier settings replaced.
    pub fn with_supplier(mut self, supplier: SupplierConfig) -> Self {
        self.supplier = supplier;
        self
    }
}
