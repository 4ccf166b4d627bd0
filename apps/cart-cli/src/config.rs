//! # CLI Configuration
//!
//! Configuration for the cart host, loaded once at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     GOMARKET_BACKEND=memory                                            │
//! │     GOMARKET_DB_PATH=/tmp/cart.db                                      │
//! │     GOMARKET_STORAGE_KEY=@GoMarketplace:cart                           │
//! │     GOMARKET_ON_CORRUPT=fail                                           │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/gomarketplace/cart.toml (Linux)                          │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     sqlite backend in the platform data dir, reset on corruption       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [storage]
//! backend = "sqlite"         # sqlite | memory
//! database_path = "/var/lib/gomarketplace/cart.db"
//! key = "@GoMarketplace:cart"
//!
//! [cart]
//! on_corrupt = "reset"       # reset | fail
//! ```

use std::path::{Path, PathBuf};

use market_cart::{CartOptions, CorruptionPolicy};
use market_core::CART_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range or inconsistent.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Where the cart snapshot lives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Durable SQLite file.
    #[default]
    Sqlite,

    /// Process memory; the cart is gone when the command exits.
    Memory,
}

impl std::str::FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sqlite" => Ok(Backend::Sqlite),
            "memory" => Ok(Backend::Memory),
            _ => Err(format!("unknown backend: {}", s)),
        }
    }
}

/// Storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    #[serde(default)]
    pub backend: Backend,

    /// Database file; defaults to the platform data directory.
    #[serde(default)]
    pub database_path: Option<PathBuf>,

    /// Key holding the cart snapshot.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

fn default_storage_key() -> String {
    CART_STORAGE_KEY.to_string()
}

impl Default for StorageSettings {
    fn default() -> Self {
        StorageSettings {
            backend: Backend::default(),
            database_path: None,
            key: default_storage_key(),
        }
    }
}

/// Cart behavior settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartSettings {
    #[serde(default)]
    pub on_corrupt: CorruptionPolicy,
}

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub cart: CartSettings,
}

impl CliConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (explicit path, else `cart.toml` in the config dir)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading cart config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Parses a config file without applying overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage.key must not be empty".into()));
        }

        if let Some(path) = &self.storage.database_path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid(
                    "storage.database_path must not be empty".into(),
                ));
            }
        }

        Ok(())
    }

    /// Cart store options derived from this configuration.
    pub fn cart_options(&self) -> CartOptions {
        CartOptions::default()
            .storage_key(self.storage.key.clone())
            .on_corrupt(self.cart.on_corrupt)
    }

    /// Database file to open: the configured path, else the platform default.
    pub fn database_path(&self) -> Option<PathBuf> {
        self.storage
            .database_path
            .clone()
            .or_else(Self::default_database_path)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(backend) = std::env::var("GOMARKET_BACKEND") {
            match backend.parse() {
                Ok(parsed) => self.storage.backend = parsed,
                Err(e) => warn!(error = %e, "Ignoring GOMARKET_BACKEND"),
            }
        }

        if let Ok(path) = std::env::var("GOMARKET_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.storage.database_path = Some(PathBuf::from(path));
        }

        if let Ok(key) = std::env::var("GOMARKET_STORAGE_KEY") {
            self.storage.key = key;
        }

        if let Ok(policy) = std::env::var("GOMARKET_ON_CORRUPT") {
            match policy.parse() {
                Ok(parsed) => self.cart.on_corrupt = parsed,
                Err(e) => warn!(error = %e, "Ignoring GOMARKET_ON_CORRUPT"),
            }
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "gomarketplace", "cart")
            .map(|dirs| dirs.config_dir().join("cart.toml"))
    }

    fn default_database_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "gomarketplace", "cart")
            .map(|dirs| dirs.data_dir().join("cart.db"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();

        assert_eq!(config.storage.backend, Backend::Sqlite);
        assert_eq!(config.storage.key, CART_STORAGE_KEY);
        assert_eq!(config.cart.on_corrupt, CorruptionPolicy::Reset);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_file() {
        let config: CliConfig = toml::from_str(
            r#"
            [storage]
            backend = "memory"

            [cart]
            on_corrupt = "fail"
            "#,
        )
        .unwrap();

        assert_eq!(config.storage.backend, Backend::Memory);
        assert_eq!(config.storage.key, CART_STORAGE_KEY);
        assert_eq!(config.cart.on_corrupt, CorruptionPolicy::Fail);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.toml");
        std::fs::write(&path, "[storage]\nkey = \"@Shop:cart\"\n").unwrap();

        let config = CliConfig::from_file(&path).unwrap();

        assert_eq!(config.storage.key, "@Shop:cart");
        assert_eq!(config.cart_options().storage_key, "@Shop:cart");
    }

    #[test]
    fn test_validate_rejects_empty_key() {
        let mut config = CliConfig::default();
        config.storage.key = "  ".to_string();

        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        assert!("redis".parse::<Backend>().is_err());
        assert_eq!("SQLITE".parse::<Backend>().unwrap(), Backend::Sqlite);
    }
}
