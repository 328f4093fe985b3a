//! Configuration management for Artemis server

use chrono::FixedOffset;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

use crate::models::period::KioskZone;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Which key-value store holds the visit log and the reset counters
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    File,
    Redis,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    /// Directory used by the file backend
    pub data_dir: PathBuf,
    /// Connection URL used by the redis backend
    pub redis_url: String,
    /// Prefix prepended to every redis key (e.g. "kiosk1:")
    pub key_prefix: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AuthConfig {
    /// Static passcode staff type in before exporting or clearing logs
    pub staff_passcode: String,
    pub jwt_secret: String,
    pub session_hours: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct KioskConfig {
    /// Fixed UTC offset, in minutes, used for period boundaries.
    /// When unset the host's local time zone is used.
    pub utc_offset_minutes: Option<i32>,
    /// Largest group a single lawatan check-in may register
    pub max_group_size: u32,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub auth: AuthConfig,
    pub kiosk: KioskConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (e.g. ARTEMIS__SERVER__PORT=9000)
            .add_source(environment())
            .set_override_option("auth.staff_passcode", env::var("STAFF_PASSCODE").ok())?
            .set_override_option("auth.jwt_secret", env::var("JWT_SECRET").ok())?
            .set_override_option("storage.redis_url", env::var("REDIS_URL").ok())?
            .build()?;

        config.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("ARTEMIS")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

impl KioskConfig {
    /// Calendar used to decide where days, weeks, months and years begin
    pub fn zone(&self) -> KioskZone {
        match self.utc_offset_minutes.and_then(|m| m.checked_mul(60)).and_then(FixedOffset::east_opt) {
            Some(offset) => KioskZone::Fixed(offset),
            None => {
                if let Some(minutes) = self.utc_offset_minutes {
                    tracing::warn!("Ignoring out-of-range utc_offset_minutes={}, using local time", minutes);
                }
                KioskZone::Local
            }
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            data_dir: PathBuf::from("data"),
            redis_url: "redis://127.0.0.1:6379".to_string(),
            key_prefix: String::new(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            staff_passcode: "2024".to_string(),
            jwt_secret: "change-this-secret-in-production".to_string(),
            session_hours: 8,
        }
    }
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: None,
            max_group_size: 500,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
