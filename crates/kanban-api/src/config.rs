//! # Configuration
//!
//! Layered application configuration: defaults, then an optional file
//! (`config/default.*` or an explicit `--config` path), then
//! `KANBAN__`-prefixed environment variables
//! (e.g. `KANBAN__SERVER__PORT=9000`, `KANBAN__AUTH__JWT_SECRET=...`).

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub cache: CacheConfig,
    pub logging: LoggingConfig,
}

/// HTTP server binding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Login credentials and token parameters.
///
/// The defaults match the development credentials of the system this
/// service replaces; any real deployment overrides all three via
/// environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
    pub jwt_secret: String,
    pub token_ttl_hours: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "admin".to_string(),
            jwt_secret: "development-secret-change-me-in-production".to_string(),
            token_ttl_hours: 8,
        }
    }
}

/// Read-cache sizing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum cached entries per cache.
    pub capacity: u64,
    /// Entry time-to-live in seconds.
    pub ttl_seconds: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 1024,
            ttl_seconds: 300,
        }
    }
}

/// Tracing output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info,kanban_api=debug".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment.
    pub fn load(explicit_file: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false));
        if let Some(path) = explicit_file {
            builder = builder.add_source(config::File::from(path));
        }
        builder
            .add_source(config::Environment::with_prefix("KANBAN").separator("__"))
            .build()?
            .try_deserialize()
    }
}
