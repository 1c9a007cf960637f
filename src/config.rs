//! Configuration management for the booking service.
//!
//! Loads configuration from environment variables with sensible defaults.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Catalog storage configuration
    pub storage: StorageConfig,
    /// Admin surface configuration
    pub admin: AdminConfig,
    /// Seat inventory configuration
    pub seating: SeatingConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Which catalog backend to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Seeded in-process collections; mutations are lost on restart.
    Memory,
    /// Flat JSON files under the data directory.
    File,
}

/// Catalog storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Selected backend
    pub backend: StorageBackend,
    /// Directory holding the collection files (file backend only)
    pub data_dir: PathBuf,
}

/// Admin surface configuration.
///
/// The defaults mirror the seeded development credentials; production
/// deployments override them through the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminConfig {
    /// Login email
    pub email: String,
    /// Login password
    pub password: String,
    /// Admin session lifetime in seconds (default: 7 days)
    pub session_ttl: u64,
}

/// Seat inventory configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatingConfig {
    /// Showtime whose layout is served for unknown showtime ids; `None`
    /// rejects unknown ids instead.
    pub fallback_showtime: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(8080),
                log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            },
            storage: StorageConfig {
                backend: match env::var("STORAGE_BACKEND").as_deref() {
                    Ok("file") => StorageBackend::File,
                    _ => StorageBackend::Memory,
                },
                data_dir: env::var("DATA_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("data")),
            },
            admin: AdminConfig {
                email: env::var("ADMIN_EMAIL")
                    .unwrap_or_else(|_| "admin@tickbuzz.com".to_string()),
                password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string()),
                session_ttl: env::var("ADMIN_SESSION_TTL")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(604_800), // 7 days
            },
            seating: SeatingConfig {
                // An empty value disables the fallback entirely.
                fallback_showtime: match env::var("SEAT_FALLBACK_SHOWTIME") {
                    Ok(value) if value.is_empty() => None,
                    Ok(value) => Some(value),
                    Err(_) => Some("1".to_string()),
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_a_fresh_environment() {
        // Only rely on variables this test does not set: the defaults must be
        // self-contained.
        let config = Config::from_env();
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.admin.email, "admin@tickbuzz.com");
        assert_eq!(config.seating.fallback_showtime.as_deref(), Some("1"));
    }
}
