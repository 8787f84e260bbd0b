use thiserror::Error;

use crate::domain::config::ServerConfig;
use crate::domain::models::MacMode;

/// Version baked in at build time, e.g. `CALLHOME_VERSION=1.4.0 cargo build --release`.
pub const BUILD_VERSION: &str = match option_env!("CALLHOME_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid port {0:?}: expected an integer between 0 and 65535")]
    InvalidPort(String),
    #[error("invalid MAC mode {0:?}: expected one of single, list, map")]
    InvalidMacMode(String),
}

/// Startup configuration, resolved once and shared read-only with every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub mac_mode: MacMode,
    pub version: String,
    pub release_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: ServerConfig::DEFAULT_PORT,
            mac_mode: MacMode::default(),
            version: BUILD_VERSION.to_string(),
            release_url: ServerConfig::RELEASE_URL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Unset and blank values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();

        if let Some(port) = get(ServerConfig::PORT_ENV) {
            config.port = port.parse().map_err(|_| ConfigError::InvalidPort(port))?;
        }
        if let Some(mode) = get(ServerConfig::MAC_MODE_ENV) {
            config.mac_mode = mode.parse()?;
        }
        if let Some(url) = get(ServerConfig::RELEASE_URL_ENV) {
            config.release_url = url;
        }

        Ok(config)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", ServerConfig::LISTEN_HOST, self.port)
    }
}
