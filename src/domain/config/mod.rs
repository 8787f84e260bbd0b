pub mod app_config;
pub mod server_config;

pub use app_config::{AppConfig, ConfigError};
pub use server_config::ServerConfig;
