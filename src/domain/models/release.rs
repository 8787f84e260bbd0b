use serde::Deserialize;

use crate::domain::config::ServerConfig;

/// The part of a GitHub release document that matters here.
#[derive(Deserialize, Debug, Clone)]
pub struct GithubRelease {
    #[serde(default)]
    pub tag_name: String,
}

/// Outcome of the startup release check, served unchanged for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseStatus {
    pub latest_version: String,
    pub call_home_response: u16,
}

impl ReleaseStatus {
    pub fn found(tag: &str) -> Self {
        Self {
            latest_version: tag.strip_prefix('v').unwrap_or(tag).to_string(),
            call_home_response: ServerConfig::CALL_HOME_OK,
        }
    }

    pub fn unknown() -> Self {
        Self {
            latest_version: ServerConfig::UNKNOWN_VERSION.to_string(),
            call_home_response: ServerConfig::CALL_HOME_NOT_FOUND,
        }
    }
}
