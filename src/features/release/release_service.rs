use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::domain::config::ServerConfig;
use crate::domain::models::{GithubRelease, MacMode, ReleaseStatus};

#[derive(Debug, Error)]
pub enum ReleaseError {
    #[error("release request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("release endpoint returned {0}")]
    Status(reqwest::StatusCode),
    #[error("release document has no tag_name")]
    MissingTag,
}

/// Somewhere the latest published release tag can be fetched from.
#[async_trait::async_trait]
pub trait ReleaseSource: Send + Sync {
    async fn latest_tag(&self) -> Result<String, ReleaseError>;
}

/// GitHub-style `releases/latest` endpoint.
pub struct GithubReleaseSource {
    client: Client,
    url: String,
}

impl GithubReleaseSource {
    pub fn new(url: impl Into<String>) -> Result<Self, ReleaseError> {
        Self::with_timeout(url, Duration::from_secs(ServerConfig::RELEASE_TIMEOUT_SECS))
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self, ReleaseError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(ServerConfig::RELEASE_USER_AGENT)
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait::async_trait]
impl ReleaseSource for GithubReleaseSource {
    async fn latest_tag(&self) -> Result<String, ReleaseError> {
        let response = self.client.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(ReleaseError::Status(response.status()));
        }

        let release: GithubRelease = response.json().await?;
        if release.tag_name.is_empty() {
            return Err(ReleaseError::MissingTag);
        }
        Ok(release.tag_name)
    }
}

/// Runs the one-shot release check. Any failure maps to the unknown/404 pair.
pub async fn check_latest_release(source: &dyn ReleaseSource) -> ReleaseStatus {
    match source.latest_tag().await {
        Ok(tag) => {
            let status = ReleaseStatus::found(&tag);
            log::info!("Latest release is {}", status.latest_version);
            status
        }
        Err(e) => {
            log::info!("Release check failed: {}", e);
            ReleaseStatus::unknown()
        }
    }
}

/// Only the single-best shape reports the latest release; other modes never call out.
pub async fn startup_release_status(mode: MacMode, source: &dyn ReleaseSource) -> ReleaseStatus {
    if mode != MacMode::SingleBest {
        return ReleaseStatus::unknown();
    }
    log::info!("Fetching latest release");
    check_latest_release(source).await
}
