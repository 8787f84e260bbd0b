mod domain;
mod features;
mod utils;
mod status_server;

use anyhow::Result;

use crate::domain::config::AppConfig;
use crate::domain::models::ReleaseStatus;
use crate::features::identity::identity_service::IdentityService;
use crate::features::identity::interface_source::SystemInterfaceSource;
use crate::features::release::release_service::{startup_release_status, GithubReleaseSource};
use crate::status_server::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()?;
    log::info!("Starting callhome {} ({:?} MAC mode)", config.version, config.mac_mode);

    let release = fetch_release_status(&config).await;

    log::info!("Server is starting");

    let state = AppState {
        config,
        release,
        identity: IdentityService::new(SystemInterfaceSource),
    };

    if let Err(e) = status_server::run(state).await {
        log::error!("Status server error: {:#}", e);
        return Err(e);
    }

    Ok(())
}

async fn fetch_release_status(config: &AppConfig) -> ReleaseStatus {
    let source = match GithubReleaseSource::new(config.release_url.as_str()) {
        Ok(source) => source,
        Err(e) => {
            log::info!("Release check unavailable: {}", e);
            return ReleaseStatus::unknown();
        }
    };

    startup_release_status(config.mac_mode, &source).await
}
