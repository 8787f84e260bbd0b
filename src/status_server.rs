use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tokio::net::TcpListener;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::domain::config::{AppConfig, ServerConfig};
use crate::domain::models::{ReleaseStatus, StatusResponse};
use crate::features::identity::identity_service::IdentityService;
use crate::features::identity::interface_source::InterfaceSource;

/// Immutable per-process state. Requests only read from it.
pub struct AppState<S> {
    pub config: AppConfig,
    pub release: ReleaseStatus,
    pub identity: IdentityService<S>,
}

pub fn router<S>(state: Arc<AppState<S>>) -> Router
where
    S: InterfaceSource + 'static,
{
    // A CORS layer would answer OPTIONS itself; only stamp the origin header.
    let cors = SetResponseHeaderLayer::overriding(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );

    // Every path and every method gets the same document.
    Router::new()
        .fallback(get_status::<S>)
        .layer(cors)
        .with_state(state)
}

pub async fn run<S>(state: AppState<S>) -> Result<()>
where
    S: InterfaceSource + 'static,
{
    let addr = state.config.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind status server to {}", addr))?;

    log::info!("Server is ready to handle requests at {}", addr);

    serve(listener, state).await
}

pub async fn serve<S>(listener: TcpListener, state: AppState<S>) -> Result<()>
where
    S: InterfaceSource + 'static,
{
    axum::serve(listener, router(Arc::new(state))).await?;
    Ok(())
}

async fn get_status<S>(State(state): State<Arc<AppState<S>>>) -> Response
where
    S: InterfaceSource + 'static,
{
    // getifaddrs and datalink enumeration block; keep them off the async workers.
    let status = match tokio::task::spawn_blocking(move || resolve_status(&state)).await {
        Ok(status) => status,
        Err(e) => {
            log::error!("Status resolution task failed: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    match render(&status) {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(e) => {
            log::error!("Failed to encode status: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn resolve_status<S: InterfaceSource>(state: &AppState<S>) -> StatusResponse {
    let identity = &state.identity;
    StatusResponse::assemble(
        identity.resolve_hostname(),
        identity.resolve_ipv4(),
        identity.resolve_mac(state.config.mac_mode),
        &state.config.version,
        &state.release,
    )
}

fn render(status: &StatusResponse) -> serde_json::Result<Vec<u8>> {
    if !status.is_pretty() {
        return serde_json::to_vec(status);
    }

    let mut body = Vec::new();
    let mut ser = Serializer::with_formatter(&mut body, PrettyFormatter::with_indent(ServerConfig::JSON_INDENT));
    status.serialize(&mut ser)?;
    body.push(b'\n');
    Ok(body)
}
