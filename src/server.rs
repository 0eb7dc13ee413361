use axum::{Router, routing::get};
use reqwest::Client;
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{Res, api, config::Config, info};

/// Read-only state shared by every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config: Arc::new(config),
            client: Client::new(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api", get(api::now_playing))
        .route("/api/login", get(api::login))
        .route("/api/callback", get(api::callback))
        .route("/health", get(api::health))
        .with_state(state)
}

pub async fn start_api_server(state: AppState) -> Res<()> {
    let addr = SocketAddr::from_str(&state.config.server_addr)
        .map_err(|e| format!("Failed to parse server address: {}", e))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
