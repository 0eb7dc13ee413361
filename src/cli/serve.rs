use crate::{
    config::Config,
    error, info,
    server::{AppState, start_api_server},
    warning,
};

pub async fn serve(config: Config) {
    if config.refresh_token.is_none() {
        warning!("SPOTIFY_REFRESH_TOKEN is not set, /api will always answer \"Not playing\".");
    }

    if let Err(e) = start_api_server(AppState::new(config)).await {
        error!("Cannot run server. Err: {}", e);
    }
}

/// Runs the server and sends the user through the authorization flow.
///
/// The browser is pointed at the local `/api/login` route, which redirects to
/// Spotify; the callback page then shows the refresh token. The server keeps
/// running until the process is interrupted.
pub async fn login(config: Config) {
    let login_url = format!("http://{}/api/login", config.server_addr);

    let server = tokio::spawn(async move { start_api_server(AppState::new(config)).await });

    info!("Opening {} to authorize with Spotify.", login_url);
    if webbrowser::open(&login_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            login_url
        )
    }
    info!("Copy the refresh token from the callback page, then press Ctrl+C.");

    match server.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!("Cannot run server. Err: {}", e),
        Err(e) => error!("Server task failed. Err: {}", e),
    }
}
