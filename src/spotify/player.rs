use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::{
    config::Config,
    error::SpotifyError,
    spotify::auth,
    types::{CurrentlyPlayingResponse, Grant, NowPlaying, Playback},
    warning,
};

/// Fetches the track currently playing on the configured account.
///
/// Obtains a fresh access token through the refresh grant, then queries
/// `GET /me/player/currently-playing` once with it.
///
/// # Returns
///
/// - `Ok(Playback::Nothing)` - No refresh token is configured (no request is
///   made), Spotify answered 204, or the body is empty, `null`, `{}` or has
///   no item
/// - `Ok(Playback::Playing(_))` - Track name, first artist, first album
///   image and the playing flag
/// - `Err(SpotifyError)` - The token exchange failed, Spotify answered with
///   a non-success status, or the body could not be decoded
pub async fn current_track(client: &Client, config: &Config) -> Result<Playback, SpotifyError> {
    let Some(refresh_token) = config.refresh_token.as_deref() else {
        return Ok(Playback::Nothing);
    };

    let access_token = auth::exchange(client, config, &Grant::Refresh { refresh_token }).await?;

    let res = client
        .get(format!("{}/me/player/currently-playing", config.api_url))
        .bearer_auth(&access_token)
        .send()
        .await?;

    let status = res.status();
    if status == StatusCode::NO_CONTENT {
        return Ok(Playback::Nothing);
    }
    if !status.is_success() {
        return Err(SpotifyError::Status(status));
    }

    let body = res.bytes().await?;
    parse_currently_playing(&body)
}

/// Same as [`current_track`] with failures logged and mapped to `None`.
pub async fn now_playing(client: &Client, config: &Config) -> Option<NowPlaying> {
    match current_track(client, config).await {
        Ok(playback) => playback.into_option(),
        Err(e) => {
            warning!("Cannot fetch current track. Err: {}", e);
            None
        }
    }
}

/// Normalizes a currently-playing response body.
pub fn parse_currently_playing(body: &[u8]) -> Result<Playback, SpotifyError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Playback::Nothing);
    }

    let json: Value = serde_json::from_slice(body)?;
    let is_empty_object = json.as_object().is_some_and(|o| o.is_empty());
    if json.is_null() || is_empty_object {
        return Ok(Playback::Nothing);
    }

    let response: CurrentlyPlayingResponse = serde_json::from_value(json)?;
    Ok(response.into())
}
