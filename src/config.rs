//! Configuration management for the now-playing badge.
//!
//! Configuration is read once at process start into an immutable [`Config`]
//! that is shared with every component. Values come from, in order of
//! priority:
//! 1. Environment variables
//! 2. `.env` file in the local data directory (`spotify-badge/.env`)
//! 3. `.env` file in the working directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

/// Scope requested during authorization. Only playback status is read.
pub const SCOPE: &str = "user-read-currently-playing";

pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_FONT_FAMILY: &str = "DejaVu Sans";

/// Loads environment variables from `.env` files.
///
/// Creates the platform-specific local data directory if it doesn't exist
/// and loads `spotify-badge/.env` from it, then a `.env` in the current
/// working directory. Missing files are not an error: variables already
/// present in the process environment are never overridden, so a hosted
/// deployment can rely on its own environment alone.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/spotify-badge/.env`
/// - macOS: `~/Library/Application Support/spotify-badge/.env`
/// - Windows: `%LOCALAPPDATA%/spotify-badge/.env`
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created.
///
/// # Example
///
/// ```
/// use spotify_badge::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(&path).ok();
    dotenv::dotenv().ok();
    Ok(())
}

/// Location of the `.env` file inside the local data directory.
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotify-badge/.env");
    path
}

/// Process-wide, read-only configuration.
///
/// Built once by [`Config::from_env`] and passed into each component. The
/// client credentials are kept even when empty: a missing credential flows
/// through to Spotify and produces an empty result rather than a rejected
/// request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `SPOTIFY_CLIENT_ID`
    pub client_id: String,
    /// `SPOTIFY_CLIENT_SECRET`
    pub client_secret: String,
    /// `SPOTIFY_REFRESH_TOKEN`; without it the badge always reports "Not playing".
    pub refresh_token: Option<String>,
    /// `SERVER_ADDRESS`, the socket address the HTTP server binds to.
    pub server_addr: String,
    /// `PUBLIC_URL`, overrides the host-derived root of the callback URI.
    pub public_url: Option<String>,
    /// `SPOTIFY_API_AUTH_URL`
    pub auth_url: String,
    /// `SPOTIFY_API_TOKEN_URL`
    pub token_url: String,
    /// `SPOTIFY_API_URL`
    pub api_url: String,
    /// `BADGE_FONT_FAMILY`, preferred font for badge text.
    pub font_family: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// # Example
    ///
    /// ```
    /// let config = Config::from_env();
    /// println!("binding to {}", config.server_addr);
    /// ```
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated the same as unset ones. Trailing slashes are
    /// stripped from the API base URL so endpoint paths can be appended.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let or_default = |key: &str, default: &str| value(key).unwrap_or_else(|| default.to_string());

        Config {
            client_id: value("SPOTIFY_CLIENT_ID").unwrap_or_default(),
            client_secret: value("SPOTIFY_CLIENT_SECRET").unwrap_or_default(),
            refresh_token: value("SPOTIFY_REFRESH_TOKEN"),
            server_addr: or_default("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            public_url: value("PUBLIC_URL"),
            auth_url: or_default("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL),
            token_url: or_default("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL),
            api_url: or_default("SPOTIFY_API_URL", DEFAULT_API_URL)
                .trim_end_matches('/')
                .to_string(),
            font_family: or_default("BADGE_FONT_FAMILY", DEFAULT_FONT_FAMILY),
        }
    }

    /// Names of the client credentials that are not configured.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.client_id.is_empty() {
            missing.push("SPOTIFY_CLIENT_ID");
        }
        if self.client_secret.is_empty() {
            missing.push("SPOTIFY_CLIENT_SECRET");
        }
        missing
    }
}
