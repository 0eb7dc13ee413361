//! # API Module
//!
//! HTTP handlers for the badge service, built on [Axum](https://docs.rs/axum).
//!
//! ## Endpoints
//!
//! - [`now_playing`] - `GET /api`: the SVG badge for the current track, or the
//!   plain text "Not playing". Always answers 200, whatever happens upstream.
//! - [`login`] - `GET /api/login`: 302 redirect to Spotify's authorization page.
//! - [`callback`] - `GET /api/callback`: exchanges the returned code and shows
//!   the refresh token to copy into `SPOTIFY_REFRESH_TOKEN`.
//! - [`health`] - `GET /health`: status and version for monitoring.
//!
//! ## Callback URI
//!
//! The login and callback handlers must send Spotify the same redirect URI.
//! Both derive it from `PUBLIC_URL` when configured, otherwise from the
//! request's `Host` and `X-Forwarded-Proto` headers, so the service works
//! unchanged behind a reverse proxy or on a local port.
//!
//! ## Login State
//!
//! `/api/login` signs a fresh `state` and stores its nonce in an HttpOnly,
//! `SameSite=Lax` cookie scoped to the callback path for
//! [`STATE_TTL_SECS`](crate::utils::STATE_TTL_SECS). The callback only
//! exchanges the code when the state's nonce matches that cookie, the state
//! is unexpired and its signature verifies. Every callback response clears
//! the cookie, so a state is good for one attempt from the browser that
//! started the login.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use spotify_badge::api::{callback, health, login, now_playing};
//!
//! let app = Router::new()
//!     .route("/api", get(now_playing))
//!     .route("/api/login", get(login))
//!     .route("/api/callback", get(callback))
//!     .route("/health", get(health))
//!     .with_state(state);
//! ```

mod callback;
mod health;
mod login;
mod now_playing;

use axum::http::{
    HeaderMap,
    header::{COOKIE, HOST},
};
use cookie::{Cookie, SameSite, time::Duration};

use crate::{config::Config, utils};

pub use callback::callback;
pub use health::health;
pub use login::login;
pub use now_playing::now_playing;

fn callback_uri(config: &Config, headers: &HeaderMap) -> String {
    let header = |name: &str| headers.get(name).and_then(|v| v.to_str().ok());
    utils::callback_uri(
        config.public_url.as_deref(),
        header(HOST.as_str()),
        header("x-forwarded-proto"),
    )
}

const STATE_COOKIE: &str = "spotify_badge_state";
const STATE_COOKIE_PATH: &str = "/api/callback";

/// `Set-Cookie` value carrying the login nonce. Marked `Secure` when the
/// callback is served over https.
fn state_cookie(nonce: &str, redirect_uri: &str) -> String {
    Cookie::build((STATE_COOKIE, nonce))
        .path(STATE_COOKIE_PATH)
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(redirect_uri.starts_with("https://"))
        .max_age(Duration::seconds(utils::STATE_TTL_SECS))
        .build()
        .to_string()
}

fn clear_state_cookie() -> String {
    Cookie::build((STATE_COOKIE, ""))
        .path(STATE_COOKIE_PATH)
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::ZERO)
        .build()
        .to_string()
}

fn state_cookie_value(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| Cookie::split_parse(v))
        .filter_map(Result::ok)
        .find(|c| c.name() == STATE_COOKIE)
        .map(|c| c.value().to_string())
}
