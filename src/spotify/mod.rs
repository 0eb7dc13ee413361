//! # Spotify Integration Module
//!
//! This module is the integration layer between the badge service and
//! Spotify. It performs every outbound call the service makes to the
//! accounts service and the Web API.
//!
//! ## Architecture
//!
//! ```text
//! HTTP handlers / CLI
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (token exchange, authorization URL)
//!     └── Player (currently-playing status)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - OAuth 2.0 authorization-code flow with a client secret:
//! - **Token Exchange**: refresh-token and authorization-code grants against
//!   the token endpoint, authenticated with HTTP Basic client credentials
//! - **Authorization URL**: the URL the user visits once to grant access
//! - **Callback Handling**: turns the returned code into a refresh token
//!
//! ### Player Module
//!
//! [`player`] - Reads `GET /me/player/currently-playing` and normalizes it
//! into a [`crate::types::NowPlaying`] record or "nothing playing".
//!
//! ## Error Handling
//!
//! Every request is made exactly once; there are no retries. Failures are
//! reported as [`crate::error::SpotifyError`]. Callers that only care about
//! "something to show or not" use the collapsing helpers
//! ([`auth::exchange_or_empty`], [`player::now_playing`]), which log the
//! failure as a warning.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - Refresh-token and authorization-code grants
//! - `GET /me/player/currently-playing` - Current playback status
//!
//! ## Usage Patterns
//!
//! ```rust
//! let client = reqwest::Client::new();
//! let config = Config::from_env();
//!
//! match spotify::player::current_track(&client, &config).await? {
//!     Playback::Playing(track) => println!("{} - {}", track.artist_name, track.track_name),
//!     Playback::Nothing => println!("Not playing"),
//! }
//! ```

pub mod auth;
pub mod player;
