//! Spotify Now-Playing Badge Library
//!
//! This library fetches the track currently playing on a Spotify account and
//! renders it as a small SVG badge that can be embedded in a profile page or
//! README. It also contains the one-time OAuth authorization-code flow used to
//! obtain the long-lived refresh token the badge endpoint relies on.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the badge, login and callback routes
//! - `badge` - SVG badge rendering and artwork embedding
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration loaded from the environment and `.env` files
//! - `error` - Typed errors for Spotify API communication
//! - `server` - HTTP server wiring and shared state
//! - `spotify` - Spotify Web API client (token exchange, playback status)
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spotify_badge::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> spotify_badge::Res<()> {
//!     config::load_env().await?;
//!     let state = server::AppState::new(config::Config::from_env());
//!     server::start_api_server(state).await
//! }
//! ```

pub mod api;
pub mod badge;
pub mod cli;
pub mod config;
pub mod error;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used for application plumbing (binding the server, writing files) where
/// the caller only needs to report the failure. Spotify communication uses
/// the typed [`error::SpotifyError`] instead.
///
/// # Example
///
/// ```
/// use spotify_badge::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Listening on http://{}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Badge written to {}", path.display());
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only used for fatal startup failures. Request handlers never call this;
/// they report problems with [`warning!`] and keep serving.
///
/// # Example
///
/// ```
/// error!("Cannot start server. Err: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Upstream failures that are collapsed into "Not playing" or an empty
/// refresh token are reported through this macro.
///
/// # Example
///
/// ```
/// warning!("Token exchange failed. Err: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
