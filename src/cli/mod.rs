//! # CLI Module
//!
//! Command implementations behind the `spotify-badge` binary. Each command
//! receives the [`Config`](crate::config::Config) loaded at startup and
//! reports progress with the crate's console macros.
//!
//! ## Commands
//!
//! ### Serving
//!
//! - [`serve`] - Runs the HTTP server exposing `/api`, `/api/login`,
//!   `/api/callback` and `/health`
//! - [`login`] - Runs the server and opens the local login page in the
//!   browser, for the one-time refresh token setup
//!
//! ### Inspecting
//!
//! - [`now_playing`] - Prints the current track as a table
//! - [`write_badge`] - Renders the current badge into a file
//!
//! ## Usage Patterns
//!
//! ### Initial Setup
//! ```bash
//! spotify-badge login              # Authorize and copy the refresh token
//! ```
//!
//! ### Regular Usage
//! ```bash
//! spotify-badge serve              # Serve the badge on SERVER_ADDRESS
//! spotify-badge now-playing        # Check what the badge would show
//! spotify-badge badge -o now.svg   # Render the badge once
//! ```

mod now_playing;
mod serve;

pub use now_playing::write_badge;
pub use now_playing::now_playing;
pub use serve::login;
pub use serve::serve;
