//! # Badge Module
//!
//! Renders a [`NowPlaying`] record as a 600×200 SVG badge: album artwork on
//! the left, track title, artist and a playback status line on the right.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ ┌────────┐   Track title (white, bold 24)    │
//! │ │artwork │   Artist (gray, 18)               │
//! │ │150×150 │   🎵 Now Playing (green, 18)      │
//! │ └────────┘                                   │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! The artwork is downloaded, resized to 150×150 and embedded as a PNG data
//! URI so the badge is a single self-contained document. When the artwork
//! cannot be fetched a plain placeholder square is drawn instead.
//!
//! "Not playing" is never rendered here; callers answer with plain text.

pub mod artwork;

use html_escape::{encode_double_quoted_attribute, encode_text};
use reqwest::Client;

use crate::{config::Config, types::NowPlaying, utils};

pub const WIDTH: u32 = 600;
pub const HEIGHT: u32 = 200;
pub const ARTWORK_SIZE: u32 = 150;
pub const ARTWORK_OFFSET: u32 = 25;
pub const MAX_TEXT_CHARS: usize = 30;
pub const CONTENT_TYPE: &str = "image/svg+xml";

const BACKGROUND: &str = "#1a1a1a";
const TITLE_COLOR: &str = "#ffffff";
const ARTIST_COLOR: &str = "#b3b3b3";
const STATUS_COLOR: &str = "#1DB954";
const PLACEHOLDER_COLOR: &str = "#282828";

/// Rendered badge ready to be served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

pub fn status_label(is_playing: bool) -> &'static str {
    if is_playing {
        "🎵 Now Playing"
    } else {
        "⏸️ Paused"
    }
}

/// Downloads the artwork and renders the badge.
pub async fn render(client: &Client, config: &Config, track: &NowPlaying) -> Badge {
    let artwork = artwork::fetch_data_uri(client, &track.artwork_url).await;
    let svg = render_svg(track, artwork.as_deref(), &config.font_family);

    Badge {
        bytes: svg.into_bytes(),
        content_type: CONTENT_TYPE,
    }
}

/// Renders the badge markup.
///
/// Title and artist are truncated to [`MAX_TEXT_CHARS`] characters before
/// escaping. `font_family` is listed ahead of the generic `sans-serif`
/// family, so renderers without that font fall back silently.
pub fn render_svg(track: &NowPlaying, artwork: Option<&str>, font_family: &str) -> String {
    let title = utils::truncate(&track.track_name, MAX_TEXT_CHARS);
    let title = encode_text(&title);
    let artist = utils::truncate(&track.artist_name, MAX_TEXT_CHARS);
    let artist = encode_text(&artist);
    let status = status_label(track.is_playing);
    let font = encode_double_quoted_attribute(font_family);

    let artwork = match artwork {
        Some(data_uri) => format!(
            r#"<image x="{o}" y="{o}" width="{s}" height="{s}" href="{uri}"/>"#,
            o = ARTWORK_OFFSET,
            s = ARTWORK_SIZE,
            uri = encode_double_quoted_attribute(data_uri),
        ),
        None => format!(
            r#"<rect x="{o}" y="{o}" width="{s}" height="{s}" fill="{c}"/>"#,
            o = ARTWORK_OFFSET,
            s = ARTWORK_SIZE,
            c = PLACEHOLDER_COLOR,
        ),
    };

    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">
  <rect width="{w}" height="{h}" fill="{bg}"/>
  {artwork}
  <g font-family="'{font}', sans-serif" dominant-baseline="hanging">
    <text x="200" y="50" fill="{title_color}" font-size="24" font-weight="bold">{title}</text>
    <text x="200" y="90" fill="{artist_color}" font-size="18">{artist}</text>
    <text x="200" y="130" fill="{status_color}" font-size="18">{status}</text>
  </g>
</svg>
"#,
        w = WIDTH,
        h = HEIGHT,
        bg = BACKGROUND,
        title_color = TITLE_COLOR,
        artist_color = ARTIST_COLOR,
        status_color = STATUS_COLOR,
    )
}
