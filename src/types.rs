use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Normalized description of the track that is currently playing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NowPlaying {
    pub track_name: String,
    pub artist_name: String,
    pub artwork_url: String,
    pub is_playing: bool,
}

/// Outcome of a successful playback-status query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Playback {
    Playing(NowPlaying),
    Nothing,
}

impl Playback {
    pub fn into_option(self) -> Option<NowPlaying> {
        match self {
            Playback::Playing(track) => Some(track),
            Playback::Nothing => None,
        }
    }
}

/// OAuth grant sent to the token endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grant<'a> {
    Refresh {
        refresh_token: &'a str,
    },
    AuthorizationCode {
        code: &'a str,
        redirect_uri: &'a str,
    },
}

impl<'a> Grant<'a> {
    /// Form-encoded body parameters for this grant.
    pub fn form(&self) -> Vec<(&'static str, &'a str)> {
        match *self {
            Grant::Refresh { refresh_token } => vec![
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
            ],
            Grant::AuthorizationCode { code, redirect_uri } => vec![
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", redirect_uri),
            ],
        }
    }

    /// Name of the token field this grant is exchanged for.
    pub fn token_field(&self) -> &'static str {
        match self {
            Grant::Refresh { .. } => "access_token",
            Grant::AuthorizationCode { .. } => "refresh_token",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentlyPlayingResponse {
    #[serde(default)]
    pub is_playing: bool,
    pub item: Option<PlayingItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayingItem {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<ItemArtist>,
    pub album: Option<ItemAlbum>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemAlbum {
    #[serde(default)]
    pub images: Vec<AlbumImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumImage {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl From<CurrentlyPlayingResponse> for Playback {
    fn from(response: CurrentlyPlayingResponse) -> Self {
        let Some(item) = response.item else {
            return Playback::Nothing;
        };

        let artist_name = item
            .artists
            .into_iter()
            .next()
            .map(|artist| artist.name)
            .unwrap_or_default();
        let artwork_url = item
            .album
            .and_then(|album| album.images.into_iter().next())
            .map(|image| image.url)
            .unwrap_or_default();

        Playback::Playing(NowPlaying {
            track_name: item.name,
            artist_name,
            artwork_url,
            is_playing: response.is_playing,
        })
    }
}

#[derive(Tabled)]
pub struct NowPlayingTableRow {
    pub track: String,
    pub artist: String,
    pub status: String,
}

impl From<&NowPlaying> for NowPlayingTableRow {
    fn from(track: &NowPlaying) -> Self {
        NowPlayingTableRow {
            track: track.track_name.clone(),
            artist: track.artist_name.clone(),
            status: if track.is_playing { "playing" } else { "paused" }.to_string(),
        }
    }
}
