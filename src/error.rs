use reqwest::StatusCode;

/// Failures while talking to the Spotify accounts service or Web API.
///
/// The HTTP handlers collapse every variant into "Not playing" or an empty
/// refresh token; the variants exist so library callers can tell an idle
/// player apart from an unreachable provider.
#[derive(Debug, thiserror::Error)]
pub enum SpotifyError {
    #[error("request to Spotify failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Spotify responded with status {0}")]
    Status(StatusCode),
    #[error("could not decode Spotify response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("token response has no {0}")]
    MissingField(&'static str),
    #[error("invalid authorization url: {0}")]
    InvalidUrl(String),
}
