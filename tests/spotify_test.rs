mod common;

use reqwest::{Client, StatusCode, Url};
use serde_json::json;
use spotify_badge::{
    error::SpotifyError,
    spotify::{auth, player},
    types::{Grant, NowPlaying, Playback},
    utils,
};

use common::{Player, config, playing_payload, spawn_provider};

#[tokio::test]
async fn test_refresh_grant_returns_access_token() {
    let provider = spawn_provider(Player::NoContent).await;
    let config = config(&provider, Some(common::REFRESH_TOKEN));

    let grant = Grant::Refresh {
        refresh_token: common::REFRESH_TOKEN,
    };
    let token = auth::exchange(&Client::new(), &config, &grant).await.unwrap();

    assert_eq!(token, common::ACCESS_TOKEN);
}

#[tokio::test]
async fn test_code_grant_returns_refresh_token() {
    let provider = spawn_provider(Player::NoContent).await;
    let config = config(&provider, None);

    let grant = Grant::AuthorizationCode {
        code: common::AUTH_CODE,
        redirect_uri: "http://localhost:3000/api/callback",
    };
    let token = auth::exchange(&Client::new(), &config, &grant).await.unwrap();

    assert_eq!(token, common::ISSUED_REFRESH_TOKEN);
}

#[tokio::test]
async fn test_exchange_rejected_grant_is_status_error() {
    let provider = spawn_provider(Player::NoContent).await;
    let config = config(&provider, None);

    let grant = Grant::Refresh {
        refresh_token: "revoked",
    };
    let result = auth::exchange(&Client::new(), &config, &grant).await;

    assert!(matches!(
        result,
        Err(SpotifyError::Status(StatusCode::BAD_REQUEST))
    ));
    assert_eq!(
        auth::exchange_or_empty(&Client::new(), &config, &grant).await,
        ""
    );
}

#[tokio::test]
async fn test_exchange_wrong_client_secret_is_rejected() {
    let provider = spawn_provider(Player::NoContent).await;
    let mut config = config(&provider, None);
    config.client_secret = "wrong".to_string();

    let grant = Grant::Refresh {
        refresh_token: common::REFRESH_TOKEN,
    };
    let result = auth::exchange(&Client::new(), &config, &grant).await;

    assert!(matches!(
        result,
        Err(SpotifyError::Status(StatusCode::UNAUTHORIZED))
    ));
}

#[tokio::test]
async fn test_handle_callback_with_empty_code_yields_empty_token() {
    let provider = spawn_provider(Player::NoContent).await;
    let config = config(&provider, None);

    let token = auth::handle_callback(
        &Client::new(),
        &config,
        "",
        "http://localhost:3000/api/callback",
    )
    .await;

    assert_eq!(token, "");
}

#[tokio::test]
async fn test_handle_callback_with_unreachable_provider_yields_empty_token() {
    let config = config("http://127.0.0.1:1", None);

    let token = auth::handle_callback(
        &Client::new(),
        &config,
        common::AUTH_CODE,
        "http://localhost:3000/api/callback",
    )
    .await;

    assert!(token.is_empty());
}

#[tokio::test]
async fn test_handle_callback_with_valid_code() {
    let provider = spawn_provider(Player::NoContent).await;
    let config = config(&provider, None);

    let token = auth::handle_callback(
        &Client::new(),
        &config,
        common::AUTH_CODE,
        "http://localhost:3000/api/callback",
    )
    .await;

    assert_eq!(token, common::ISSUED_REFRESH_TOKEN);
}

#[test]
fn test_authorize_url_contains_client_id_and_callback() {
    let config = config("https://accounts.example.com", None);
    let state = utils::generate_state(&config.client_secret, 1_700_000_000);

    let url = auth::authorize_url(&config, "https://badge.example.com/api/callback", &state)
        .unwrap();
    let parsed = Url::parse(&url).unwrap();
    let param = |name: &str| {
        parsed
            .query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    };

    assert!(url.starts_with("https://accounts.example.com/authorize?"));
    assert!(url.contains(common::CLIENT_ID));
    assert_eq!(param("client_id").as_deref(), Some(common::CLIENT_ID));
    assert_eq!(param("response_type").as_deref(), Some("code"));
    assert_eq!(param("scope").as_deref(), Some("user-read-currently-playing"));
    assert!(param("redirect_uri").unwrap().ends_with("/api/callback"));
    assert_eq!(param("state").as_deref(), Some(state.as_str()));
}

#[test]
fn test_authorize_url_invalid_endpoint() {
    let mut config = config("https://accounts.example.com", None);
    config.auth_url = "not a url".to_string();

    let result = auth::authorize_url(&config, "http://localhost/api/callback", "state");

    assert!(matches!(result, Err(SpotifyError::InvalidUrl(_))));
}

#[tokio::test]
async fn test_current_track_well_formed_payload() {
    let payload = playing_payload("https://i.scdn.co", true);
    let provider = spawn_provider(Player::Json(payload)).await;
    let config = config(&provider, Some(common::REFRESH_TOKEN));

    let playback = player::current_track(&Client::new(), &config).await.unwrap();

    let Playback::Playing(track) = playback else {
        panic!("expected a track, got {:?}", playback);
    };
    assert_eq!(track.track_name, "Song");
    assert_eq!(track.artist_name, "Artist");
    assert_eq!(track.artwork_url, "https://i.scdn.co/art.png");
    assert!(track.is_playing);
}

#[tokio::test]
async fn test_current_track_paused_flag() {
    let payload = playing_payload("http://127.0.0.1:1", false);
    let provider = spawn_provider(Player::Json(payload)).await;
    let config = config(&provider, Some(common::REFRESH_TOKEN));

    let track = player::now_playing(&Client::new(), &config).await.unwrap();

    assert!(!track.is_playing);
    assert_eq!(track.artwork_url, "http://127.0.0.1:1/art.png");
}

#[tokio::test]
async fn test_current_track_no_content() {
    let provider = spawn_provider(Player::NoContent).await;
    let config = config(&provider, Some(common::REFRESH_TOKEN));

    let playback = player::current_track(&Client::new(), &config).await.unwrap();

    assert_eq!(playback, Playback::Nothing);
}

#[tokio::test]
async fn test_current_track_empty_body() {
    let provider = spawn_provider(Player::EmptyBody).await;
    let config = config(&provider, Some(common::REFRESH_TOKEN));

    let playback = player::current_track(&Client::new(), &config).await.unwrap();

    assert_eq!(playback, Playback::Nothing);
}

#[tokio::test]
async fn test_current_track_without_refresh_token() {
    // Nothing listens on port 1, so any outbound request would fail.
    let config = config("http://127.0.0.1:1", None);

    let playback = player::current_track(&Client::new(), &config).await.unwrap();

    assert_eq!(playback, Playback::Nothing);
}

#[tokio::test]
async fn test_current_track_upstream_error_is_distinct() {
    let provider = spawn_provider(Player::Status(StatusCode::SERVICE_UNAVAILABLE)).await;
    let config = config(&provider, Some(common::REFRESH_TOKEN));

    let result = player::current_track(&Client::new(), &config).await;

    assert!(matches!(
        result,
        Err(SpotifyError::Status(StatusCode::SERVICE_UNAVAILABLE))
    ));
    assert_eq!(player::now_playing(&Client::new(), &config).await, None);
}

#[tokio::test]
async fn test_current_track_unreachable_provider() {
    let config = config("http://127.0.0.1:1", Some(common::REFRESH_TOKEN));

    let result = player::current_track(&Client::new(), &config).await;

    assert!(matches!(result, Err(SpotifyError::Http(_))));
}

#[test]
fn test_parse_currently_playing_nothing_variants() {
    for body in ["", "  \n", "null", "{}", r#"{"is_playing": false, "item": null}"#] {
        assert_eq!(
            player::parse_currently_playing(body.as_bytes()).unwrap(),
            Playback::Nothing,
            "body {:?}",
            body
        );
    }
}

#[test]
fn test_parse_currently_playing_missing_nested_fields() {
    let body = json!({
        "is_playing": true,
        "item": { "name": "Episode 12", "artists": [], "album": null }
    })
    .to_string();

    let playback = player::parse_currently_playing(body.as_bytes()).unwrap();

    assert_eq!(
        playback,
        Playback::Playing(NowPlaying {
            track_name: "Episode 12".to_string(),
            artist_name: String::new(),
            artwork_url: String::new(),
            is_playing: true,
        })
    );
}

#[test]
fn test_parse_currently_playing_garbage() {
    let result = player::parse_currently_playing(b"<html>oops</html>");
    assert!(matches!(result, Err(SpotifyError::Decode(_))));
}
