#![allow(dead_code)]

use std::{collections::HashMap, io::Cursor};

use axum::{
    Form, Router,
    extract::State,
    http::{
        HeaderMap, StatusCode,
        header::{AUTHORIZATION, HOST},
    },
    response::{IntoResponse, Response},
    routing::{get, post},
};
use image::{ImageFormat, Rgb, RgbImage};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use spotify_badge::{config::Config, utils};

pub const CLIENT_ID: &str = "client-id";
pub const CLIENT_SECRET: &str = "client-secret";
pub const REFRESH_TOKEN: &str = "stored-refresh-token";
pub const ACCESS_TOKEN: &str = "fresh-access-token";
pub const ISSUED_REFRESH_TOKEN: &str = "issued-refresh-token";
pub const AUTH_CODE: &str = "valid-code";

/// What the mocked `/me/player/currently-playing` endpoint answers.
#[derive(Debug, Clone)]
pub enum Player {
    Json(Value),
    /// [`playing_payload`] with artwork served by the mock itself.
    Track { is_playing: bool },
    NoContent,
    EmptyBody,
    Status(StatusCode),
}

pub async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Starts a fake Spotify accounts service and Web API.
pub async fn spawn_provider(player: Player) -> String {
    let app = Router::new()
        .route("/api/token", post(token))
        .route("/me/player/currently-playing", get(currently_playing))
        .route("/art.png", get(artwork))
        .with_state(player);
    spawn(app).await
}

pub fn config(provider: &str, refresh_token: Option<&str>) -> Config {
    let mut vars: HashMap<&str, String> = HashMap::from([
        ("SPOTIFY_CLIENT_ID", CLIENT_ID.to_string()),
        ("SPOTIFY_CLIENT_SECRET", CLIENT_SECRET.to_string()),
        ("SPOTIFY_API_AUTH_URL", format!("{}/authorize", provider)),
        ("SPOTIFY_API_TOKEN_URL", format!("{}/api/token", provider)),
        ("SPOTIFY_API_URL", provider.to_string()),
    ]);
    if let Some(token) = refresh_token {
        vars.insert("SPOTIFY_REFRESH_TOKEN", token.to_string());
    }
    Config::from_lookup(|key| vars.get(key).cloned())
}

pub fn playing_payload(provider: &str, is_playing: bool) -> Value {
    json!({
        "is_playing": is_playing,
        "progress_ms": 1234,
        "item": {
            "name": "Song",
            "artists": [{ "name": "Artist" }, { "name": "Featured" }],
            "album": {
                "name": "Album",
                "images": [
                    { "url": format!("{}/art.png", provider), "width": 640, "height": 640 },
                    { "url": format!("{}/small.png", provider), "width": 64, "height": 64 }
                ]
            }
        }
    })
}

pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = RgbImage::from_pixel(width, height, Rgb([29, 185, 84]));
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, ImageFormat::Png).unwrap();
    out.into_inner()
}

async fn token(headers: HeaderMap, Form(form): Form<HashMap<String, String>>) -> Response {
    let expected = utils::basic_auth_header(CLIENT_ID, CLIENT_SECRET);
    let authorized = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == expected);
    if !authorized {
        return (StatusCode::UNAUTHORIZED, axum::Json(json!({ "error": "invalid_client" })))
            .into_response();
    }

    let field = |name: &str| form.get(name).map(String::as_str).unwrap_or_default();
    match field("grant_type") {
        "refresh_token" if field("refresh_token") == REFRESH_TOKEN => axum::Json(json!({
            "access_token": ACCESS_TOKEN,
            "token_type": "Bearer",
            "expires_in": 3600,
            "scope": "user-read-currently-playing"
        }))
        .into_response(),
        "authorization_code"
            if field("code") == AUTH_CODE && field("redirect_uri").ends_with("/api/callback") =>
        {
            axum::Json(json!({
                "access_token": ACCESS_TOKEN,
                "refresh_token": ISSUED_REFRESH_TOKEN,
                "token_type": "Bearer",
                "expires_in": 3600
            }))
            .into_response()
        }
        _ => (StatusCode::BAD_REQUEST, axum::Json(json!({ "error": "invalid_grant" })))
            .into_response(),
    }
}

async fn currently_playing(State(player): State<Player>, headers: HeaderMap) -> Response {
    let bearer = format!("Bearer {}", ACCESS_TOKEN);
    let authorized = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == bearer);
    if !authorized {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    match player {
        Player::Json(body) => axum::Json(body).into_response(),
        Player::Track { is_playing } => {
            let host = headers.get(HOST).and_then(|v| v.to_str().ok()).unwrap_or_default();
            axum::Json(playing_payload(&format!("http://{}", host), is_playing)).into_response()
        }
        Player::NoContent => StatusCode::NO_CONTENT.into_response(),
        Player::EmptyBody => (StatusCode::OK, "").into_response(),
        Player::Status(status) => status.into_response(),
    }
}

async fn artwork() -> Response {
    (
        [(axum::http::header::CONTENT_TYPE, "image/png")],
        png_bytes(300, 300),
    )
        .into_response()
}
