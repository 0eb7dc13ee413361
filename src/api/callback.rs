use axum::{
    extract::{Query, State},
    http::{HeaderMap, HeaderName, header::SET_COOKIE},
    response::Html,
};
use chrono::Utc;
use serde::Deserialize;

use crate::{server::AppState, spotify::auth, utils, warning};

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    code: Option<String>,
    state: Option<String>,
}

pub async fn callback(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<CallbackParams>,
) -> ([(HeaderName, String); 1], Html<String>) {
    let expected_nonce = super::state_cookie_value(&headers);
    let verified = match (params.state.as_deref(), expected_nonce.as_deref()) {
        (Some(oauth_state), Some(nonce)) => utils::verify_state(
            oauth_state,
            &state.config.client_secret,
            nonce,
            Utc::now().timestamp(),
        ),
        _ => false,
    };

    let refresh_token = if verified {
        let redirect_uri = super::callback_uri(&state.config, &headers);
        let code = params.code.as_deref().unwrap_or_default();
        auth::handle_callback(&state.client, &state.config, code, &redirect_uri).await
    } else {
        warning!("Rejected callback with a missing, expired or foreign state parameter.");
        String::new()
    };

    (
        [(SET_COOKIE, super::clear_state_cookie())],
        Html(format!(
            "<h1>Your Refresh Token:</h1><p>{}</p><p>Add this to your environment as SPOTIFY_REFRESH_TOKEN</p>",
            html_escape::encode_text(&refresh_token)
        )),
    )
}
