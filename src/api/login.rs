use axum::{
    extract::State,
    http::{
        HeaderMap, StatusCode,
        header::{LOCATION, SET_COOKIE},
    },
    response::{IntoResponse, Response},
};
use chrono::Utc;

use crate::{server::AppState, spotify::auth, utils, warning};

pub async fn login(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let redirect_uri = super::callback_uri(&state.config, &headers);
    let oauth_state = utils::generate_state(&state.config.client_secret, Utc::now().timestamp());

    match auth::authorize_url(&state.config, &redirect_uri, &oauth_state) {
        Ok(url) => {
            let cookie = super::state_cookie(utils::state_nonce(&oauth_state), &redirect_uri);
            (StatusCode::FOUND, [(LOCATION, url), (SET_COOKIE, cookie)]).into_response()
        }
        // Still 200, like every other route.
        Err(e) => {
            warning!("Cannot build authorization url. Err: {}", e);
            "Login is not configured: check SPOTIFY_API_AUTH_URL".into_response()
        }
    }
}
