use axum::{
    extract::State,
    http::header::{CACHE_CONTROL, CONTENT_TYPE},
    response::{IntoResponse, Response},
};

use crate::{badge, server::AppState, spotify::player};

pub async fn now_playing(State(state): State<AppState>) -> Response {
    match player::now_playing(&state.client, &state.config).await {
        Some(track) => {
            let badge = badge::render(&state.client, &state.config, &track).await;
            (
                [
                    (CONTENT_TYPE, badge.content_type),
                    (CACHE_CONTROL, "no-cache"),
                ],
                badge.bytes,
            )
                .into_response()
        }
        None => (
            [
                (CONTENT_TYPE, "text/plain; charset=utf-8"),
                (CACHE_CONTROL, "no-cache"),
            ],
            "Not playing",
        )
            .into_response(),
    }
}
