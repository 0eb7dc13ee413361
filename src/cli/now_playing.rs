use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tabled::Table;

use crate::{
    badge,
    config::Config,
    error::SpotifyError,
    error, info,
    spotify::player,
    success,
    types::{NowPlayingTableRow, Playback},
    warning,
};

pub async fn now_playing(config: Config) {
    match fetch_with_spinner(&config).await {
        Ok(Playback::Playing(track)) => {
            let table = Table::new(vec![NowPlayingTableRow::from(&track)]);
            println!("{}", table);
        }
        Ok(Playback::Nothing) => info!("Not playing"),
        Err(e) => warning!("Cannot fetch current track. Err: {}", e),
    }
}

pub async fn write_badge(config: Config, output: PathBuf) {
    let track = match fetch_with_spinner(&config).await {
        Ok(Playback::Playing(track)) => track,
        Ok(Playback::Nothing) => {
            warning!("Not playing, no badge written.");
            return;
        }
        Err(e) => error!("Cannot fetch current track. Err: {}", e),
    };

    let client = Client::new();
    let rendered = badge::render(&client, &config, &track).await;
    if let Err(e) = async_fs::write(&output, rendered.bytes).await {
        error!("Cannot write badge to {}. Err: {}", output.display(), e);
    }

    success!("Badge written to {}", output.display());
}

async fn fetch_with_spinner(config: &Config) -> Result<Playback, SpotifyError> {
    if config.refresh_token.is_none() {
        warning!("SPOTIFY_REFRESH_TOKEN is not set. Run spotify-badge login first.");
    }

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching current track...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let client = Client::new();
    let result = player::current_track(&client, config).await;
    pb.finish_and_clear();
    result
}
