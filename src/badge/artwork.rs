use std::io::Cursor;

use base64::{Engine, engine::general_purpose::STANDARD};
use image::{ImageFormat, imageops::FilterType};
use reqwest::Client;

use crate::{Res, badge::ARTWORK_SIZE, warning};

/// Downloads album artwork and returns it as a 150×150 PNG data URI.
///
/// An empty URL skips the request. Download or decode failures are logged
/// and yield `None`, leaving the badge with a placeholder.
pub async fn fetch_data_uri(client: &Client, url: &str) -> Option<String> {
    if url.is_empty() {
        return None;
    }

    match fetch(client, url).await {
        Ok(data_uri) => Some(data_uri),
        Err(e) => {
            warning!("Cannot embed artwork from {}. Err: {}", url, e);
            None
        }
    }
}

async fn fetch(client: &Client, url: &str) -> Res<String> {
    let bytes = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;

    let png = resize_to_png(&bytes)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
}

/// Decodes an image and resizes it to an exact [`ARTWORK_SIZE`] square PNG.
pub fn resize_to_png(bytes: &[u8]) -> Result<Vec<u8>, image::ImageError> {
    let image = image::load_from_memory(bytes)?.resize_exact(
        ARTWORK_SIZE,
        ARTWORK_SIZE,
        FilterType::Lanczos3,
    );

    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}
