use base64::{
    Engine,
    engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD},
};
use hmac::{Hmac, Mac};
use rand::{Rng, distr::Alphanumeric};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let credentials = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", STANDARD.encode(credentials.as_bytes()))
}

/// Keeps at most `max_chars` characters of `text`.
pub fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Callback URI registered with Spotify for the authorization-code flow.
///
/// A configured public URL wins; otherwise the URI is derived from the
/// request's host and forwarded protocol.
pub fn callback_uri(public_url: Option<&str>, host: Option<&str>, proto: Option<&str>) -> String {
    let root = match public_url {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => format!(
            "{}://{}",
            proto.unwrap_or("http"),
            host.unwrap_or("localhost")
        ),
    };
    format!("{}/api/callback", root)
}

/// Seconds a login `state` stays valid. Also the lifetime of the state cookie.
pub const STATE_TTL_SECS: i64 = 600;

/// Generates a signed OAuth `state` value: `<nonce>.<issued_at>.<signature>`.
///
/// The signature is an HMAC-SHA256 over `<nonce>.<issued_at>` keyed with
/// `secret`. The nonce is also handed to the browser in a cookie, see
/// [`state_nonce`].
pub fn generate_state(secret: &str, issued_at: i64) -> String {
    let nonce: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect();
    let payload = format!("{}.{}", nonce, issued_at);
    let signature = state_mac(&payload, secret)
        .map(|mac| URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes()))
        .unwrap_or_default();
    format!("{}.{}", payload, signature)
}

/// The nonce part of a state value.
pub fn state_nonce(state: &str) -> &str {
    state.split('.').next().unwrap_or_default()
}

/// Checks a state returned by the provider.
///
/// The state must carry `expected_nonce` (the value of the browser's state
/// cookie), be no older than [`STATE_TTL_SECS`] at `now` and carry a valid
/// signature. The signature check runs in constant time.
pub fn verify_state(state: &str, secret: &str, expected_nonce: &str, now: i64) -> bool {
    let mut parts = state.splitn(3, '.');
    let (Some(nonce), Some(issued_at), Some(signature)) = (parts.next(), parts.next(), parts.next())
    else {
        return false;
    };
    if nonce.is_empty() || nonce != expected_nonce {
        return false;
    }

    let fresh = issued_at
        .parse::<i64>()
        .is_ok_and(|issued| (0..=STATE_TTL_SECS).contains(&(now - issued)));
    if !fresh {
        return false;
    }

    let Ok(signature) = URL_SAFE_NO_PAD.decode(signature) else {
        return false;
    };
    state_mac(&format!("{}.{}", nonce, issued_at), secret)
        .is_some_and(|mac| mac.verify_slice(&signature).is_ok())
}

fn state_mac(payload: &str, secret: &str) -> Option<HmacSha256> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).ok()?;
    mac.update(payload.as_bytes());
    Some(mac)
}
