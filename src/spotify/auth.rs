use reqwest::{Client, Url, header::AUTHORIZATION};
use serde_json::Value;

use crate::{
    config::{self, Config},
    error::SpotifyError,
    types::Grant,
    utils, warning,
};

/// Exchanges a grant for a token at the Spotify token endpoint.
///
/// Both grant variants authenticate the client with an HTTP Basic header
/// built from the configured client id and secret and send their parameters
/// form-encoded. The request is made once; there is no retry.
///
/// # Arguments
///
/// * `client` - HTTP client used for the request
/// * `config` - Configuration holding the client credentials and token URL
/// * `grant` - Refresh-token grant or authorization-code grant
///
/// # Returns
///
/// - `Ok(String)` - `access_token` for a refresh grant, `refresh_token` for an
///   authorization-code grant
/// - `Err(SpotifyError)` - Transport failure, non-success status, or a
///   response without the expected (non-empty) token field
///
/// # Example
///
/// ```
/// let grant = Grant::Refresh { refresh_token: "AQC...refresh_token" };
/// let access_token = exchange(&client, &config, &grant).await?;
/// ```
pub async fn exchange(
    client: &Client,
    config: &Config,
    grant: &Grant<'_>,
) -> Result<String, SpotifyError> {
    let res = client
        .post(&config.token_url)
        .header(
            AUTHORIZATION,
            utils::basic_auth_header(&config.client_id, &config.client_secret),
        )
        .form(&grant.form())
        .send()
        .await?;

    let status = res.status();
    if !status.is_success() {
        return Err(SpotifyError::Status(status));
    }

    let json: Value = res.json().await?;
    let field = grant.token_field();
    match json[field].as_str() {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(SpotifyError::MissingField(field)),
    }
}

/// Like [`exchange`], but any failure is logged and collapsed into an empty
/// string.
pub async fn exchange_or_empty(client: &Client, config: &Config, grant: &Grant<'_>) -> String {
    match exchange(client, config, grant).await {
        Ok(token) => token,
        Err(e) => {
            warning!("Token exchange failed. Err: {}", e);
            String::new()
        }
    }
}

/// Builds the Spotify authorization URL the user visits to grant access.
///
/// The URL carries the client id, `response_type=code`, the callback URI,
/// the read-only [`config::SCOPE`] and the signed `state` value. Query values
/// are percent-encoded.
///
/// # Errors
///
/// Returns [`SpotifyError::InvalidUrl`] when the configured authorization
/// endpoint is not a valid URL.
///
/// # Example
///
/// ```
/// let state = utils::generate_state(&config.client_secret, Utc::now().timestamp());
/// let url = authorize_url(&config, "http://localhost:3000/api/callback", &state)?;
/// ```
pub fn authorize_url(
    config: &Config,
    redirect_uri: &str,
    state: &str,
) -> Result<String, SpotifyError> {
    let url = Url::parse_with_params(
        &config.auth_url,
        &[
            ("client_id", config.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", redirect_uri),
            ("scope", config::SCOPE),
            ("state", state),
        ],
    )
    .map_err(|e| SpotifyError::InvalidUrl(e.to_string()))?;

    Ok(url.into())
}

/// Exchanges the authorization code from the OAuth callback for a refresh
/// token.
///
/// The code is not validated; an empty code is sent as-is and Spotify's
/// rejection ends up as an empty string, which is what the callback page
/// displays.
///
/// # Arguments
///
/// * `code` - Authorization code from the callback query (may be empty)
/// * `redirect_uri` - The same callback URI that was sent in the
///   authorization URL
pub async fn handle_callback(
    client: &Client,
    config: &Config,
    code: &str,
    redirect_uri: &str,
) -> String {
    let grant = Grant::AuthorizationCode { code, redirect_uri };
    exchange_or_empty(client, config, &grant).await
}
