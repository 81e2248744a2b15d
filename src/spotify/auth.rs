use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;
use serde_json::Value;

use crate::{config, spotify::client::REQUEST_TIMEOUT};

/// Scopes requested on every login: read top tracks, read/write playlists.
pub const SCOPE: &str = "user-top-read playlist-modify-private playlist-modify-public";

/// Builds the authorization redirect URL.
///
/// The scope string is fixed and `show_dialog=true` forces the Spotify
/// login screen on every `/authorize` visit instead of silently reusing an
/// existing remote session.
pub fn authorize_url() -> String {
    format!(
        "{auth_url}?response_type=code&client_id={client_id}&scope={scope}&redirect_uri={redirect_uri}&show_dialog=true",
        auth_url = config::auth_url(),
        client_id = config::client_id(),
        scope = SCOPE.replace(' ', "%20"),
        redirect_uri = config::redirect_uri(),
    )
}

/// Exchanges an authorization code for an access token.
///
/// POSTs the code, redirect URI and `grant_type=authorization_code` as a
/// form body to the token endpoint, authenticated with HTTP Basic
/// credentials built from the configured client id and secret.
///
/// A well-formed response without an `access_token` field is an error, so
/// no garbage value ever reaches the token store.
pub async fn exchange_code(code: &str) -> Result<String, String> {
    let credentials = STANDARD.encode(format!(
        "{id}:{secret}",
        id = config::client_id(),
        secret = config::client_secret()
    ));
    let redirect_uri = config::redirect_uri();

    let client = Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| e.to_string())?;
    let res = client
        .post(config::token_url())
        .header("Authorization", format!("Basic {credentials}"))
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri.as_str()),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let json: Value = res.json().await.map_err(|e| e.to_string())?;

    match json["access_token"].as_str() {
        Some(token) => Ok(token.to_string()),
        None => Err(format!("token endpoint returned no access_token: {json}")),
    }
}
