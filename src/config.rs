//! Configuration management for the dashboard proxy.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and a `.env` file. It provides a centralized way to
//! manage application configuration including Spotify API credentials, the
//! listen address, and the upstream endpoint URLs.
//!
//! Three values are required and have no defaults: `CLIENT_ID`,
//! `CLIENT_SECRET` and `REDIRECT_URI`. Everything else falls back to the
//! public Spotify endpoints (or a local default for the listen address), so a
//! minimal `.env` with just the credentials is enough to run the server. The
//! endpoint overrides exist mainly so the test suite can point the server at
//! a mock upstream.

use std::env;

/// Loads environment variables from a `.env` file in the working directory.
///
/// A missing `.env` file is not an error; in that case all configuration
/// must come from the process environment.
///
/// # Example
///
/// ```
/// use spotidash::config;
///
/// config::load_env();
/// ```
pub fn load_env() {
    dotenv::dotenv().ok();
}

/// Returns the address the HTTP server binds to.
///
/// Reads the `SERVER_ADDRESS` environment variable, defaulting to
/// `127.0.0.1:3000` when unset.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "127.0.0.1:3000".to_string())
}

/// Returns the Spotify API client ID for authentication.
///
/// Retrieves the `CLIENT_ID` environment variable which contains the client
/// ID obtained when registering the application with Spotify's developer
/// platform.
///
/// # Panics
///
/// Panics if the `CLIENT_ID` environment variable is not set.
pub fn client_id() -> String {
    env::var("CLIENT_ID").expect("CLIENT_ID must be set")
}

/// Returns the Spotify API client secret for authentication.
///
/// Retrieves the `CLIENT_SECRET` environment variable. Together with the
/// client ID it forms the Basic credentials presented to the token endpoint
/// during the authorization-code exchange.
///
/// # Panics
///
/// Panics if the `CLIENT_SECRET` environment variable is not set.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn client_secret() -> String {
    env::var("CLIENT_SECRET").expect("CLIENT_SECRET must be set")
}

/// Returns the OAuth redirect URI.
///
/// Retrieves the `REDIRECT_URI` environment variable which specifies the
/// callback URL that Spotify redirects to after user authorization. This
/// must match the redirect URI registered in the Spotify application
/// settings, typically `http://<server_addr>/callback`.
///
/// # Panics
///
/// Panics if the `REDIRECT_URI` environment variable is not set.
pub fn redirect_uri() -> String {
    env::var("REDIRECT_URI").expect("REDIRECT_URI must be set")
}

/// Returns the Spotify OAuth authorization URL.
///
/// Reads `SPOTIFY_AUTH_URL`, defaulting to the public authorization
/// endpoint. This is where users are redirected to grant permissions.
pub fn auth_url() -> String {
    env::var("SPOTIFY_AUTH_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/authorize".to_string())
}

/// Returns the Spotify OAuth token exchange URL.
///
/// Reads `SPOTIFY_TOKEN_URL`, defaulting to the public token endpoint. Used
/// for exchanging authorization codes for access tokens.
pub fn token_url() -> String {
    env::var("SPOTIFY_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTIFY_API_URL`, defaulting to the public Web API base. All
/// proxied API operations are issued against this base.
pub fn api_url() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the track URI used by the `/save-song` demo route.
///
/// Reads `DEMO_TRACK_URI`, defaulting to a fixed sample track.
pub fn demo_track_uri() -> String {
    env::var("DEMO_TRACK_URI")
        .unwrap_or_else(|_| "spotify:track:40ds3xedbMkWhszkGnZwxi".to_string())
}

/// Returns the playlist name used by the `/save-song` demo route.
///
/// Reads `DEMO_PLAYLIST_NAME`, defaulting to `Test Playlist`.
pub fn demo_playlist_name() -> String {
    env::var("DEMO_PLAYLIST_NAME").unwrap_or_else(|_| "Test Playlist".to_string())
}
