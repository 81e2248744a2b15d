use crate::{
    spotify::client::{self, ApiResponse},
    types::{AddTracksRequest, CreatePlaylistRequest},
};

/// Creates a private playlist owned by `user_id`.
pub async fn create(token: &str, user_id: &str, name: &str) -> Result<ApiResponse, reqwest::Error> {
    let body = CreatePlaylistRequest {
        name: name.to_string(),
        public: false,
    };
    client::post(&format!("/users/{user_id}/playlists"), token, &body).await
}

/// Appends `uris` to an existing playlist.
pub async fn add_tracks(
    token: &str,
    playlist_id: &str,
    uris: Vec<String>,
) -> Result<ApiResponse, reqwest::Error> {
    let body = AddTracksRequest { uris };
    client::post(&format!("/playlists/{playlist_id}/tracks"), token, &body).await
}
