use serde::{Deserialize, Serialize};

/// JSON body accepted by `POST /create-playlist`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaylistBody {
    #[serde(rename = "playlistName")]
    pub playlist_name: String,
    pub tracks: Vec<String>,
}

/// Body sent to `POST /users/{user_id}/playlists`.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub public: bool,
}

/// Body sent to `POST /playlists/{playlist_id}/tracks`.
#[derive(Debug, Clone, Serialize)]
pub struct AddTracksRequest {
    pub uris: Vec<String>,
}
