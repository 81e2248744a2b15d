use axum::{Extension, Json, http::StatusCode};

use crate::{config, spotify, store::TokenStore, success, types::CreatePlaylistBody, warning};

enum PlaylistOutcome {
    Completed,
    CreateFailed,
    AddTracksFailed,
}

/// Creates a playlist named by the request body, then adds the posted track
/// URIs to it. Each of the two dependent upstream calls is checked; a
/// failure at either step answers 500 with a fixed message.
pub async fn create_playlist(
    Extension(store): Extension<TokenStore>,
    Json(body): Json<CreatePlaylistBody>,
) -> (StatusCode, &'static str) {
    let token = store.get().await.unwrap_or_default();

    match build_playlist(&token, &body.playlist_name, body.tracks).await {
        Ok(PlaylistOutcome::Completed) => (StatusCode::OK, "Playlist created and tracks added."),
        Ok(PlaylistOutcome::CreateFailed) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create playlist.")
        }
        Ok(PlaylistOutcome::AddTracksFailed) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to add tracks to playlist.",
        ),
        Err(e) => {
            warning!("Error in playlist creation: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An error occurred while creating the playlist.",
            )
        }
    }
}

/// Demo variant of the playlist flow: creates the configured demo playlist
/// and adds the single configured track to it.
pub async fn save_song(Extension(store): Extension<TokenStore>) -> (StatusCode, &'static str) {
    let token = store.get().await.unwrap_or_default();
    let name = config::demo_playlist_name();
    let uris = vec![config::demo_track_uri()];

    match build_playlist(&token, &name, uris).await {
        Ok(PlaylistOutcome::Completed) => (StatusCode::OK, "Track added to playlist."),
        Ok(PlaylistOutcome::CreateFailed) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create playlist.")
        }
        Ok(PlaylistOutcome::AddTracksFailed) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to add track to playlist.",
        ),
        Err(e) => {
            warning!("Error while saving song: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An error occurred while saving the song.",
            )
        }
    }
}

async fn build_playlist(
    token: &str,
    name: &str,
    uris: Vec<String>,
) -> Result<PlaylistOutcome, reqwest::Error> {
    let profile = spotify::tracks::profile(token).await?;
    let user_id = profile.body["id"].as_str().unwrap_or_default().to_string();

    let created = spotify::playlist::create(token, &user_id, name).await?;
    if !created.is_success() {
        warning!("Failed to create playlist: {}", created.status);
        return Ok(PlaylistOutcome::CreateFailed);
    }

    let playlist_id = created.body["id"].as_str().unwrap_or_default().to_string();
    let added = spotify::playlist::add_tracks(token, &playlist_id, uris).await?;
    if !added.is_success() {
        // No rollback: the playlist created a moment ago stays behind.
        warning!("Failed to add tracks: {}", added.status);
        return Ok(PlaylistOutcome::AddTracksFailed);
    }

    success!("Tracks added to playlist {}", playlist_id);
    Ok(PlaylistOutcome::Completed)
}
