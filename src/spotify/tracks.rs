use crate::spotify::client::{self, ApiResponse};

/// Query path for the current user's top tracks in the given time window.
///
/// `time_range` is forwarded verbatim: no validation, no default
/// substitution. An invalid value reaches Spotify unchanged and its own
/// validation error comes back in the response body.
pub fn top_tracks_path(time_range: &str) -> String {
    format!("/me/top/tracks?time_range={time_range}&limit=10")
}

/// Query path for recommendations seeded by one artist, one track and the
/// fixed `rock` genre.
pub fn recommendations_path(artist_id: &str, track_id: &str) -> String {
    format!("/recommendations?seed_artist={artist_id}&seed_genres=rock&seed_tracks={track_id}")
}

/// Fetches the current user's profile.
pub async fn profile(token: &str) -> Result<ApiResponse, reqwest::Error> {
    client::get("/me", token).await
}

/// Fetches the user's top 10 tracks for the default time window.
pub async fn top_ten(token: &str) -> Result<ApiResponse, reqwest::Error> {
    client::get("/me/top/tracks?limit=10", token).await
}

/// Fetches the user's top tracks for an arbitrary `time_range` value.
pub async fn top_tracks(token: &str, time_range: &str) -> Result<ApiResponse, reqwest::Error> {
    client::get(&top_tracks_path(time_range), token).await
}

/// Fetches recommended tracks for the given seeds.
pub async fn recommendations(
    token: &str,
    artist_id: &str,
    track_id: &str,
) -> Result<ApiResponse, reqwest::Error> {
    client::get(&recommendations_path(artist_id, track_id), token).await
}
