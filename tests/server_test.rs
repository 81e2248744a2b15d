//! End-to-end tests over real HTTP: the application router and a mock
//! Spotify upstream are bound on ephemeral ports and driven with reqwest.
//! The whole flow runs inside a single test because the configuration is
//! process-wide environment state.

use std::net::SocketAddr;

use axum::{
    Json, Router,
    extract::{Path, RawQuery},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use base64::{Engine, engine::general_purpose::STANDARD};
use serde_json::{Value, json};

use spotidash::{server, store::TokenStore};

const ACCESS_TOKEN: &str = "mock-access-token";
const CLIENT_ID: &str = "test-client-id";
const CLIENT_SECRET: &str = "test-client-secret";

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(|value| value == format!("Bearer {ACCESS_TOKEN}"))
        .unwrap_or(false)
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({"error": {"status": 401, "message": "Invalid access token"}})),
    )
}

async fn mock_me(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return unauthorized();
    }
    (
        StatusCode::OK,
        Json(json!({"id": "user-1", "display_name": "Test User"})),
    )
}

async fn mock_top_tracks(headers: HeaderMap, RawQuery(query): RawQuery) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return unauthorized();
    }
    (
        StatusCode::OK,
        Json(json!({
            "items": [
                {
                    "name": "Track One",
                    "uri": "spotify:track:one",
                    "artists": [{"name": "Artist A"}]
                },
                {
                    "name": "Sneaky <script>alert(1)</script>",
                    "uri": "spotify:track:two",
                    "artists": [{"name": "A & B"}]
                }
            ],
            "query": query.unwrap_or_default(),
        })),
    )
}

async fn mock_recommendations(
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return unauthorized();
    }
    (
        StatusCode::OK,
        Json(json!({
            "tracks": [
                {
                    "name": "Reco Track",
                    "uri": "spotify:track:reco",
                    "artists": [{"name": "Artist B"}]
                }
            ],
            "query": query.unwrap_or_default(),
        })),
    )
}

async fn mock_create_playlist(
    headers: HeaderMap,
    Path(user_id): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return unauthorized();
    }
    assert_eq!(user_id, "user-1");
    assert_eq!(body["public"], false);
    (
        StatusCode::CREATED,
        Json(json!({"id": "playlist-1", "name": body["name"]})),
    )
}

async fn mock_add_tracks(
    headers: HeaderMap,
    Path(playlist_id): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return unauthorized();
    }
    assert_eq!(playlist_id, "playlist-1");
    assert!(body["uris"].as_array().is_some_and(|uris| !uris.is_empty()));
    (StatusCode::CREATED, Json(json!({"snapshot_id": "snapshot-1"})))
}

async fn mock_token(headers: HeaderMap) -> Json<Value> {
    let expected = format!("Basic {}", STANDARD.encode(format!("{CLIENT_ID}:{CLIENT_SECRET}")));
    let presented = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if presented == expected {
        Json(json!({"access_token": ACCESS_TOKEN, "token_type": "Bearer", "expires_in": 3600}))
    } else {
        Json(json!({"error": "invalid_client"}))
    }
}

fn mock_upstream() -> Router {
    Router::new()
        .route("/me", get(mock_me))
        .route("/me/top/tracks", get(mock_top_tracks))
        .route("/recommendations", get(mock_recommendations))
        .route("/users/{user_id}/playlists", post(mock_create_playlist))
        .route("/playlists/{playlist_id}/tracks", post(mock_add_tracks))
        .route("/api/token", post(mock_token))
        // Spotify answers JSON on every path, including unknown ones.
        .fallback(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({"error": {"status": 404, "message": "Service not found"}})),
            )
        })
}

async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn test_full_proxy_flow_against_mock_upstream() {
    let upstream = spawn(mock_upstream()).await;

    unsafe {
        std::env::set_var("CLIENT_ID", CLIENT_ID);
        std::env::set_var("CLIENT_SECRET", CLIENT_SECRET);
        std::env::set_var("REDIRECT_URI", "http://127.0.0.1:3000/callback");
        std::env::set_var("SPOTIFY_AUTH_URL", format!("http://{upstream}/authorize"));
        std::env::set_var("SPOTIFY_TOKEN_URL", format!("http://{upstream}/api/token"));
        std::env::set_var("SPOTIFY_API_URL", format!("http://{upstream}"));
    }

    let store = TokenStore::new();
    let app_addr = spawn(server::app(store.clone())).await;
    let base = format!("http://{app_addr}");

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    // Home page carries the login link.
    let res = client.get(format!("{base}/")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.text().await.unwrap().contains("/authorize"));

    // Health endpoint reports status and version.
    let res = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    // /authorize redirects with the fixed scope string and show_dialog=true.
    let res = client.get(format!("{base}/authorize")).send().await.unwrap();
    assert!(res.status().is_redirection());
    let location = res.headers()["location"].to_str().unwrap().to_string();
    assert!(location.starts_with(&format!("http://{upstream}/authorize?")));
    assert!(location.contains("response_type=code"));
    assert!(
        location.contains("scope=user-top-read%20playlist-modify-private%20playlist-modify-public")
    );
    assert!(location.contains("show_dialog=true"));

    // Without a prior login the playlist flow dies at the creation step.
    let res = client
        .post(format!("{base}/create-playlist"))
        .json(&json!({
            "playlistName": "Road Trip",
            "tracks": ["spotify:track:abc", "spotify:track:def"]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 500);
    assert_eq!(res.text().await.unwrap(), "Failed to create playlist.");

    // The callback exchanges the code and stores exactly the returned token.
    let res = client
        .get(format!("{base}/callback?code=test-code"))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_redirection());
    assert_eq!(res.headers()["location"], "/dashboard");
    assert_eq!(store.get().await.as_deref(), Some(ACCESS_TOKEN));

    // /get-top-tracks relays the upstream body for the exact query string.
    let res = client
        .get(format!("{base}/get-top-tracks?time_range=short_term"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["query"], "time_range=short_term&limit=10");
    assert_eq!(body["items"][0]["name"], "Track One");

    // An invalid time_range is forwarded verbatim, not substituted.
    let res = client
        .get(format!("{base}/get-top-tracks?time_range=bogus_range"))
        .send()
        .await
        .unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["query"], "time_range=bogus_range&limit=10");

    // Dashboard renders the profile and the top tracks.
    let res = client.get(format!("{base}/dashboard")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    let page = res.text().await.unwrap();
    assert!(page.contains("Test User"));
    assert!(page.contains("Track One"));

    // Upstream-controlled names are escaped before they reach the page.
    assert!(page.contains("Sneaky &lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(page.contains("A &amp; B"));
    assert!(!page.contains("<script>"));

    // Recommendations view renders the seeded tracks.
    let res = client
        .get(format!("{base}/recommendations?artist=artist-1&track=track-1"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.text().await.unwrap().contains("Reco Track"));

    // Create playlist: both dependent calls succeed.
    let res = client
        .post(format!("{base}/create-playlist"))
        .json(&json!({
            "playlistName": "Road Trip",
            "tracks": ["spotify:track:abc", "spotify:track:def"]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "Playlist created and tracks added.");

    // Save-song demo flow against the configured track.
    let res = client.post(format!("{base}/save-song")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(res.text().await.unwrap(), "Track added to playlist.");

    // Logout clears the token and redirects home.
    let res = client.get(format!("{base}/logout")).send().await.unwrap();
    assert!(res.status().is_redirection());
    assert_eq!(res.headers()["location"], "/");
    assert_eq!(store.get().await, None);

    // After logout the authenticated flow fails again.
    let res = client
        .post(format!("{base}/create-playlist"))
        .json(&json!({"playlistName": "Road Trip", "tracks": ["spotify:track:abc"]}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 500);
    assert_eq!(res.text().await.unwrap(), "Failed to create playlist.");
}
