use std::collections::HashMap;

use axum::{
    Extension,
    extract::Query,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::Value;

use crate::{spotify, store::TokenStore};

pub async fn home() -> Html<&'static str> {
    Html(
        r#"<!DOCTYPE html>
<html>
  <head><title>spotidash</title></head>
  <body>
    <h1>spotidash</h1>
    <p><a href="/authorize">Log in with Spotify</a></p>
  </body>
</html>"#,
    )
}

pub async fn dashboard(Extension(store): Extension<TokenStore>) -> Response {
    let token = store.get().await.unwrap_or_default();

    let profile = match spotify::tracks::profile(&token).await {
        Ok(resp) => resp,
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    };
    let top = match spotify::tracks::top_ten(&token).await {
        Ok(resp) => resp,
        Err(e) => return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    };

    let name = escape_html(
        profile.body["display_name"]
            .as_str()
            .unwrap_or("Unknown user"),
    );

    Html(format!(
        "<h1>Welcome, {name}</h1>\
         <h2>Your top tracks</h2>\
         <ol>{rows}</ol>\
         <p><a href=\"/logout\">Log out</a></p>",
        rows = track_rows(&top.body["items"]),
    ))
    .into_response()
}

pub async fn recommendations(
    Query(params): Query<HashMap<String, String>>,
    Extension(store): Extension<TokenStore>,
) -> Response {
    let token = store.get().await.unwrap_or_default();
    let artist_id = params.get("artist").map(String::as_str).unwrap_or_default();
    let track_id = params.get("track").map(String::as_str).unwrap_or_default();

    match spotify::tracks::recommendations(&token, artist_id, track_id).await {
        Ok(resp) => Html(format!(
            "<h1>Recommended tracks</h1><ol>{rows}</ol>",
            rows = track_rows(&resp.body["tracks"]),
        ))
        .into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}

fn track_rows(items: &Value) -> String {
    let Some(items) = items.as_array() else {
        return String::new();
    };
    items.iter().map(track_row).collect()
}

fn track_row(track: &Value) -> String {
    let name = escape_html(track["name"].as_str().unwrap_or("Unknown track"));
    let artists = track["artists"]
        .as_array()
        .map(|artists| {
            artists
                .iter()
                .filter_map(|artist| artist["name"].as_str())
                .map(escape_html)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();
    format!("<li>{name} by {artists}</li>")
}

// Upstream-controlled strings are interpolated into markup; neutralize the
// characters that would change its structure.
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
