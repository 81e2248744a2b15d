use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr};

use crate::{api, error, info, store::TokenStore};

/// Builds the application router with every route sharing `store`.
pub fn app(store: TokenStore) -> Router {
    Router::new()
        .route("/", get(api::home))
        .route("/authorize", get(api::authorize))
        .route("/callback", get(api::callback))
        .route("/dashboard", get(api::dashboard))
        .route("/recommendations", get(api::recommendations))
        .route("/get-top-tracks", get(api::get_top_tracks))
        .route("/create-playlist", post(api::create_playlist))
        .route("/save-song", post(api::save_song))
        .route("/logout", get(api::logout))
        .route("/health", get(api::health))
        .layer(Extension(store))
}

pub async fn start(store: TokenStore, addr: String) {
    let app = app(store);

    let addr = match SocketAddr::from_str(&addr) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    info!("Listening on http://{}", addr);
    axum::serve(listener, app).await.unwrap();
}
