use std::collections::HashMap;

use axum::{
    Extension, Json,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{spotify, store::TokenStore};

/// Returns the user's top tracks for the caller-supplied `time_range` as
/// JSON, success or not: the upstream body is relayed unmodified.
pub async fn get_top_tracks(
    Query(params): Query<HashMap<String, String>>,
    Extension(store): Extension<TokenStore>,
) -> Response {
    let token = store.get().await.unwrap_or_default();
    let time_range = params
        .get("time_range")
        .map(String::as_str)
        .unwrap_or_default();

    match spotify::tracks::top_tracks(&token, time_range).await {
        Ok(resp) => Json(resp.body).into_response(),
        Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
    }
}
