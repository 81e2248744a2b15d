use std::collections::HashMap;

use axum::{
    Extension,
    extract::Query,
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{spotify, store::TokenStore, warning};

pub async fn authorize() -> Redirect {
    Redirect::to(&spotify::auth::authorize_url())
}

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(store): Extension<TokenStore>,
) -> Response {
    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>").into_response();
    };

    match spotify::auth::exchange_code(code).await {
        Ok(token) => {
            store.set(token).await;
            Redirect::to("/dashboard").into_response()
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Html("<h4>Login failed.</h4>").into_response()
        }
    }
}

pub async fn logout(Extension(store): Extension<TokenStore>) -> Redirect {
    store.clear().await;
    Redirect::to("/")
}
