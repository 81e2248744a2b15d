use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::config;

/// Upper bound on any single upstream call. A hung upstream fails the
/// request instead of hanging it indefinitely.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Status and parsed JSON body of one upstream call.
///
/// The client performs no status-code branching: error bodies come back the
/// same way success bodies do, and callers that care check [`is_success`]
/// themselves.
///
/// [`is_success`]: ApiResponse::is_success
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

fn http_client() -> Result<Client, reqwest::Error> {
    Client::builder().timeout(REQUEST_TIMEOUT).build()
}

/// Issues a GET against the Web API base URL + `path` with a bearer token.
///
/// An absent token arrives here as an empty string; the request is still
/// sent without a valid credential and the upstream rejection surfaces
/// through the returned status and error body like any other failure.
pub async fn get(path: &str, token: &str) -> Result<ApiResponse, reqwest::Error> {
    let client = http_client()?;
    let response = client
        .get(format!("{uri}{path}", uri = config::api_url()))
        .bearer_auth(token)
        .send()
        .await?;

    let status = response.status();
    let body = response.json::<Value>().await?;
    Ok(ApiResponse { status, body })
}

/// Issues a POST with a JSON body against the Web API base URL + `path`.
pub async fn post<B: Serialize>(
    path: &str,
    token: &str,
    body: &B,
) -> Result<ApiResponse, reqwest::Error> {
    let client = http_client()?;
    let response = client
        .post(format!("{uri}{path}", uri = config::api_url()))
        .bearer_auth(token)
        .json(body)
        .send()
        .await?;

    let status = response.status();
    let body = response.json::<Value>().await?;
    Ok(ApiResponse { status, body })
}
