use crate::api::api_url;
use gloo_net::http::{Request, Response};
use log::debug;
use serde::de::DeserializeOwned;
use shared::{ErrorResponse, Result, SharedError};

/// Builds `<base><path>?team=<percent-encoded team>`.
pub fn team_url(path: &str, team: &str) -> String {
    format!("{}?team={}", api_url(path), urlencoding::encode(team))
}

/// Issues a GET and decodes the JSON body. Anything other than a 2xx with a
/// decodable body is an error; there is no retry.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    debug!("GET {}", url);

    let response = Request::get(url).send().await.map_err(transport_error)?;

    if !response.ok() {
        return Err(status_error(&response).await);
    }

    response.json::<T>().await.map_err(transport_error)
}

fn transport_error(error: gloo_net::Error) -> SharedError {
    match error {
        gloo_net::Error::SerdeError(e) => SharedError::Decode(e.to_string()),
        other => SharedError::Network(other.to_string()),
    }
}

async fn status_error(response: &Response) -> SharedError {
    let body = response.text().await.unwrap_or_default();
    http_error(response.status(), &response.status_text(), &body)
}

/// Prefers the backend's `{"error": ...}` message over the bare status text.
pub fn http_error(status: u16, status_text: &str, body: &str) -> SharedError {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(body) => SharedError::http(status, body.error),
        Err(_) => SharedError::http(status, status_text),
    }
}
