//! REST API gateway helpers.
//!
//! Every non-realtime backend call goes through `send`: base URL + path,
//! JSON bodies by convention, optional bearer token from the identity
//! session, and error normalization. Responses parse as JSON or text based
//! on the response content-type.
//!
//! ERROR HANDLING
//! ==============
//! Non-success statuses become `ApiError::Status` carrying the JSON body's
//! `detail` field when the gateway supplies one, else the HTTP status text.
//! Pages present the message; nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Failure surfaced by the gateway to calling pages.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),
    /// The gateway answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

#[cfg(any(test, feature = "csr"))]
fn request_url(base: &str, path: &str) -> String {
    format!("{base}{path}")
}

#[cfg(any(test, feature = "csr"))]
fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.contains("application/json"))
}

/// `detail` field from a structured gateway error body.
#[cfg(any(test, feature = "csr"))]
fn extract_detail(body: &Value) -> Option<String> {
    body.get("detail")?.as_str().map(str::to_owned)
}

/// Pick the message for a failed response: structured detail first, then the
/// HTTP status text, then a bare status-code fallback.
#[cfg(any(test, feature = "csr"))]
fn failure_message(detail: Option<String>, status_text: &str, status: u16) -> String {
    match detail {
        Some(d) if !d.is_empty() => d,
        _ if !status_text.is_empty() => status_text.to_owned(),
        _ => format!("Request failed: {status}"),
    }
}

#[cfg(feature = "csr")]
async fn read_response(resp: gloo_net::http::Response) -> Result<Value, ApiError> {
    let json_body = is_json_content_type(resp.headers().get("content-type").as_deref());
    if resp.ok() {
        if json_body {
            resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
        } else {
            resp.text()
                .await
                .map(Value::String)
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
    } else {
        let detail = if json_body {
            resp.json::<Value>()
                .await
                .ok()
                .as_ref()
                .and_then(extract_detail)
        } else {
            None
        };
        Err(ApiError::Status {
            status: resp.status(),
            message: failure_message(detail, &resp.status_text(), resp.status()),
        })
    }
}

#[cfg(feature = "csr")]
async fn send(
    method: &str,
    path: &str,
    body: Option<&Value>,
    auth: bool,
) -> Result<Value, ApiError> {
    use gloo_net::http::Request;

    let url = request_url(crate::config::api_base(), path);
    let mut builder = match method {
        "GET" => Request::get(&url),
        "POST" => Request::post(&url),
        "PUT" => Request::put(&url),
        "PATCH" => Request::patch(&url),
        _ => Request::delete(&url),
    };
    if auth {
        if let Some(token) = crate::net::identity::id_token().await {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
    }
    let resp = match body {
        // `.json` also sets the JSON content-type header.
        Some(json) => builder
            .json(json)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await,
        None => builder.send().await,
    }
    .map_err(|e| ApiError::Network(e.to_string()))?;
    read_response(resp).await
}

#[cfg(not(feature = "csr"))]
async fn send(
    method: &str,
    path: &str,
    body: Option<&Value>,
    auth: bool,
) -> Result<Value, ApiError> {
    let _ = (method, path, body, auth);
    Err(ApiError::Network("not available outside the browser".to_owned()))
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET `path`, parsing the JSON response.
pub async fn get<T: DeserializeOwned>(path: &str, auth: bool) -> Result<T, ApiError> {
    decode(send("GET", path, None, auth).await?)
}

/// POST a JSON body to `path`.
pub async fn post<T: DeserializeOwned>(
    path: &str,
    body: &Value,
    auth: bool,
) -> Result<T, ApiError> {
    decode(send("POST", path, Some(body), auth).await?)
}

/// PUT a JSON body to `path`.
pub async fn put<T: DeserializeOwned>(
    path: &str,
    body: &Value,
    auth: bool,
) -> Result<T, ApiError> {
    decode(send("PUT", path, Some(body), auth).await?)
}

/// PATCH a JSON body to `path`.
pub async fn patch<T: DeserializeOwned>(
    path: &str,
    body: &Value,
    auth: bool,
) -> Result<T, ApiError> {
    decode(send("PATCH", path, Some(body), auth).await?)
}

/// DELETE `path`.
pub async fn delete<T: DeserializeOwned>(path: &str, auth: bool) -> Result<T, ApiError> {
    decode(send("DELETE", path, None, auth).await?)
}

/// POST multipart form data to `path`. The browser sets the multipart
/// content-type and boundary; no JSON header is attached.
#[cfg(feature = "csr")]
pub async fn upload<T: DeserializeOwned>(
    path: &str,
    form: web_sys::FormData,
    auth: bool,
) -> Result<T, ApiError> {
    let url = request_url(crate::config::api_base(), path);
    let mut builder = gloo_net::http::Request::post(&url);
    if auth {
        if let Some(token) = crate::net::identity::id_token().await {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
    }
    let resp = builder
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(read_response(resp).await?)
}
