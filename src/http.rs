//! REST transport
//!
//! Thin fetch wrapper: bearer authorization, JSON bodies, and error
//! extraction from the backend's `detail` field. Every call is a single
//! request with no retry.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::connection::ConnectionState;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("API connection is not configured")]
    NotConfigured,
    #[error("{0}")]
    Transport(String),
    #[error("{detail}")]
    Http { status: u16, detail: String },
    #[error("Unexpected response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Characters escaped inside query values.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?');

/// Query-string builder. Blank values are skipped entirely so list
/// filters only send the parameters the user actually set.
#[derive(Debug, Default)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, key: &str, value: impl AsRef<str>) -> Self {
        let value = value.as_ref().trim();
        if !value.is_empty() {
            self.pairs.push((key.to_string(), value.to_string()));
        }
        self
    }

    pub fn push_opt(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    pub fn into_string(self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let encoded: Vec<String> = self
            .pairs
            .iter()
            .map(|(key, value)| {
                format!("{key}={}", utf8_percent_encode(value, QUERY_VALUE))
            })
            .collect();
        format!("?{}", encoded.join("&"))
    }
}

fn js_error_message(err: JsValue) -> String {
    js_sys::Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "network request failed".to_string())
}

/// Pull a human-readable message out of an error body, falling back to
/// the bare status code.
fn extract_detail(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("detail").cloned())
        .map(|detail| match detail {
            serde_json::Value::String(text) => text,
            other => other.to_string(),
        })
        .unwrap_or_else(|| format!("Request failed with HTTP {status}"))
}

async fn send(
    conn: &ConnectionState,
    method: &str,
    path: &str,
    body: Option<String>,
) -> ApiResult<String> {
    if !conn.is_ready() {
        return Err(ApiError::NotConfigured);
    }
    let url = format!("{}{}", conn.api_url, path);

    let mut opts = RequestInit::new();
    opts.method(method);
    opts.mode(RequestMode::Cors);
    if let Some(body) = &body {
        opts.body(Some(&JsValue::from_str(body)));
    }

    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| ApiError::Transport(js_error_message(e)))?;
    if body.is_some() {
        let _ = request.headers().set("Content-Type", "application/json");
    }
    if let Some(authorization) = conn.bearer_header() {
        let _ = request.headers().set("Authorization", &authorization);
    }

    let window = web_sys::window().ok_or(ApiError::NotConfigured)?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Transport(js_error_message(e)))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| ApiError::Transport(js_error_message(e)))?;

    let status = resp.status();
    let text = JsFuture::from(
        resp.text()
            .map_err(|e| ApiError::Transport(js_error_message(e)))?,
    )
    .await
    .map_err(|e| ApiError::Transport(js_error_message(e)))?
    .as_string()
    .unwrap_or_default();

    if !resp.ok() {
        return Err(ApiError::Http {
            status,
            detail: extract_detail(status, &text),
        });
    }
    Ok(text)
}

fn decode<T: DeserializeOwned>(text: &str) -> ApiResult<T> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<B: Serialize>(body: &B) -> ApiResult<String> {
    serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn get_json<T: DeserializeOwned>(conn: &ConnectionState, path: &str) -> ApiResult<T> {
    let text = send(conn, "GET", path, None).await?;
    decode(&text)
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    conn: &ConnectionState,
    path: &str,
    body: &B,
) -> ApiResult<T> {
    let text = send(conn, "POST", path, Some(encode(body)?)).await?;
    decode(&text)
}

/// POST with no request body (e.g. scheduler triggers).
pub async fn post_empty<T: DeserializeOwned>(conn: &ConnectionState, path: &str) -> ApiResult<T> {
    let text = send(conn, "POST", path, None).await?;
    decode(&text)
}

pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
    conn: &ConnectionState,
    path: &str,
    body: &B,
) -> ApiResult<T> {
    let text = send(conn, "PATCH", path, Some(encode(body)?)).await?;
    decode(&text)
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    conn: &ConnectionState,
    path: &str,
    body: &B,
) -> ApiResult<T> {
    let text = send(conn, "PUT", path, Some(encode(body)?)).await?;
    decode(&text)
}

/// PUT where the caller does not care about the response body.
pub async fn put_unit<B: Serialize>(conn: &ConnectionState, path: &str, body: &B) -> ApiResult<()> {
    send(conn, "PUT", path, Some(encode(body)?)).await?;
    Ok(())
}

/// PUT with no body, response ignored (notification read marks).
pub async fn put_empty_unit(conn: &ConnectionState, path: &str) -> ApiResult<()> {
    send(conn, "PUT", path, None).await?;
    Ok(())
}

pub async fn delete(conn: &ConnectionState, path: &str) -> ApiResult<()> {
    send(conn, "DELETE", path, None).await?;
    Ok(())
}

/// Multipart upload. The browser sets the multipart boundary itself, so
/// no Content-Type header is written here.
pub async fn post_form<T: DeserializeOwned>(
    conn: &ConnectionState,
    path: &str,
    form: &web_sys::FormData,
) -> ApiResult<T> {
    if !conn.is_ready() {
        return Err(ApiError::NotConfigured);
    }
    let url = format!("{}{}", conn.api_url, path);

    let mut opts = RequestInit::new();
    opts.method("POST");
    opts.mode(RequestMode::Cors);
    opts.body(Some(form.as_ref()));

    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| ApiError::Transport(js_error_message(e)))?;
    if let Some(authorization) = conn.bearer_header() {
        let _ = request.headers().set("Authorization", &authorization);
    }

    let window = web_sys::window().ok_or(ApiError::NotConfigured)?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Transport(js_error_message(e)))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| ApiError::Transport(js_error_message(e)))?;
    let status = resp.status();
    let text = JsFuture::from(
        resp.text()
            .map_err(|e| ApiError::Transport(js_error_message(e)))?,
    )
    .await
    .map_err(|e| ApiError::Transport(js_error_message(e)))?
    .as_string()
    .unwrap_or_default();

    if !resp.ok() {
        return Err(ApiError::Http {
            status,
            detail: extract_detail(status, &text),
        });
    }
    decode(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_skips_blank_values() {
        let q = Query::new()
            .push("status", "open")
            .push("search", "  ")
            .push_opt("owner", None)
            .into_string();
        assert_eq!(q, "?status=open");
    }

    #[test]
    fn query_encodes_reserved_characters() {
        let q = Query::new().push("search", "kalite & güvenlik").into_string();
        assert_eq!(q, "?search=kalite%20%26%20g%C3%BCvenlik");
    }

    #[test]
    fn empty_query_renders_nothing() {
        assert_eq!(Query::new().into_string(), "");
    }

    #[test]
    fn detail_field_is_preferred() {
        assert_eq!(
            extract_detail(404, r#"{"detail":"Revision not found."}"#),
            "Revision not found."
        );
    }

    #[test]
    fn non_string_detail_is_stringified() {
        let detail = extract_detail(422, r#"{"detail":[{"loc":["body","title"]}]}"#);
        assert!(detail.contains("title"));
    }

    #[test]
    fn missing_detail_falls_back_to_status() {
        assert_eq!(extract_detail(502, "bad gateway"), "Request failed with HTTP 502");
    }
}
