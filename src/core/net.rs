//! Single-request transport: URL assembly, bearer header, status mapping and decoding.

use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use std::env;

use crate::core::{ApiRequest, GfError, GhostfolioClient};

/// Longest slice of a raw body carried into an error message.
const MAX_MESSAGE_LEN: usize = 500;

/// Runs an authenticated call: ensures a session, sends once, decodes the body.
///
/// A 401 drops the cached session token so the next call re-authenticates; the
/// failing call is not repeated.
pub(crate) async fn execute<T: DeserializeOwned>(
    client: &GhostfolioClient,
    req: &ApiRequest,
) -> Result<T, GfError> {
    let jwt = client.ensure_session().await?;
    let result = send(client, req, Some(&jwt)).await;

    if let Err(GfError::Unauthorized { status: 401, .. }) = &result {
        #[cfg(feature = "tracing")]
        tracing::debug!(endpoint = %req.endpoint(), "session token rejected; clearing it");
        client.clear_session(&jwt).await;
    }

    result
}

/// Sends `req` once with an optional bearer token and decodes the JSON body into `T`.
pub(crate) async fn send<T: DeserializeOwned>(
    client: &GhostfolioClient,
    req: &ApiRequest,
    bearer: Option<&str>,
) -> Result<T, GfError> {
    let endpoint = req.endpoint();
    let mut url = client.endpoint_url(req.version, req.segments.as_slice())?;
    if !req.query.is_empty() {
        url.query_pairs_mut().extend_pairs(&req.query);
    }

    if env::var("GF_DEBUG").ok().as_deref() == Some("1") {
        eprintln!("GF_DEBUG: {} {}", req.method, url);
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(method = %req.method, %url, "sending request");

    let mut builder = client
        .http()
        .request(req.method.clone(), url)
        .header(ACCEPT, "application/json");
    if let Some(jwt) = bearer {
        builder = builder.header(AUTHORIZATION, format!("Bearer {jwt}"));
    }
    if let Some(body) = &req.body {
        builder = builder.json(body);
    }

    let resp = builder.send().await?;
    let status = resp.status();
    let text = resp.text().await?;

    #[cfg(feature = "tracing")]
    tracing::debug!(%endpoint, status = status.as_u16(), bytes = text.len(), "received response");

    if !status.is_success() {
        #[cfg(feature = "tracing")]
        tracing::error!(%endpoint, status = status.as_u16(), body = %text, "request failed");

        let message = remote_message(&text)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or_default().to_string());
        return Err(GfError::from_status(status.as_u16(), endpoint, message));
    }

    decode(&endpoint, &text)
}

/// Parses a success body; an empty body decodes like JSON `null`.
pub(crate) fn decode<T: DeserializeOwned>(endpoint: &str, text: &str) -> Result<T, GfError> {
    let body = if text.trim().is_empty() { "null" } else { text };
    serde_json::from_str(body).map_err(|e| GfError::Data {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    })
}

/// Pulls the human readable part out of an error body.
///
/// Ghostfolio answers with `{"message": "...", "statusCode": n}` where `message` may also
/// be a list of validation messages. Anything else is returned raw, truncated.
fn remote_message(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(text) {
        match map.get("message") {
            Some(serde_json::Value::String(s)) => return Some(s.clone()),
            Some(serde_json::Value::Array(items)) => {
                let joined = items
                    .iter()
                    .map(|v| v.as_str().map_or_else(|| v.to_string(), str::to_string))
                    .collect::<Vec<_>>()
                    .join("; ");
                return Some(joined);
            }
            _ => {}
        }
        if let Some(serde_json::Value::String(s)) = map.get("error") {
            return Some(s.clone());
        }
    }

    Some(truncate(text, MAX_MESSAGE_LEN))
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &s[..end])
}
