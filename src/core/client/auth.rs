//! Access token → session token exchange.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::constants::AUTH_ENDPOINT;
use crate::core::{ApiRequest, GfError, net};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnonymousLogin<'a> {
    access_token: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthTokenEnvelope {
    auth_token: Option<String>,
}

impl super::GhostfolioClient {
    /// Returns a valid session token, exchanging the access token if none is cached.
    pub(crate) async fn ensure_session(&self) -> Result<String, GfError> {
        // Fast path: a live token under the read lock.
        if let Some(jwt) = self.live_session().await {
            return Ok(jwt);
        }

        // Slow path: only one task performs the exchange.
        let _guard = self.session_fetch_lock.lock().await;

        // Another task may have finished the exchange while this one waited.
        if let Some(jwt) = self.live_session().await {
            return Ok(jwt);
        }

        let jwt = self.exchange_token().await?;

        let mut state = self.state.write().await;
        state.jwt = Some(jwt.clone());
        state.expires_at = Some(Instant::now() + self.session_lifetime());
        Ok(jwt)
    }

    /// Drops the cached session token so the next call authenticates again.
    ///
    /// Only `rejected` is dropped: a newer token obtained by a concurrent call stays.
    pub(crate) async fn clear_session(&self, rejected: &str) {
        let mut state = self.state.write().await;
        if state.jwt.as_deref() == Some(rejected) {
            state.jwt = None;
            state.expires_at = None;
        }
    }

    async fn live_session(&self) -> Option<String> {
        let state = self.state.read().await;
        match (&state.jwt, state.expires_at) {
            (Some(jwt), Some(exp)) if Instant::now() < exp => Some(jwt.clone()),
            _ => None,
        }
    }

    async fn exchange_token(&self) -> Result<String, GfError> {
        let req = ApiRequest::post(AUTH_ENDPOINT).json(&AnonymousLogin {
            access_token: self.token(),
        })?;

        let envelope: AuthTokenEnvelope = net::send(self, &req, None).await?;

        envelope
            .auth_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| GfError::Auth("no authToken in response".into()))
    }
}
