//! Public client surface + builder.
//! Internals are split into `auth` (session token exchange), `raw` (untyped calls)
//! and `constants` (host, UA, lifetimes).

mod auth;
mod constants;
mod raw;

use crate::core::{ApiVersion, GfError};
use constants::{DEFAULT_HOST, ENV_HOST, ENV_TOKEN, USER_AGENT};
use reqwest::Client;
use std::env::VarError;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};
use url::Url;

#[derive(Debug, Default)]
struct SessionState {
    jwt: Option<String>,
    expires_at: Option<Instant>,
}

/// An authenticated handle to one Ghostfolio deployment.
///
/// Holds the access token, the host and a pooled HTTP client. Cloning is cheap and
/// clones share the same session token; independently built clients never do.
///
/// # Example
///
/// ```no_run
/// # use ghostfolio_rs::{DateRange, GhostfolioClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GhostfolioClient::new("my-security-token")?;
/// let holdings = client.holdings(DateRange::Max).await?;
/// println!("{} holdings", holdings.holdings.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GhostfolioClient {
    http: Client,
    host: Url,
    token: Arc<str>,
    session_lifetime: Duration,

    state: Arc<RwLock<SessionState>>,
    session_fetch_lock: Arc<Mutex<()>>,
}

impl fmt::Debug for GhostfolioClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GhostfolioClient")
            .field("host", &self.host.as_str())
            .finish_non_exhaustive()
    }
}

impl GhostfolioClient {
    /// Creates a client for the hosted service at `https://ghostfol.io`.
    ///
    /// # Errors
    ///
    /// Fails if the token is empty or the HTTP client cannot be created.
    pub fn new(token: impl Into<String>) -> Result<Self, GfError> {
        Self::builder(token).build()
    }

    /// Create a new builder.
    pub fn builder(token: impl Into<String>) -> GhostfolioClientBuilder {
        GhostfolioClientBuilder::new(token)
    }

    /// Builds a client from `GHOSTFOLIO_TOKEN` and the optional `GHOSTFOLIO_HOST`.
    ///
    /// # Errors
    ///
    /// Returns [`GfError::MissingConfig`] if the token variable is unset,
    /// [`GfError::InvalidParams`] if either variable is not valid unicode, or any
    /// error [`GhostfolioClientBuilder::build`] can return.
    pub fn from_env() -> Result<Self, GfError> {
        let token = env_var(ENV_TOKEN)?
            .ok_or_else(|| GfError::MissingConfig(format!("{ENV_TOKEN} is not set")))?;
        let mut builder = Self::builder(token);
        if let Some(host) = env_var(ENV_HOST)?
            && !host.trim().is_empty()
        {
            builder = builder.host(Url::parse(host.trim())?);
        }
        builder.build()
    }

    /// The base URL all endpoints are resolved against.
    pub fn host(&self) -> &Url {
        &self.host
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn token(&self) -> &str {
        &self.token
    }

    pub(crate) fn session_lifetime(&self) -> Duration {
        self.session_lifetime
    }

    /// Resolves `/api/<version>/<segments...>` against the host, keeping any sub-path.
    pub(crate) fn endpoint_url<S: AsRef<str>>(
        &self,
        version: ApiVersion,
        segments: &[S],
    ) -> Result<Url, GfError> {
        let mut url = self.host.clone();
        url.set_query(None);
        url.set_fragment(None);
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                GfError::InvalidParams(format!("host {} cannot carry a path", self.host))
            })?;
            path.pop_if_empty().push("api").push(version.as_str());
            path.extend(segments);
        }
        Ok(url)
    }
}

fn env_var(name: &str) -> Result<Option<String>, GfError> {
    match std::env::var(name) {
        Ok(v) => Ok(Some(v)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(GfError::InvalidParams(format!(
            "{name} is set but is not valid unicode"
        ))),
    }
}

/* ----------------------- Builder ----------------------- */

/// Configures and creates a [`GhostfolioClient`].
pub struct GhostfolioClientBuilder {
    token: String,
    host: Option<Url>,
    user_agent: Option<String>,
    accept_invalid_certs: bool,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    session_lifetime: Duration,
    preauth: Option<String>,
}

impl fmt::Debug for GhostfolioClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GhostfolioClientBuilder")
            .field("host", &self.host.as_ref().map(Url::as_str))
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("session_lifetime", &self.session_lifetime)
            .finish_non_exhaustive()
    }
}

impl GhostfolioClientBuilder {
    fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            host: None,
            user_agent: None,
            accept_invalid_certs: false,
            timeout: None,
            connect_timeout: None,
            session_lifetime: constants::SESSION_LIFETIME,
            preauth: None,
        }
    }

    /// Target a self-hosted deployment (e.g., `https://ghostfolio.example.org/`). Default: `https://ghostfol.io/`.
    pub fn host(mut self, url: Url) -> Self {
        self.host = Some(url);
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Skip TLS certificate verification, for self-hosted instances with self-signed certificates.
    pub fn accept_invalid_certs(mut self, yes: bool) -> Self {
        self.accept_invalid_certs = yes;
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// How long a session token is reused before the access token is exchanged again.
    /// Default: 30 days, Ghostfolio's default token lifetime. Lower it for servers
    /// configured with a shorter `JWT_EXPIRES_IN`.
    pub fn session_lifetime(mut self, lifetime: Duration) -> Self {
        self.session_lifetime = lifetime;
        self
    }

    /// Provide a session token up front, skipping the access token exchange until it is rejected.
    pub fn preauth(mut self, session_token: impl Into<String>) -> Self {
        self.preauth = Some(session_token.into());
        self
    }

    pub fn build(self) -> Result<GhostfolioClient, GfError> {
        if self.token.trim().is_empty() {
            return Err(GfError::InvalidParams("access token must not be empty".into()));
        }

        let host = match self.host {
            Some(h) => h,
            None => Url::parse(DEFAULT_HOST)?,
        };
        if !matches!(host.scheme(), "http" | "https") {
            return Err(GfError::InvalidParams(format!(
                "unsupported host scheme '{}'",
                host.scheme()
            )));
        }

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .danger_accept_invalid_certs(self.accept_invalid_certs);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        let state = SessionState {
            expires_at: self
                .preauth
                .as_ref()
                .map(|_| Instant::now() + self.session_lifetime),
            jwt: self.preauth,
        };

        Ok(GhostfolioClient {
            http,
            host,
            token: Arc::from(self.token),
            session_lifetime: self.session_lifetime,
            state: Arc::new(RwLock::new(state)),
            session_fetch_lock: Arc::new(Mutex::new(())),
        })
    }
}
